//! Simulated entities: the player, enemies and both kinds of projectile
//!
//! Every entity exposes the same capability set through [`Entity`] so the
//! match can advance, collide and draw them uniformly. Entities never refer
//! to each other or to the match that owns them.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, Rect};
use super::input::{Direction, HeldKeys};
use crate::consts::*;

/// Draw/collision class of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
}

/// Shared behaviour of everything on the playfield
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Advance by one tick
    fn advance(&mut self, arena: &Arena);

    fn bounds(&self) -> Rect;

    /// True once the entity has left the arena for good
    fn is_expired(&self, arena: &Arena) -> bool;
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Health; may dip below zero on the killing tick
    pub health: f32,
    pub speed: f32,
    /// Movement keys sampled for the current frame
    #[serde(skip)]
    pub controls: HeldKeys,
}

impl Player {
    /// Spawn at the default position near the bottom of the arena
    pub fn spawn(arena: &Arena) -> Self {
        let mut rect = Rect::new(
            arena.width / 2.0,
            arena.height - PLAYER_SPAWN_OFFSET,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        // Narrow arenas would otherwise spawn the ship half off-screen
        rect.clamp_within(arena);
        Self {
            rect,
            health: PLAYER_MAX_HEALTH,
            speed: PLAYER_SPEED,
            controls: HeldKeys::none(),
        }
    }

    /// Apply one tick of movement from held keys, then clamp into the arena.
    /// Diagonals are not normalized and opposite directions cancel out.
    pub fn steer(&mut self, held: HeldKeys, arena: &Arena) {
        let mut delta = Vec2::ZERO;
        if held.direction_held(Direction::Left) {
            delta.x -= self.speed;
        }
        if held.direction_held(Direction::Right) {
            delta.x += self.speed;
        }
        if held.direction_held(Direction::Up) {
            delta.y -= self.speed;
        }
        if held.direction_held(Direction::Down) {
            delta.y += self.speed;
        }
        self.rect.pos += delta;
        self.rect.clamp_within(arena);
    }

    pub fn apply_damage(&mut self, amount: f32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Health as a fraction of the maximum, clamped to [0, 1] for health bars
    pub fn health_fraction(&self) -> f32 {
        (self.health / PLAYER_MAX_HEALTH).clamp(0.0, 1.0)
    }

    /// Where player bullets leave the ship: horizontal center, top edge
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.top())
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn advance(&mut self, arena: &Arena) {
        let held = self.controls;
        self.steer(held, arena);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_expired(&self, _arena: &Arena) -> bool {
        // The player lives as long as the match
        false
    }
}

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Player,
    Enemy,
}

/// A bullet travelling in a straight vertical line at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub rect: Rect,
    /// Vertical velocity in pixels per tick (negative = upward)
    pub velocity: f32,
    pub alive: bool,
}

impl Projectile {
    /// Player shot: centered on `muzzle.x`, bottom edge at `muzzle.y`, moving up
    pub fn player_shot(muzzle: Vec2) -> Self {
        Self {
            kind: ProjectileKind::Player,
            rect: Rect::from_center_bottom(muzzle.x, muzzle.y, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)),
            velocity: PLAYER_BULLET_VELOCITY,
            alive: true,
        }
    }

    /// Enemy shot: centered on `origin.x`, top edge at `origin.y`, moving down
    pub fn enemy_shot(origin: Vec2) -> Self {
        Self {
            kind: ProjectileKind::Enemy,
            rect: Rect::from_center_top(origin.x, origin.y, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)),
            velocity: ENEMY_BULLET_VELOCITY,
            alive: true,
        }
    }
}

impl Entity for Projectile {
    fn kind(&self) -> EntityKind {
        match self.kind {
            ProjectileKind::Player => EntityKind::PlayerBullet,
            ProjectileKind::Enemy => EntityKind::EnemyBullet,
        }
    }

    fn advance(&mut self, _arena: &Arena) {
        self.rect.pos.y += self.velocity;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_expired(&self, arena: &Arena) -> bool {
        match self.kind {
            ProjectileKind::Player => self.rect.bottom() < 0.0,
            ProjectileKind::Enemy => self.rect.top() > arena.height,
        }
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub health: i32,
    /// Descent speed in pixels per tick, in [1, 2)
    pub speed: f32,
    /// Ticks until the next shot
    pub shoot_cooldown: i32,
    pub alive: bool,
}

impl Enemy {
    /// Spawn just above the visible arena at a random column
    pub fn spawn(arena: &Arena, rng: &mut impl Rng) -> Self {
        let max_x = (arena.width - ENEMY_SIZE).max(0.0) as i32;
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(ENEMY_SPAWN_Y_MIN..=ENEMY_SPAWN_Y_MAX);
        let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        Self {
            rect: Rect::new(x as f32, y as f32, ENEMY_SIZE, ENEMY_SIZE),
            health: ENEMY_MAX_HEALTH,
            speed,
            shoot_cooldown: roll_cooldown(rng),
            alive: true,
        }
    }

    /// Count down the shoot timer. Returns true exactly once per expiry and
    /// rolls a fresh cooldown when it does.
    pub fn tick_shoot_timer(&mut self, rng: &mut impl Rng) -> bool {
        self.shoot_cooldown -= 1;
        if self.shoot_cooldown <= 0 {
            self.shoot_cooldown = roll_cooldown(rng);
            true
        } else {
            false
        }
    }

    /// Subtract damage. Returns true if this hit killed the enemy.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.alive;
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
        was_alive && !self.alive
    }

    /// Health as a fraction of a fresh enemy's, clamped to [0, 1] for health bars
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / ENEMY_MAX_HEALTH as f32).clamp(0.0, 1.0)
    }

    /// Where enemy bullets leave the ship: horizontal center, bottom edge
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.rect.center_x(), self.rect.bottom())
    }
}

impl Entity for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn advance(&mut self, _arena: &Arena) {
        self.rect.pos.y += self.speed;
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_expired(&self, arena: &Arena) -> bool {
        self.rect.top() > arena.height
    }
}

fn roll_cooldown(rng: &mut impl Rng) -> i32 {
    rng.random_range(ENEMY_COOLDOWN_MIN..=ENEMY_COOLDOWN_MAX)
}
