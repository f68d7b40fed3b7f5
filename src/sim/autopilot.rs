//! Demo/attract-mode pilot
//!
//! Plays the game from a [`Snapshot`] the same way a human would: by holding
//! movement keys and pressing fire. It only sees what a renderer sees.

use super::entity::EntityKind;
use super::geometry::Rect;
use super::input::{FrameInput, HeldKeys, InputEvent, Key};
use super::snapshot::Snapshot;
use crate::consts::*;

/// Fire once every this many ticks
const FIRE_CADENCE: u64 = 8;
/// How far above the player (pixels) threats are tracked
const LOOKAHEAD: f32 = 140.0;
/// Extra horizontal clearance around the player when checking threats
const LANE_MARGIN: f32 = 6.0;
/// Horizontal slack before the pilot bothers lining up with a target
const AIM_TOLERANCE: f32 = PLAYER_SPEED;

/// Decide this frame's input
pub fn plan(snapshot: &Snapshot, tick: u64) -> FrameInput {
    if snapshot.game_over.is_some() {
        return FrameInput {
            held: HeldKeys::none(),
            events: vec![InputEvent::Restart],
        };
    }

    let player = snapshot.player_rect();
    let mut held = HeldKeys::none();
    // Hug the floor; it gives the most time to react
    held.press(Key::S);

    let danger = danger_zone(&player);
    let threat = snapshot
        .entities
        .iter()
        .filter(|e| matches!(e.kind, EntityKind::EnemyBullet | EntityKind::Enemy))
        .filter(|e| danger.overlaps(&e.rect))
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()));

    if let Some(threat) = threat {
        // Sidestep away from the threat's center, toward open space at the walls
        let room_left = player.left() >= PLAYER_SPEED;
        let room_right = player.right() + PLAYER_SPEED <= snapshot.arena.width;
        let go_left = if threat.rect.center_x() > player.center_x() {
            room_left
        } else {
            !room_right
        };
        held.press(if go_left { Key::A } else { Key::D });
    } else if let Some(target) = lowest_enemy(snapshot) {
        let dx = target.center_x() - player.center_x();
        if dx < -AIM_TOLERANCE {
            held.press(Key::ArrowLeft);
        } else if dx > AIM_TOLERANCE {
            held.press(Key::ArrowRight);
        }
    }

    let mut events = Vec::new();
    if tick % FIRE_CADENCE == 0 {
        events.push(InputEvent::Fire);
    }

    FrameInput { held, events }
}

/// Region above (and including) the player that the pilot keeps clear
fn danger_zone(player: &Rect) -> Rect {
    Rect::new(
        player.left() - LANE_MARGIN,
        player.top() - LOOKAHEAD,
        player.size.x + 2.0 * LANE_MARGIN,
        player.size.y + LOOKAHEAD,
    )
}

/// The enemy closest to the floor
fn lowest_enemy(snapshot: &Snapshot) -> Option<Rect> {
    snapshot
        .of_kind(EntityKind::Enemy)
        .map(|e| e.rect)
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Enemy, Projectile};
    use crate::sim::geometry::Arena;
    use crate::sim::input::Direction;
    use crate::sim::state::{MatchPhase, MatchState};
    use crate::sim::tick::Match;
    use glam::Vec2;

    #[test]
    fn test_restarts_after_game_over() {
        let mut state = MatchState::new(&Arena::default());
        state.phase = MatchPhase::GameOver;
        let input = plan(&Snapshot::capture(&state, &Arena::default()), 1);
        assert_eq!(input.events, vec![InputEvent::Restart]);
    }

    #[test]
    fn test_tracks_lowest_enemy() {
        let mut state = MatchState::new(&Arena::default());
        // Player at x 400..440; enemy far to the left, well above the danger zone
        state.enemies.push(Enemy {
            rect: Rect::new(50.0, 100.0, ENEMY_SIZE, ENEMY_SIZE),
            health: ENEMY_MAX_HEALTH,
            speed: 1.0,
            shoot_cooldown: 60,
            alive: true,
        });
        let input = plan(&Snapshot::capture(&state, &Arena::default()), 1);
        assert!(input.held.direction_held(Direction::Left));
        assert!(!input.held.direction_held(Direction::Right));
        assert!(input.held.direction_held(Direction::Down));
    }

    #[test]
    fn test_dodges_incoming_bullet() {
        let mut state = MatchState::new(&Arena::default());
        let player = state.player.rect;
        // Bullet just right of the player's center, 60px above
        state
            .enemy_bullets
            .push(Projectile::enemy_shot(Vec2::new(player.center_x() + 5.0, player.top() - 60.0)));
        let input = plan(&Snapshot::capture(&state, &Arena::default()), 1);
        assert!(input.held.direction_held(Direction::Left));
    }

    #[test]
    fn test_fire_cadence() {
        let state = MatchState::new(&Arena::default());
        let snap = Snapshot::capture(&state, &Arena::default());
        assert!(plan(&snap, 0).events.contains(&InputEvent::Fire));
        assert!(plan(&snap, FIRE_CADENCE).events.contains(&InputEvent::Fire));
        assert!(plan(&snap, 3).events.is_empty());
    }

    #[test]
    fn test_pilot_scores_points() {
        let mut m = Match::new(Arena::default(), 2024);
        let mut kills = 0;
        for tick in 0..3000 {
            let input = plan(&m.snapshot(), tick);
            m.step(&input);
            // Restarts reset the score, so count events instead
            kills += m
                .drain_events()
                .iter()
                .filter(|e| matches!(e, crate::sim::state::MatchEvent::EnemyKilled { .. }))
                .count();
        }
        assert!(kills > 0);
    }
}
