//! Match state and core simulation types
//!
//! Everything a match needs to resume from a given tick lives in [`MatchState`];
//! the orchestrating [`Match`](super::tick::Match) adds the arena, RNG and event queue.

use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Player, Projectile};
use super::geometry::Arena;
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// Player destroyed; waiting for restart
    GameOver,
}

/// Notable things that happened during a tick, for sound/effects hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    PlayerFired,
    EnemySpawned,
    EnemyFired,
    /// An enemy destroyed by player fire
    EnemyKilled { score: u32 },
    /// An enemy that left the bottom of the arena
    EnemyEscaped,
    /// Player took damage this tick
    PlayerHit { damage: f32, health: f32 },
    /// A wave was cleared and the next one started
    WaveCleared { next_wave: u32 },
    GameOver { score: u32, waves_completed: u32 },
    Restarted,
}

/// Spawn bookkeeping for the current wave
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveState {
    /// 1-based wave number
    pub number: u32,
    pub enemies_spawned: u32,
    /// Kills this wave; informational only
    pub enemies_killed: u32,
    pub max_enemies: u32,
    /// Ticks between spawns
    pub spawn_interval: i32,
    /// Ticks until the next spawn; may go negative
    pub spawn_cooldown: i32,
}

impl WaveState {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            enemies_spawned: 0,
            enemies_killed: 0,
            max_enemies: max_enemies_for_wave(number),
            spawn_interval: spawn_interval_for_wave(number),
            spawn_cooldown: 0,
        }
    }

    /// Move on to the next wave. The spawn cooldown carries over.
    pub fn advance(&mut self) {
        self.number += 1;
        self.enemies_spawned = 0;
        self.enemies_killed = 0;
        self.max_enemies = max_enemies_for_wave(self.number);
        self.spawn_interval = spawn_interval_for_wave(self.number);
    }

    pub fn all_spawned(&self) -> bool {
        self.enemies_spawned >= self.max_enemies
    }
}

/// Enemies in a wave: 5 + 2 * wave
pub fn max_enemies_for_wave(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_WAVE * wave
}

/// Ticks between spawns: max(30, 60 - 5 * wave)
pub fn spawn_interval_for_wave(wave: u32) -> i32 {
    let wave = wave.min(i32::MAX as u32) as i32;
    SPAWN_INTERVAL_START
        .saturating_sub(SPAWN_INTERVAL_STEP.saturating_mul(wave))
        .max(SPAWN_INTERVAL_MIN)
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub score: u32,
    pub wave: WaveState,
    /// Simulation tick counter (stops advancing on game over)
    pub ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Projectile>,
    pub enemy_bullets: Vec<Projectile>,
}

impl MatchState {
    /// A fresh match: wave 1, full health, empty playfield
    pub fn new(arena: &Arena) -> Self {
        Self {
            phase: MatchPhase::Playing,
            score: 0,
            wave: WaveState::new(1),
            ticks: 0,
            player: Player::spawn(arena),
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
        }
    }

    /// Waves fully cleared so far
    pub fn waves_completed(&self) -> u32 {
        self.wave.number - 1
    }

    pub fn live_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Drop everything marked dead
    pub fn compact(&mut self) {
        self.enemies.retain(|e| e.alive);
        self.player_bullets.retain(|b| b.alive);
        self.enemy_bullets.retain(|b| b.alive);
    }
}
