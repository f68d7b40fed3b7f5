//! Wave Shooter - a wave-based 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state machine)
//! - `settings`: Data-driven configuration loaded from JSON
//! - `error`: Configuration errors
//!
//! Windowing, text and drawing are left to the host; it feeds a [`sim::FrameInput`]
//! in each frame and reads a [`sim::Snapshot`] back out.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Distance from the arena floor to the player's top edge at spawn
    pub const PLAYER_SPAWN_OFFSET: f32 = 60.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 35.0;
    pub const ENEMY_MAX_HEALTH: i32 = 20;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 2.0;
    /// Shoot cooldown range in ticks (inclusive)
    pub const ENEMY_COOLDOWN_MIN: i32 = 30;
    pub const ENEMY_COOLDOWN_MAX: i32 = 90;
    /// Spawn band above the visible arena (inclusive)
    pub const ENEMY_SPAWN_Y_MIN: i32 = -100;
    pub const ENEMY_SPAWN_Y_MAX: i32 = -40;

    /// Projectiles
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    pub const PLAYER_BULLET_VELOCITY: f32 = -10.0;
    pub const ENEMY_BULLET_VELOCITY: f32 = 7.0;

    /// Damage and scoring
    pub const PLAYER_BULLET_DAMAGE: i32 = 25;
    pub const ENEMY_BULLET_DAMAGE: f32 = 10.0;
    pub const CONTACT_DAMAGE_PER_TICK: f32 = 0.5;
    pub const KILL_SCORE: u32 = 10;

    /// Wave formula: enemies per wave = BASE + PER_WAVE * wave
    pub const WAVE_BASE_ENEMIES: u32 = 5;
    pub const WAVE_ENEMIES_PER_WAVE: u32 = 2;
    /// Spawn interval = max(MIN, START - STEP * wave)
    pub const SPAWN_INTERVAL_START: i32 = 60;
    pub const SPAWN_INTERVAL_STEP: i32 = 5;
    pub const SPAWN_INTERVAL_MIN: i32 = 30;
}
