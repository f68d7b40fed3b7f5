//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Frame-locked motion (one tick per display frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BulletHits, count_enemy_contacts, resolve_enemy_bullets, resolve_player_bullets};
pub use entity::{Enemy, Entity, EntityKind, Player, Projectile, ProjectileKind};
pub use geometry::{Arena, Rect};
pub use input::{Direction, FrameInput, HeldKeys, InputEvent, Key, LoopSignal};
pub use snapshot::{EntityView, GameOverPanel, PlayerHud, Snapshot};
pub use state::{MatchEvent, MatchPhase, MatchState, WaveState};
pub use tick::Match;
