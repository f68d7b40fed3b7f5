//! Read-only view of a match for the presentation layer
//!
//! Renderers never touch [`MatchState`] directly; they get a [`Snapshot`] with
//! everything needed to draw one frame and the HUD.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::geometry::{Arena, Rect};
use super::state::{MatchPhase, MatchState};
use crate::consts::*;

/// One drawable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Health bar fill in [0, 1]; only ships carry one
    pub health_fraction: Option<f32>,
}

/// HUD readout for the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHud {
    pub health: f32,
    /// Health as shown on the HUD (truncated toward zero)
    pub health_display: i32,
    /// At or below half health; HUD switches to the warning color
    pub health_low: bool,
}

/// Contents of the game-over panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverPanel {
    pub final_score: u32,
    pub waves_completed: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub phase: MatchPhase,
    pub tick: u64,
    pub score: u32,
    pub wave: u32,
    pub enemies_alive: usize,
    pub enemies_max: u32,
    pub player: PlayerHud,
    /// Draw order: enemies, player bullets, enemy bullets, player last
    pub entities: Vec<EntityView>,
    pub game_over: Option<GameOverPanel>,
}

impl Snapshot {
    pub fn capture(state: &MatchState, arena: &Arena) -> Self {
        let mut entities = Vec::with_capacity(
            state.enemies.len() + state.player_bullets.len() + state.enemy_bullets.len() + 1,
        );

        entities.extend(state.enemies.iter().filter(|e| e.alive).map(|e| EntityView {
            kind: e.kind(),
            rect: e.bounds(),
            health_fraction: Some(e.health_fraction()),
        }));
        entities.extend(
            state
                .player_bullets
                .iter()
                .chain(state.enemy_bullets.iter())
                .filter(|b| b.alive)
                .map(|b| EntityView {
                    kind: b.kind(),
                    rect: b.bounds(),
                    health_fraction: None,
                }),
        );
        entities.push(EntityView {
            kind: state.player.kind(),
            rect: state.player.bounds(),
            health_fraction: Some(state.player.health_fraction()),
        });

        let game_over = (state.phase == MatchPhase::GameOver).then(|| GameOverPanel {
            final_score: state.score,
            waves_completed: state.waves_completed(),
        });

        Self {
            arena: *arena,
            phase: state.phase,
            tick: state.ticks,
            score: state.score,
            wave: state.wave.number,
            enemies_alive: state.live_enemies(),
            enemies_max: state.wave.max_enemies,
            player: PlayerHud {
                health: state.player.health,
                health_display: state.player.health as i32,
                health_low: state.player.health <= PLAYER_MAX_HEALTH / 2.0,
            },
            entities,
            game_over,
        }
    }

    /// Entities of one kind
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &EntityView> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn player_rect(&self) -> Rect {
        self.of_kind(EntityKind::Player)
            .next()
            .map(|e| e.rect)
            .unwrap_or_else(|| Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT))
    }
}
