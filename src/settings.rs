//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::Arena;

/// How the host paces simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    /// Sleep between frames to hold the tick rate
    #[default]
    #[value(alias = "rt")]
    Realtime,
    /// Run ticks back to back (benchmarks, soak runs)
    #[value(alias = "fast")]
    Headless,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Simulation ===
    /// RNG seed; `None` picks one from the clock at startup
    pub seed: Option<u64>,
    /// Ticks per second
    pub tick_rate: u32,
    pub pacing: Pacing,

    // === Demo driver ===
    /// Matches the autopilot plays before exiting
    pub demo_matches: u32,
    /// Tick limit per match, in case the pilot never dies
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            seed: None,
            tick_rate: TICK_RATE,
            pacing: Pacing::Realtime,

            demo_matches: 3,
            demo_ticks: 60 * TICK_RATE as u64 * 5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the settings describe a playable game
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.arena()?;
        if self.tick_rate == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }

    /// Validated arena dimensions
    pub fn arena(&self) -> Result<Arena, SettingsError> {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Wall-clock length of one tick
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Configured seed, or one derived from the current time
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena().ok(), Some(Arena::default()));
        assert_eq!(settings.frame_duration(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "pacing": "headless" }"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.pacing, Pacing::Headless);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.tick_rate, TICK_RATE);
        assert_eq!(settings.effective_seed(), 42);
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let err = Settings::from_json(r#"{ "arena_width": 10.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::ArenaTooSmall { .. }));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = Settings::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::ZeroTickRate));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_pacing_names() {
        assert_eq!(Pacing::from_str("REALTIME", true), Ok(Pacing::Realtime));
        assert_eq!(Pacing::from_str("rt", false), Ok(Pacing::Realtime));
        assert_eq!(Pacing::from_str("fast", false), Ok(Pacing::Headless));
        assert!(Pacing::from_str("warp", true).is_err());

        // CLI names and JSON names agree
        let json = serde_json::to_string(&Pacing::Headless).expect("serialize");
        assert_eq!(json, "\"headless\"");
    }

    #[test]
    fn test_round_trip_json() {
        let settings = Settings {
            seed: Some(7),
            demo_matches: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        assert_eq!(Settings::from_json(&json).ok(), Some(settings));
    }
}
