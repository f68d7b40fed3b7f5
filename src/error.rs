//! Configuration errors
//!
//! The simulation itself never fails; only loading and validating settings can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("arena {width}x{height} is too small (need at least {min_width}x{min_height})")]
    ArenaTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },

    #[error("tick rate must be non-zero")]
    ZeroTickRate,
}
