//! Startup errors

use std::path::PathBuf;

use thiserror::Error;

use crate::game::Cue;

/// Everything that can stop the game from starting.
///
/// High-score I/O never ends up here, the store handles its own failures.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to load texture {}: {reason}", path.display())]
    Texture { path: PathBuf, reason: String },

    #[error("failed to load {cue:?} sound: {reason}")]
    Sound { cue: Cue, reason: String },
}
