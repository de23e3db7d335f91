//! Persistent high score

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Somewhere to keep the best score between runs.
///
/// Both operations are best-effort: a failed load reads as 0 and a failed
/// save is dropped.
pub trait ScoreStore {
    fn load(&self) -> u32;
    fn save(&mut self, score: u32);
}

/// High score kept as a single JSON number in a text file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "No stored high score");
                return 0;
            }
        };
        serde_json::from_str(text.trim()).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), %err, "Ignoring unreadable high score");
            0
        })
    }

    fn save(&mut self, score: u32) {
        let text = match serde_json::to_string(&score) {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "Failed to encode high score");
                return;
            }
        };
        match fs::write(&self.path, text) {
            Ok(()) => debug!(score, path = %self.path.display(), "High score saved"),
            Err(err) => warn!(path = %self.path.display(), %err, "Failed to save high score"),
        }
    }
}
