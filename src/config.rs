//! Game configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::GameError;
use crate::game::Grid;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "snake.json";

/// Smallest board that still fits the starting snake at (6,9)..(4,9)
pub const MIN_CELL_COUNT: i32 = 10;

/// Largest board side; keeps cell counts and food sampling budgets small
pub const MAX_CELL_COUNT: i32 = 1000;

/// Tunables for one run of the game.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one cell in pixels
    pub cell_size: i32,
    /// Cells per board side
    pub cell_count: i32,
    /// Margin around the board in pixels
    pub offset: i32,
    /// Seconds between game-logic ticks
    pub tick_interval: f64,
    /// Where the high score lives
    pub high_score_path: PathBuf,
    /// Sound volume, 0.0..=1.0
    pub volume: f32,
    /// Optional image drawn for the food
    pub food_texture: Option<PathBuf>,
    /// Optional directory holding move.wav, eat.wav and wall.wav
    pub sound_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 30,
            cell_count: 18,
            offset: 75,
            tick_interval: 0.2,
            high_score_path: PathBuf::from("highscore.txt"),
            volume: 1.0,
            food_texture: None,
            sound_dir: None,
        }
    }
}

impl GameConfig {
    /// Read the config at `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        if !path.exists() {
            info!("No {} found, using default config", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.offset < 0 {
            return Err(GameError::InvalidConfig(format!(
                "offset must not be negative, got {}",
                self.offset
            )));
        }
        if self.cell_count < MIN_CELL_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "cell_count must be at least {MIN_CELL_COUNT}, got {}",
                self.cell_count
            )));
        }
        if self.cell_count > MAX_CELL_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "cell_count must be at most {MAX_CELL_COUNT}, got {}",
                self.cell_count
            )));
        }
        if self.window_side().is_none() {
            return Err(GameError::InvalidConfig(format!(
                "window of {} cells at {}px plus a {}px margin does not fit in i32 pixels",
                self.cell_count, self.cell_size, self.offset
            )));
        }
        if !(self.tick_interval > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "tick_interval must be positive, got {}",
                self.tick_interval
            )));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(GameError::InvalidConfig(format!(
                "volume must be within 0.0..=1.0, got {}",
                self.volume
            )));
        }
        Ok(())
    }

    // 2 * offset + cell_size * cell_count, or None on overflow
    fn window_side(&self) -> Option<i32> {
        let board = self.cell_size.checked_mul(self.cell_count)?;
        self.offset.checked_mul(2)?.checked_add(board)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.cell_count, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.cell_count, 18);
        assert_eq!(config.offset, 75);
        assert_eq!(config.tick_interval, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = GameConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "cell_count": 24, "tick_interval": 0.1 }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.cell_count, 24);
        assert_eq!(config.tick_interval, 0.1);
        assert_eq!(config.cell_size, 30);
        assert_eq!(config.high_score_path, PathBuf::from("highscore.txt"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ cell_count: ").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(GameError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_rejects_board_too_small_for_start() {
        let config = GameConfig {
            cell_count: 9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_board_too_large() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "cell_count": 50000 }"#).unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(GameError::InvalidConfig(_))
        ));

        let at_limit = GameConfig {
            cell_count: MAX_CELL_COUNT,
            cell_size: 1,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
        assert_eq!(at_limit.grid().total_cells(), 1_000_000);
    }

    #[test]
    fn test_rejects_pixel_overflow() {
        let huge_cells = GameConfig {
            cell_size: i32::MAX / 10,
            ..Default::default()
        };
        assert!(matches!(
            huge_cells.validate(),
            Err(GameError::InvalidConfig(_))
        ));

        let huge_margin = GameConfig {
            offset: i32::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(
            huge_margin.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_interval_and_volume() {
        let config = GameConfig {
            tick_interval: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            volume: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_from_config() {
        let grid = GameConfig::default().grid();
        assert_eq!(grid.cell_count(), 18);
        assert_eq!(grid.window_size(), (690.0, 690.0));
    }
}
