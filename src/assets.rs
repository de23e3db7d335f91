//! Textures and sounds, acquired once at startup

use macroquad::texture::{FilterMode, Texture2D, load_texture};
use tracing::info;

use crate::audio::Sounds;
use crate::config::GameConfig;
use crate::error::GameError;

/// Everything loaded from disk or synthesized before the first frame.
///
/// Owned by the main loop; dropping it releases the GPU and audio resources.
pub struct Assets {
    pub sounds: Sounds,
    pub food_texture: Option<Texture2D>,
}

impl Assets {
    /// Load every asset the config names. The first failure aborts startup.
    pub async fn load(config: &GameConfig) -> Result<Self, GameError> {
        let food_texture = match &config.food_texture {
            Some(path) => {
                let texture = load_texture(&path.to_string_lossy())
                    .await
                    .map_err(|err| GameError::Texture {
                        path: path.clone(),
                        reason: format!("{err:?}"),
                    })?;
                texture.set_filter(FilterMode::Nearest);
                info!("Loaded food texture from {}", path.display());
                Some(texture)
            }
            None => None,
        };
        let sounds = Sounds::load(config.sound_dir.as_deref(), config.volume).await?;

        Ok(Self {
            sounds,
            food_texture,
        })
    }
}
