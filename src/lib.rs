//! Snake - a grid snake that grows by eating, dies on walls or itself,
//! and remembers the best score between runs.
//!
//! - `game`: the tick-based core, free of rendering and I/O
//! - `session`: intro/playing screens and the high-score save policy
//! - `highscore`: file-backed score store
//! - `assets`, `audio`, `render`: the macroquad shell

pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod game;
pub mod highscore;
pub mod render;
pub mod session;

pub use config::GameConfig;
pub use error::GameError;
