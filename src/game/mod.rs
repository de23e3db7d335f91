//! Core game logic, free of rendering and I/O

pub mod cue;
pub mod direction;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod timer;

pub use cue::{Cue, CueSink};
pub use direction::Direction;
pub use food::Food;
pub use grid::{Grid, Position, contains_cell};
pub use snake::Snake;
pub use state::{Collision, GameState, Tick};
pub use timer::TickTimer;
