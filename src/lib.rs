pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod renderer;

pub use error::MazeError;
pub use generators::{GenerationStats, MazeGenerator};
pub use maze::{Cell, Maze};
