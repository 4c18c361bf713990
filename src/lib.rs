#![warn(clippy::all)]

mod error;
mod grid;

pub use error::GridError;
pub use grid::LifeGrid;

pub const DEFAULT_WIDTH: usize = 256;
pub const DEFAULT_HEIGHT: usize = 256;
