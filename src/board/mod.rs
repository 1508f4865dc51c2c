//! Board model: coordinates, directions, and the 3x3 grid.

pub mod position;
pub mod grid;

pub use position::{Direction, Position, BOARD_SIZE, CELL_COUNT};
pub use grid::Board;
