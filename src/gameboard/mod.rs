pub mod cell;
pub use cell::{Cell, CellWall};

pub mod grid;
pub use grid::{Grid, GridError, GridState};
