//! Perfect maze carving and depth-first solving on a rectangular grid.
//!
//! A [`Grid`] starts fully walled. The [`Generator`] carves a spanning tree into it starting
//! from the entrance, the [`Solver`] then walks from the entrance to the exit through the
//! open walls. Both can report every change to an optional [`Renderer`].

pub mod algorithms;
pub mod array;
pub mod config;
pub mod dims;
pub mod gameboard;
pub mod renderer;

pub use algorithms::{FirstAvailable, Generator, Pick, Random, Solver};
pub use config::{ConfigError, MazeConfig};
pub use dims::Dims;
pub use gameboard::{Cell, CellWall, Grid, GridError, GridState};
pub use renderer::{NoRenderer, RenderEvent, Renderer};
