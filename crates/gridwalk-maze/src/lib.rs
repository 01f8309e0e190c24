//! Maze generation for gridwalk grids.
//!
//! [`carve`] (or a reusable [`MazeCarver`]) produces a perfect [`Maze`] by
//! randomized depth-first carving from the origin. A maze converts into a
//! [`Grid`](gridwalk_paths::Grid) with [`Maze::to_grid`] or
//! [`Maze::apply_to`], ready for the searches in `gridwalk-paths`.

pub mod carver;
pub mod maze;

pub use carver::{Direction, MazeCarver, carve};
pub use maze::{Maze, MazeCell};
