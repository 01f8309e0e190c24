//! Pathfinding over fixed-size 2D cell grids.
//!
//! - **A\*** lowest-cost search with per-cell movement penalties
//!   ([`WeightedSearch::find_path`])
//! - **BFS** fewest-hop search to the nearest cell matching a predicate
//!   ([`UnweightedSearch::find_path`]) and hop-count maps
//!   ([`UnweightedSearch::distance_map`])
//!
//! The caller owns the [`Grid`] and fills in walkability and penalties.
//! Searchers borrow it read-only and keep their own per-call bookkeeping, so
//! one searcher serves any number of sequential queries without allocating
//! after warm-up.
//!
//! | Search | Walkability | Path starts at | Unreachable |
//! |---|---|---|---|
//! | [`WeightedSearch`] | respected | cell after start | `Ok(None)` |
//! | [`UnweightedSearch`] | ignored | start | empty [`Path`] |
//!
//! Out-of-bounds coordinates are reported as [`GridError::OutOfBounds`].

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod path;

pub use astar::WeightedSearch;
pub use bfs::{HopNode, UNREACHABLE, UnweightedSearch};
pub use distance::{chebyshev, euclidean};
pub use error::GridError;
pub use grid::{Cell, Grid, MAX_CELLS};
pub use neighbors::Connectivity;
pub use path::Path;

pub use gridwalk_core::{Point, Range};
