//! **gridwalk-core** — geometry primitives for the gridwalk crates.
//!
//! Every grid, path and maze in the workspace is addressed with the integer
//! [`Point`] type and bounded by a half-open [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
