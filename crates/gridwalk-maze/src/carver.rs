//! Randomized depth-first maze carving.
//!
//! Carving starts at the origin and only ever stands on cells two steps
//! apart, knocking down the single cell in between. The visited cells
//! therefore form a spanning tree over the even-coordinate lattice: a
//! perfect maze in which every path cell is reachable from `(0, 0)` by
//! exactly one simple route.
//!
//! The walk uses an explicit stack instead of recursion, so maze size is
//! bounded by heap memory rather than by the call stack.

use gridwalk_core::{Point, Range};
use gridwalk_paths::{GridError, MAX_CELLS};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::maze::{Maze, MazeCell};

/// A cardinal carving direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in the order they are handed to the shuffle.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit step for this direction. `Up` grows `y`.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::Up => Point::new(0, 1),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, -1),
            Self::Left => Point::new(-1, 0),
        }
    }
}

/// One level of the depth-first walk.
struct Frame {
    pos: Point,
    dirs: [Direction; 4],
    next: usize,
}

/// Maze generator driven by a caller-supplied random source.
///
/// Output is fully determined by the size and the RNG state, so a seeded
/// RNG reproduces the same maze.
pub struct MazeCarver<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeCarver<R> {
    /// Create a new carver drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `width × height` maze. See [`carve`].
    pub fn carve(&mut self, width: i32, height: i32) -> Result<Maze, GridError> {
        carve(width, height, &mut self.rng)
    }
}

/// Carve a `width × height` maze starting at `(0, 0)`.
///
/// Every cell starts as a wall. On entering a cell it becomes a path and
/// the four directions are shuffled (Fisher–Yates, using `rng`). Each
/// direction in turn looks two steps ahead; if that cell is inside the maze
/// and not yet visited, the cell in between is opened and the walk descends
/// there before trying the next direction.
///
/// Both dimensions must be at least 1, and the maze may hold at most
/// [`MAX_CELLS`] cells.
pub fn carve<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<Maze, GridError> {
    if width < 1 || height < 1 || Range::sized(width, height).len() > MAX_CELLS {
        return Err(GridError::InvalidSize { width, height });
    }

    let mut maze = Maze::walled(width, height);
    let bounds = maze.bounds();
    let mut visited = vec![false; bounds.len()];
    let mut stack: Vec<Frame> = Vec::new();

    enter(&mut maze, &mut visited, &mut stack, Point::ZERO, rng);
    let mut max_depth = stack.len();

    while let Some(top) = stack.last_mut() {
        let Some(&dir) = top.dirs.get(top.next) else {
            stack.pop();
            continue;
        };
        top.next += 1;

        let wall = top.pos + dir.offset();
        let next = wall + dir.offset();
        if bounds.contains(next) && !visited[maze.index(next)] {
            maze.set(wall, MazeCell::Path);
            enter(&mut maze, &mut visited, &mut stack, next, rng);
            max_depth = max_depth.max(stack.len());
        }
    }

    debug!(
        "maze: carved {width}x{height}, {} path cells, max depth {max_depth}",
        maze.count(MazeCell::Path)
    );
    Ok(maze)
}

fn enter<R: Rng + ?Sized>(
    maze: &mut Maze,
    visited: &mut [bool],
    stack: &mut Vec<Frame>,
    pos: Point,
    rng: &mut R,
) {
    visited[maze.index(pos)] = true;
    maze.set(pos, MazeCell::Path);
    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    stack.push(Frame { pos, dirs, next: 0 });
}
