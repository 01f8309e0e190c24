//! The cell grid searched by [`WeightedSearch`](crate::WeightedSearch) and
//! [`UnweightedSearch`](crate::UnweightedSearch).
//!
//! A [`Grid`] owns `width × height` [`Cell`] records in row-major order. Its
//! shape is fixed at construction; only the per-cell contents change between
//! searches. Search bookkeeping is never stored here, so a grid can be shared
//! read-only between any number of searchers.

use gridwalk_core::{Point, Range};

use crate::error::GridError;

/// Largest number of cells a grid may hold, so that every flat index fits
/// in an `i32` coordinate space.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Static terrain information for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Whether the weighted search may enter this cell.
    pub walkable: bool,
    /// Extra cost charged when the weighted search enters this cell.
    pub move_penalty: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self::open()
    }
}

impl Cell {
    /// A walkable cell with no penalty.
    pub const fn open() -> Self {
        Self {
            walkable: true,
            move_penalty: 0,
        }
    }

    /// A non-walkable cell.
    pub const fn blocked() -> Self {
        Self {
            walkable: false,
            move_penalty: 0,
        }
    }

    /// A walkable cell with the given movement penalty.
    pub const fn with_penalty(move_penalty: u32) -> Self {
        Self {
            walkable: true,
            move_penalty,
        }
    }
}

/// A fixed-size 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData"))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid of open, zero-penalty cells.
    ///
    /// Negative dimensions are rejected, as is any size holding more than
    /// [`MAX_CELLS`] cells. A zero dimension yields an empty grid that
    /// contains no coordinates.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 0 || height < 0 || Range::sized(width, height).len() > MAX_CELLS {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); Range::sized(width, height).len()],
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Bounds-check `p` and return its flat row-major index.
    #[inline]
    pub fn check(&self, p: Point) -> Result<usize, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(p))
    }

    /// Flat index of an in-bounds point.
    #[inline]
    pub(crate) fn index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    /// Point of a flat index.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Cell at a flat index.
    #[inline]
    pub(crate) fn at_index(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.check(p).ok().map(|i| self.cells[i])
    }

    /// Get the cell at a point, failing on out-of-bounds coordinates.
    pub fn cell(&self, p: Point) -> Result<Cell, GridError> {
        Ok(self.cells[self.check(p)?])
    }

    /// Replace the cell at a point.
    pub fn set(&mut self, p: Point, cell: Cell) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Change only the walkable flag of the cell at a point.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.cells[i].walkable = walkable;
        Ok(())
    }

    /// Change only the movement penalty of the cell at a point.
    pub fn set_move_penalty(&mut self, p: Point, move_penalty: u32) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.cells[i].move_penalty = move_penalty;
        Ok(())
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|c| c.walkable).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

/// Unvalidated wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, GridError> {
        let mut grid = Grid::new(data.width, data.height)?;
        if data.cells.len() != grid.len() {
            return Err(GridError::InvalidSize {
                width: data.width,
                height: data.height,
            });
        }
        grid.cells = data.cells;
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2).unwrap();
        g.set(Point::new(2, 1), Cell::blocked()).unwrap();
        g.set(Point::new(0, 1), Cell::with_penalty(4)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_with_wrong_cell_count_rejected() {
        let json = r#"{"width":2,"height":2,"cells":[{"walkable":true,"move_penalty":0}]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
