//! The carved maze layout and its conversion into a searchable [`Grid`].

use std::fmt;

use gridwalk_core::{Point, Range};
use gridwalk_paths::{Grid, GridError};

/// Kind of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeCell {
    Path,
    Wall,
}

/// A grid-shaped map from coordinates to [`MazeCell`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeData"))]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<MazeCell>,
}

impl Maze {
    /// A maze of the given size with every cell a wall.
    pub(crate) fn walled(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![MazeCell::Wall; Range::sized(width, height).len()],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The maze rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    #[inline]
    pub(crate) fn index(&self, p: Point) -> usize {
        p.y as usize * self.width as usize + p.x as usize
    }

    pub(crate) fn set(&mut self, p: Point, kind: MazeCell) {
        let i = self.index(p);
        self.cells[i] = kind;
    }

    /// Kind of the cell at `p`, failing on out-of-bounds coordinates.
    pub fn cell_kind(&self, p: Point) -> Result<MazeCell, GridError> {
        self.at(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Kind of the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<MazeCell> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is an in-bounds path cell.
    pub fn is_path(&self, p: Point) -> bool {
        self.at(p) == Some(MazeCell::Path)
    }

    /// Count the cells of the given kind.
    pub fn count(&self, kind: MazeCell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate over `(Point, MazeCell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, MazeCell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Write the layout into `grid`: path cells become walkable, walls
    /// become blocked. Movement penalties are left untouched.
    ///
    /// `grid` must have the maze's exact size.
    pub fn apply_to(&self, grid: &mut Grid) -> Result<(), GridError> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(GridError::InvalidSize {
                width: grid.width(),
                height: grid.height(),
            });
        }
        for (p, kind) in self.iter() {
            grid.set_walkable(p, kind == MazeCell::Path)?;
        }
        Ok(())
    }

    /// A fresh [`Grid`] whose walkability mirrors this maze.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        let mut grid = Grid::new(self.width, self.height)?;
        self.apply_to(&mut grid)?;
        Ok(grid)
    }
}

impl fmt::Display for Maze {
    /// One text row per maze row, `y = 0` first: `.` for path, `#` for wall.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for c in row {
                let ch = match c {
                    MazeCell::Path => '.',
                    MazeCell::Wall => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeData {
    width: i32,
    height: i32,
    cells: Vec<MazeCell>,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeData> for Maze {
    type Error = GridError;

    fn try_from(data: MazeData) -> Result<Self, GridError> {
        let size_error = GridError::InvalidSize {
            width: data.width,
            height: data.height,
        };
        let len = Range::sized(data.width, data.height).len();
        if data.width < 1 || data.height < 1 || len > gridwalk_paths::MAX_CELLS {
            return Err(size_error);
        }
        if data.cells.len() != len {
            return Err(size_error);
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            cells: data.cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_paths::Cell;

    fn sample() -> Maze {
        let mut m = Maze::walled(3, 2);
        m.set(Point::new(0, 0), MazeCell::Path);
        m.set(Point::new(1, 0), MazeCell::Path);
        m.set(Point::new(2, 1), MazeCell::Path);
        m
    }

    #[test]
    fn walled_maze_has_no_path() {
        let m = Maze::walled(4, 3);
        assert_eq!(m.count(MazeCell::Wall), 12);
        assert_eq!(m.count(MazeCell::Path), 0);
    }

    #[test]
    fn cell_kind_and_bounds() {
        let m = sample();
        assert_eq!(m.cell_kind(Point::new(1, 0)), Ok(MazeCell::Path));
        assert_eq!(m.cell_kind(Point::new(1, 1)), Ok(MazeCell::Wall));
        assert_eq!(
            m.cell_kind(Point::new(3, 0)),
            Err(GridError::OutOfBounds {
                pos: Point::new(3, 0),
                width: 3,
                height: 2
            })
        );
        assert!(m.is_path(Point::new(2, 1)));
        assert!(!m.is_path(Point::new(-1, 0)));
    }

    #[test]
    fn display_rows() {
        assert_eq!(sample().to_string(), "..#\n##.\n");
    }

    #[test]
    fn to_grid_mirrors_layout() {
        let m = sample();
        let g = m.to_grid().unwrap();
        assert_eq!(g.count_walkable(), 3);
        for (p, kind) in m.iter() {
            assert_eq!(g.at(p).map(|c| c.walkable), Some(kind == MazeCell::Path));
        }
    }

    #[test]
    fn apply_to_keeps_penalties() {
        let m = sample();
        let mut g = Grid::new(3, 2).unwrap();
        g.set_move_penalty(Point::new(1, 0), 4).unwrap();
        m.apply_to(&mut g).unwrap();
        assert_eq!(g.at(Point::new(1, 0)), Some(Cell::with_penalty(4)));
        assert_eq!(g.at(Point::new(0, 1)).map(|c| c.walkable), Some(false));
    }

    #[test]
    fn apply_to_rejects_other_sizes() {
        let mut g = Grid::new(2, 3).unwrap();
        assert_eq!(
            sample().apply_to(&mut g),
            Err(GridError::InvalidSize {
                width: 2,
                height: 3
            })
        );
    }
}
