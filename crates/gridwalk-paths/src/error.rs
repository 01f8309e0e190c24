use std::fmt;

use gridwalk_core::Point;

/// Errors raised when a caller hands the grid or a search invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside `[0, width) × [0, height)`.
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// A grid or maze was requested with unusable dimensions.
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} is outside the {width}x{height} grid")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "invalid grid size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}
