use gridwalk_core::{Point, Range};

/// Which neighbouring cells a search may step to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// The four orthogonal neighbours.
    Cardinal,
    /// Orthogonal and diagonal neighbours.
    #[default]
    All,
}

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, 1),
];

const ALL: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

impl Connectivity {
    /// Step offsets in row-major order.
    #[inline]
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::All => &ALL,
        }
    }

    /// Neighbours of `p` that fall inside `bounds`.
    pub fn neighbors(self, p: Point, bounds: Range) -> impl Iterator<Item = Point> {
        self.offsets()
            .iter()
            .map(move |&d| p + d)
            .filter(move |&n| bounds.contains(n))
    }
}
