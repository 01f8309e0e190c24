use gridwalk_core::Point;

/// An ordered sequence of cells returned by a search, with its cost.
///
/// [`WeightedSearch`](crate::WeightedSearch) paths start at the cell after
/// the start and end at the goal; `cost` is the goal's accumulated cost
/// including movement penalties. [`UnweightedSearch`](crate::UnweightedSearch)
/// paths include the start cell; `cost` is the hop count.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: f64) -> Self {
        Self { steps, cost }
    }

    /// The cells of the path, in travel order.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Accumulated cost of the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.steps.contains(&p)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.steps.iter().copied()
    }

    /// Consume the path and return its cells.
    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(vec![Point::new(1, 1), Point::new(2, 2)], 2.5);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.first(), Some(Point::new(1, 1)));
        assert_eq!(p.last(), Some(Point::new(2, 2)));
        assert!(p.contains(Point::new(2, 2)));
        assert!(!p.contains(Point::new(0, 0)));
        assert_eq!(p.cost(), 2.5);
        let collected: Vec<_> = (&p).into_iter().collect();
        assert_eq!(collected, p.steps());
        assert_eq!(p.into_steps().len(), 2);
    }

    #[test]
    fn default_is_empty() {
        let p = Path::default();
        assert!(p.is_empty());
        assert_eq!(p.first(), None);
        assert_eq!(p.cost(), 0.0);
    }
}
