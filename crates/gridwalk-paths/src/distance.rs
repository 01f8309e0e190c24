use gridwalk_core::Point;

/// Euclidean (L2) distance between two cells, over integer deltas.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from((a.x - b.x).abs());
    let dy = f64::from((a.y - b.y).abs());
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points: the hop count on an open
/// 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_values() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(2, 2)), 0.0);
        assert!((euclidean(Point::new(0, 0), Point::new(1, 1)) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            euclidean(Point::new(-1, 7), Point::new(4, 2)),
            euclidean(Point::new(4, 2), Point::new(-1, 7))
        );
    }

    #[test]
    fn chebyshev_values() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, 1)), 3);
        assert_eq!(chebyshev(Point::new(4, 4), Point::new(1, 0)), 4);
    }
}
