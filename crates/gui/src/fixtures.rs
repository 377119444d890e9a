//! Factory functions for creating test data.
//!
//! Segment sets with known intersection counts, used by tests and by the
//! JSON command examples.

use shared::*;

// ── Segment factories ──────────────────────────────────────────

/// Segment from raw coordinates.
pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::from_coords(x1, y1, x2, y2)
}

/// Two diagonals of the 10x10 square, crossing at (5, 5).
pub fn cross_pair() -> Vec<Segment> {
    vec![segment(0.0, 0.0, 10.0, 10.0), segment(0.0, 10.0, 10.0, 0.0)]
}

/// Two collinear segments on the x axis with a gap between them.
pub fn collinear_pair() -> Vec<Segment> {
    vec![segment(0.0, 0.0, 5.0, 0.0), segment(10.0, 0.0, 15.0, 0.0)]
}

/// Two parallel horizontal segments.
pub fn parallel_pair() -> Vec<Segment> {
    vec![segment(0.0, 0.0, 10.0, 0.0), segment(0.0, 5.0, 10.0, 5.0)]
}

/// `n` segments through `center`, evenly spread over half a turn.
///
/// Every pair crosses at the center, so there are `n * (n - 1) / 2`
/// intersections.
pub fn star(center: Point2D, radius: f64, n: usize) -> Vec<Segment> {
    (0..n)
        .map(|i| {
            let angle = std::f64::consts::PI * i as f64 / n as f64;
            let (sin, cos) = angle.sin_cos();
            Segment::new(
                Point2D::new(center.x - radius * cos, center.y - radius * sin),
                Point2D::new(center.x + radius * cos, center.y + radius * sin),
            )
        })
        .collect()
}

/// `rows` horizontal and `cols` vertical segments spanning `size`.
///
/// Lines sit strictly inside the square, so there are `rows * cols`
/// intersections and none between parallel lines.
pub fn grid(rows: usize, cols: usize, size: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(rows + cols);
    for r in 1..=rows {
        let y = size * r as f64 / (rows + 1) as f64;
        segments.push(segment(0.0, y, size, y));
    }
    for c in 1..=cols {
        let x = size * c as f64 / (cols + 1) as f64;
        segments.push(segment(x, 0.0, x, size));
    }
    segments
}

// ── Snapshot factories ─────────────────────────────────────────

/// Snapshot holding only committed segments.
pub fn snapshot_of(segments: Vec<Segment>) -> DrawingSnapshot {
    DrawingSnapshot {
        segments,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::pairwise_intersections;

    #[test]
    fn test_cross_pair() {
        let hits = pairwise_intersections(&cross_pair());
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point.x - 5.0).abs() < 1e-9);
        assert!((hits[0].point.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_pairs_without_intersections() {
        assert!(pairwise_intersections(&collinear_pair()).is_empty());
        assert!(pairwise_intersections(&parallel_pair()).is_empty());
    }

    #[test]
    fn test_star_factory() {
        let s = star(Point2D::new(50.0, 50.0), 20.0, 4);
        assert_eq!(s.len(), 4);
        for seg in &s {
            assert!((seg.length() - 40.0).abs() < 1e-9);
            assert!(seg.center().distance(Point2D::new(50.0, 50.0)) < 1e-9);
        }
        assert_eq!(pairwise_intersections(&s).len(), 6);
    }

    #[test]
    fn test_grid_factory() {
        let g = grid(2, 3, 100.0);
        assert_eq!(g.len(), 5);
        assert_eq!(pairwise_intersections(&g).len(), 6);
    }

    #[test]
    fn test_snapshot_of() {
        let snap = snapshot_of(cross_pair());
        assert_eq!(snap.segments.len(), 2);
        assert!(snap.preview.is_none());
        assert!(!snap.collapsing);
    }
}
