//! Segment intersection using kurbo vectors

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use shared::{Point2D, Segment};

// ============================================================================
// Kurbo helpers
// ============================================================================

/// Convert a surface point to a kurbo Point
pub fn to_point(p: Point2D) -> Point {
    Point::new(p.x, p.y)
}

/// Convert a kurbo Point back to a surface point
pub fn from_point(p: Point) -> Point2D {
    Point2D { x: p.x, y: p.y }
}

/// Unit vector pointing from `from` to `to`.
/// None when the points coincide or the direction is not finite.
pub fn unit_direction(from: Point2D, to: Point2D) -> Option<Vec2> {
    let v = to_point(to) - to_point(from);
    let len = v.hypot();
    if !(len > 0.0) || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

// ============================================================================
// Segment-segment intersection
// ============================================================================

/// A proper hit between two segments.
///
/// `t` is the parameter along the first segment, `s` along the second one
/// (both measured from the segment start, in `[0, 1]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub s: f64,
    pub t: f64,
    pub point: Point2D,
}

/// Solve the 2D line system for two segments and keep the result only when
/// the hit lies on both segments. Parallel and collinear pairs (zero
/// determinant) never report a hit, even when they overlap.
pub fn segment_crossing(a: &Segment, b: &Segment) -> Option<Crossing> {
    let a0 = to_point(a.start);
    let b0 = to_point(b.start);
    let d1 = to_point(a.end) - a0;
    let d2 = to_point(b.end) - b0;

    let d = d1.x * d2.y - d2.x * d1.y;
    if d == 0.0 {
        return None;
    }

    let p = a0 - b0;
    let s = (d1.x * p.y - d1.y * p.x) / d;
    if !(0.0..=1.0).contains(&s) {
        return None;
    }

    let t = (d2.x * p.y - d2.y * p.x) / d;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some(Crossing {
        s,
        t,
        point: from_point(a0 + d1 * t),
    })
}

/// Intersection point of two segments, endpoints included
pub fn intersect(a: &Segment, b: &Segment) -> Option<Point2D> {
    segment_crossing(a, b).map(|c| c.point)
}

/// Intersection found by the pairwise scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Index of the earlier segment
    pub first: usize,
    /// Index of the later segment (`first < second`)
    pub second: usize,
    pub point: Point2D,
}

/// Test every unordered pair `i < j` once, in insertion order
pub fn pairwise_intersections(segments: &[Segment]) -> Vec<Intersection> {
    let mut hits = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for (offset, b) in segments[i + 1..].iter().enumerate() {
            if let Some(point) = intersect(a, b) {
                hits.push(Intersection {
                    first: i,
                    second: i + 1 + offset,
                    point,
                });
            }
        }
    }
    hits
}
