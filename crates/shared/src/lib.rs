use serde::{Deserialize, Serialize};

/// 2D-точка в координатах поверхности рисования
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Середина между двумя точками
    pub fn midpoint(self, other: Point2D) -> Point2D {
        Point2D {
            x: (other.x - self.x) / 2.0 + self.x,
            y: (other.y - self.y) / 2.0 + self.y,
        }
    }

    /// Евклидово расстояние
    pub fn distance(self, other: Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Point2D { x: p[0], y: p[1] }
    }
}

/// Отрезок между двумя точками
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Build a segment from raw coordinates `(x1, y1) -> (x2, y2)`
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
        }
    }

    /// Середина отрезка
    pub fn center(&self) -> Point2D {
        self.start.midpoint(self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Zero length, or not representable with finite coordinates
    pub fn is_degenerate(&self) -> bool {
        !self.start.is_finite() || !self.end.is_finite() || self.start == self.end
    }
}

/// Read-only view of a drawing: committed segments, the in-progress preview
/// and all intersection points over the relevant segment set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawingSnapshot {
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Segment>,
    #[serde(default)]
    pub intersections: Vec<Point2D>,
    #[serde(default)]
    pub collapsing: bool,
}
