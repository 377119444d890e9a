//! Collapse animation: every frame both ends of each segment move toward its
//! midpoint by a fixed step until the segment vanishes.

use serde::{Deserialize, Serialize};
use shared::Point2D;

use super::segments::{SegmentCollection, SegmentError};
use crate::geometry::{from_point, to_point, unit_direction};
use crate::surface::{FrameScheduler, Surface};

/// Default shrink distance per frame, in surface units
pub const DEFAULT_LINE_STEP: f64 = 5.0;

/// Rule deciding when a shrinking segment is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// Both ends reached or passed the center along their direction of travel
    #[default]
    Directional,
    /// Per-axis test: `start.x >= c.x || start.y >= c.y` and
    /// `end.x <= c.x || end.y <= c.y`. Orientation dependent: segments that
    /// run right-to-left or are axis-aligned may finish on the first frame.
    AxisAny,
}

impl Convergence {
    /// `start`/`end` are the advanced positions, `center` and `direction`
    /// were computed before advancing.
    pub fn reached(
        &self,
        start: Point2D,
        end: Point2D,
        center: Point2D,
        direction: kurbo::Vec2,
    ) -> bool {
        match self {
            Convergence::Directional => {
                let start_left = (to_point(center) - to_point(start)).dot(direction);
                let end_left = (to_point(end) - to_point(center)).dot(direction);
                start_left <= 0.0 && end_left <= 0.0
            }
            Convergence::AxisAny => {
                (start.x >= center.x || start.y >= center.y)
                    && (end.x <= center.x || end.y <= center.y)
            }
        }
    }
}

/// Outcome of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseStatus {
    Running,
    /// Collection is empty, no further frame scheduled
    Finished,
}

/// Per-frame collapse step over a segment collection
#[derive(Debug, Clone, Copy)]
pub struct CollapseAnimator {
    line_step: f64,
    convergence: Convergence,
    frames: u32,
}

impl Default for CollapseAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_STEP, Convergence::default())
    }
}

impl CollapseAnimator {
    /// Non-positive or non-finite steps fall back to [`DEFAULT_LINE_STEP`]
    pub fn new(line_step: f64, convergence: Convergence) -> Self {
        let line_step = if line_step > 0.0 && line_step.is_finite() {
            line_step
        } else {
            tracing::warn!("Invalid collapse step {line_step}, using {DEFAULT_LINE_STEP}");
            DEFAULT_LINE_STEP
        };
        Self {
            line_step,
            convergence,
            frames: 0,
        }
    }

    pub fn line_step(&self) -> f64 {
        self.line_step
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    /// Frames run so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Shrink every segment once and drop the ones that converged.
    ///
    /// Works on the index range captured at entry; removals are applied after
    /// the scan, highest index first. Segments without a direction (zero
    /// length) are dropped without drawing. Returns the number removed.
    pub fn shrink(
        &self,
        segments: &mut SegmentCollection,
        surface: &mut dyn Surface,
    ) -> Result<usize, SegmentError> {
        let snapshot_len = segments.len();
        let mut finished = Vec::new();

        for index in 0..snapshot_len {
            let Some(segment) = segments.get_mut(index) else {
                continue;
            };
            let center = segment.center();
            let Some(direction) = unit_direction(segment.start, center) else {
                finished.push(index);
                continue;
            };

            surface.draw_line(segment.start, center);
            segment.start = from_point(to_point(segment.start) + direction * self.line_step);

            surface.draw_line(segment.end, center);
            segment.end = from_point(to_point(segment.end) - direction * self.line_step);

            if self
                .convergence
                .reached(segment.start, segment.end, center, direction)
            {
                finished.push(index);
            }
        }

        // С конца, чтобы индексы оставались валидными
        for &index in finished.iter().rev() {
            segments.remove_at(index)?;
        }
        Ok(finished.len())
    }

    /// One frame callback: clear, shrink, schedule the next frame, and stop
    /// (final clear + cancel) once the collection is empty.
    pub fn frame(
        &mut self,
        segments: &mut SegmentCollection,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<CollapseStatus, SegmentError> {
        surface.clear();
        let removed = self.shrink(segments, surface)?;
        self.frames += 1;

        let token = scheduler.schedule_next_frame();
        tracing::debug!(
            frame = self.frames,
            removed,
            remaining = segments.len(),
            "Collapse frame"
        );

        if segments.is_empty() {
            surface.clear();
            scheduler.cancel_frame(token);
            return Ok(CollapseStatus::Finished);
        }
        Ok(CollapseStatus::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, FrameClock};
    use shared::Segment;

    fn collection(segments: &[Segment]) -> SegmentCollection {
        let mut c = SegmentCollection::new();
        for s in segments {
            c.append(*s);
        }
        c
    }

    /// Run frames until finished; returns the frame count
    fn run_to_end(animator: &mut CollapseAnimator, c: &mut SegmentCollection, limit: u32) -> u32 {
        let mut surface = DisplayList::new();
        let mut clock = FrameClock::new();
        for n in 1..=limit {
            let status = animator.frame(c, &mut surface, &mut clock).unwrap();
            if status == CollapseStatus::Finished {
                assert!(clock.pending().is_none());
                assert!(surface.is_empty());
                return n;
            }
            assert!(clock.pending().is_some());
        }
        panic!("collapse did not finish in {limit} frames");
    }

    // --- Termination ---

    #[test]
    fn test_horizontal_segment_two_frames() {
        let mut c = collection(&[Segment::from_coords(0.0, 0.0, 20.0, 0.0)]);
        let mut a = CollapseAnimator::default();
        assert_eq!(run_to_end(&mut a, &mut c, 10), 2);
        assert_eq!(a.frames(), 2);
    }

    #[test]
    fn test_first_frame_moves_ends_by_step() {
        let mut c = collection(&[Segment::from_coords(0.0, 0.0, 20.0, 0.0)]);
        let mut a = CollapseAnimator::default();
        let mut surface = DisplayList::new();
        let mut clock = FrameClock::new();

        let status = a.frame(&mut c, &mut surface, &mut clock).unwrap();
        assert_eq!(status, CollapseStatus::Running);
        assert_eq!(c.all()[0], Segment::from_coords(5.0, 0.0, 15.0, 0.0));

        // Нарисованы обе половины до сдвига
        assert_eq!(
            surface.lines(),
            vec![
                (Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
                (Point2D::new(20.0, 0.0), Point2D::new(10.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let cases = [
            Segment::from_coords(20.0, 0.0, 0.0, 0.0),
            Segment::from_coords(0.0, 20.0, 0.0, 0.0),
            Segment::from_coords(0.0, 0.0, 0.0, 20.0),
        ];
        for s in cases {
            let mut c = collection(&[s]);
            let mut a = CollapseAnimator::default();
            assert_eq!(run_to_end(&mut a, &mut c, 10), 2, "segment {s:?}");
        }
    }

    #[test]
    fn test_frame_bound() {
        let segments = [
            Segment::from_coords(0.0, 0.0, 100.0, 37.0),
            Segment::from_coords(-40.0, 12.0, 3.0, -80.0),
            Segment::from_coords(5.0, 5.0, 6.0, 6.0),
            Segment::from_coords(300.0, 300.0, 0.0, 0.0),
        ];
        let max_len = segments.iter().map(|s| s.length()).fold(0.0, f64::max);
        let step = 5.0;
        let bound = (max_len / (2.0 * step)).ceil() as u32 + 1;

        let mut c = collection(&segments);
        let mut a = CollapseAnimator::new(step, Convergence::Directional);
        let frames = run_to_end(&mut a, &mut c, 1000);
        assert!(frames <= bound, "{frames} frames > bound {bound}");
    }

    #[test]
    fn test_empty_collection_finishes_immediately() {
        let mut c = SegmentCollection::new();
        let mut a = CollapseAnimator::default();
        assert_eq!(run_to_end(&mut a, &mut c, 1), 1);
    }

    // --- Monotonic shrink ---

    #[test]
    fn test_segments_shrink_every_frame() {
        let mut c = collection(&[
            Segment::from_coords(0.0, 0.0, 80.0, 60.0),
            Segment::from_coords(10.0, 90.0, 70.0, 10.0),
            Segment::from_coords(-50.0, 0.0, 50.0, 0.0),
        ]);
        let mut a = CollapseAnimator::new(3.0, Convergence::Directional);
        let mut surface = DisplayList::new();
        let mut clock = FrameClock::new();

        let mut previous: Vec<Segment> = c.all().to_vec();
        while a.frame(&mut c, &mut surface, &mut clock).unwrap() == CollapseStatus::Running {
            // Удаление стабильно, так что сравниваем по совпадающим центрам
            for seg in c.all() {
                let before = previous
                    .iter()
                    .find(|p| p.center().distance(seg.center()) < 1e-6)
                    .expect("segment kept its center");
                assert!(seg.length() < before.length());
            }
            previous = c.all().to_vec();
        }
        assert!(c.is_empty());
    }

    #[test]
    fn test_center_is_preserved() {
        let mut c = collection(&[Segment::from_coords(3.0, 4.0, 63.0, 84.0)]);
        let center = c.all()[0].center();
        let a = CollapseAnimator::default();
        let mut surface = DisplayList::new();
        a.shrink(&mut c, &mut surface).unwrap();
        assert!(c.all()[0].center().distance(center) < 1e-9);
    }

    // --- Removal ---

    #[test]
    fn test_removal_keeps_remaining_order() {
        // Короткие отрезки исчезают в первом кадре, длинные остаются
        let mut c = collection(&[
            Segment::from_coords(0.0, 0.0, 4.0, 0.0),
            Segment::from_coords(0.0, 10.0, 100.0, 10.0),
            Segment::from_coords(0.0, 20.0, 4.0, 20.0),
            Segment::from_coords(0.0, 30.0, 100.0, 30.0),
        ]);
        let a = CollapseAnimator::default();
        let mut surface = DisplayList::new();
        let removed = a.shrink(&mut c, &mut surface).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(c.len(), 2);
        assert_eq!(c.all()[0].start.y, 10.0);
        assert_eq!(c.all()[1].start.y, 30.0);
    }

    #[test]
    fn test_zero_length_removed_without_drawing() {
        let mut c = collection(&[Segment::from_coords(5.0, 5.0, 5.0, 5.0)]);
        let a = CollapseAnimator::default();
        let mut surface = DisplayList::new();
        assert_eq!(a.shrink(&mut c, &mut surface).unwrap(), 1);
        assert!(c.is_empty());
        assert!(surface.is_empty());
    }

    // --- Convergence policies ---

    #[test]
    fn test_axis_any_finishes_axis_aligned_early() {
        let mut c = collection(&[Segment::from_coords(0.0, 0.0, 20.0, 0.0)]);
        let mut a = CollapseAnimator::new(5.0, Convergence::AxisAny);
        // y-компонента равна центру сразу, поэтому хватает одного кадра
        assert_eq!(run_to_end(&mut a, &mut c, 10), 1);
    }

    #[test]
    fn test_axis_any_diagonal() {
        let mut c = collection(&[Segment::from_coords(0.0, 0.0, 20.0, 20.0)]);
        let mut a = CollapseAnimator::new(5.0, Convergence::AxisAny);
        assert_eq!(run_to_end(&mut a, &mut c, 10), 3);
    }

    #[test]
    fn test_directional_reached() {
        let dir = kurbo::Vec2::new(1.0, 0.0);
        let center = Point2D::new(10.0, 0.0);
        let policy = Convergence::Directional;
        assert!(!policy.reached(Point2D::new(5.0, 0.0), Point2D::new(15.0, 0.0), center, dir));
        assert!(policy.reached(Point2D::new(10.0, 0.0), Point2D::new(10.0, 0.0), center, dir));
        assert!(policy.reached(Point2D::new(12.0, 0.0), Point2D::new(8.0, 0.0), center, dir));
    }

    #[test]
    fn test_convergence_serde() {
        let json = serde_json::to_string(&Convergence::AxisAny).unwrap();
        assert_eq!(json, r#""axis_any""#);
        let back: Convergence = serde_json::from_str(r#""directional""#).unwrap();
        assert_eq!(back, Convergence::Directional);
    }

    // --- Config ---

    #[test]
    fn test_invalid_step_falls_back() {
        assert_eq!(CollapseAnimator::new(0.0, Convergence::Directional).line_step(), DEFAULT_LINE_STEP);
        assert_eq!(CollapseAnimator::new(-3.0, Convergence::Directional).line_step(), DEFAULT_LINE_STEP);
        assert_eq!(CollapseAnimator::new(f64::NAN, Convergence::Directional).line_step(), DEFAULT_LINE_STEP);
        assert_eq!(CollapseAnimator::new(2.5, Convergence::AxisAny).line_step(), 2.5);
    }
}
