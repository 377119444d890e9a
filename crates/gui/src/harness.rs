//! Headless test harness for programmatic drawing and collapse.
//!
//! Owns a [`Board`] together with a retained [`DisplayList`] and a
//! [`FrameClock`], and drives frames by hand instead of a window loop.

use shared::{DrawingSnapshot, Point2D, Segment};

use crate::state::settings::AppSettings;
use crate::state::{Board, CollapseStatus, Transition};
use crate::surface::{DisplayList, FrameClock};

/// Headless test harness: board, surface and frame clock
pub struct TestHarness {
    pub board: Board,
    pub surface: DisplayList,
    pub clock: FrameClock,
}

impl TestHarness {
    /// Create a new empty harness with default settings.
    pub fn new() -> Self {
        Self::with_settings(&AppSettings::default())
    }

    pub fn with_settings(settings: &AppSettings) -> Self {
        Self {
            board: Board::new(settings),
            surface: DisplayList::new(),
            clock: FrameClock::new(),
        }
    }

    // ── Input ─────────────────────────────────────────────────

    pub fn click(&mut self, x: f64, y: f64) -> Transition {
        self.board.on_click(Point2D::new(x, y), &mut self.surface)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Transition {
        self.board.on_pointer_move(Point2D::new(x, y), &mut self.surface)
    }

    pub fn cancel(&mut self) -> Transition {
        self.board.on_cancel(&mut self.surface)
    }

    /// Full gesture: click, move to the end point, click again
    pub fn draw(&mut self, from: Point2D, to: Point2D) -> Transition {
        self.board.on_click(from, &mut self.surface);
        self.board.on_pointer_move(to, &mut self.surface);
        self.board.on_click(to, &mut self.surface)
    }

    /// Commit a segment directly. `None` while collapsing.
    pub fn add_segment(&mut self, segment: Segment) -> Option<usize> {
        self.board.add_segment(segment, &mut self.surface)
    }

    /// Remove everything. False while collapsing.
    pub fn clear(&mut self) -> bool {
        self.board.clear_all(&mut self.surface)
    }

    // ── Collapse ──────────────────────────────────────────────

    pub fn collapse(&mut self) -> bool {
        self.board.request_collapse(&mut self.clock)
    }

    /// Run up to `frames` due frames; returns how many actually ran
    pub fn tick(&mut self, frames: usize) -> usize {
        let mut ran = 0;
        while ran < frames {
            if self.clock.take_due().is_none() {
                break;
            }
            ran += 1;
            if self.board.on_frame(&mut self.surface, &mut self.clock) == CollapseStatus::Finished {
                break;
            }
        }
        ran
    }

    /// Start a collapse if needed and run it to completion.
    ///
    /// Returns the number of frames it took, or `None` if it was still
    /// running after `max_frames`.
    pub fn run_collapse(&mut self, max_frames: usize) -> Option<usize> {
        if !self.board.is_collapsing() {
            self.collapse();
        }
        let ran = self.tick(max_frames);
        if self.board.is_collapsing() {
            None
        } else {
            Some(ran)
        }
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn segment_count(&self) -> usize {
        self.board.segments().len()
    }

    pub fn intersection_points(&self) -> Vec<Point2D> {
        self.board.intersections().into_iter().map(|h| h.point).collect()
    }

    pub fn snapshot(&self) -> DrawingSnapshot {
        self.board.snapshot()
    }

    /// Export the current drawing as JSON
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.snapshot()).unwrap_or_default()
    }

    /// Replace the drawing with the committed segments of a JSON snapshot
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        let snapshot: DrawingSnapshot =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        if !self.clear() {
            return Err("Cannot load while collapsing".to_string());
        }
        for segment in snapshot.segments {
            self.add_segment(segment);
        }
        Ok(())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
