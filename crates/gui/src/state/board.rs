//! Drawing board: wires input events, the segment collection, the collapse
//! animation and redraw passes together.
//!
//! The surface and the frame scheduler are passed into every call; the board
//! keeps no reference to either.

use shared::{DrawingSnapshot, Point2D, Segment};

use super::collapse::{CollapseAnimator, CollapseStatus};
use super::interaction::{InteractionMachine, Transition};
use super::segments::SegmentCollection;
use super::settings::{AppSettings, CollapseSettings, MarkerSettings};
use crate::geometry::{pairwise_intersections, Intersection};
use crate::surface::{FrameScheduler, Surface};

pub struct Board {
    segments: SegmentCollection,
    interaction: InteractionMachine,
    /// Running collapse animation
    collapse: Option<CollapseAnimator>,
    markers: MarkerSettings,
    collapse_settings: CollapseSettings,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl Board {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            segments: SegmentCollection::new(),
            interaction: InteractionMachine::new(),
            collapse: None,
            markers: settings.markers.clone(),
            collapse_settings: settings.collapse.clone(),
        }
    }

    /// Take new marker and collapse settings. A collapse already running
    /// keeps its step until it finishes.
    pub fn apply_settings(&mut self, settings: &AppSettings) {
        self.markers = settings.markers.clone();
        self.collapse_settings = settings.collapse.clone();
    }

    pub fn segments(&self) -> &SegmentCollection {
        &self.segments
    }

    pub fn interaction(&self) -> &InteractionMachine {
        &self.interaction
    }

    pub fn is_collapsing(&self) -> bool {
        self.collapse.is_some()
    }

    /// Frames run by the current collapse
    pub fn collapse_frames(&self) -> Option<u32> {
        self.collapse.map(|a| a.frames())
    }

    // ── Input events ──────────────────────────────────────────

    pub fn on_click(&mut self, p: Point2D, surface: &mut dyn Surface) -> Transition {
        if self.ignore_input("click") {
            return Transition::None;
        }
        let transition = self.interaction.click(p);
        match transition {
            Transition::Started(start) => {
                tracing::debug!("Drawing started at ({:.1}, {:.1})", start.x, start.y);
            }
            Transition::Committed(segment) => {
                let index = self.segments.append(segment);
                tracing::info!(
                    "Committed segment #{index} ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    segment.start.x,
                    segment.start.y,
                    segment.end.x,
                    segment.end.y
                );
            }
            _ => {}
        }
        if transition.needs_redraw() {
            self.redraw(surface);
        }
        transition
    }

    pub fn on_pointer_move(&mut self, p: Point2D, surface: &mut dyn Surface) -> Transition {
        if self.collapse.is_some() {
            return Transition::None;
        }
        let transition = self.interaction.pointer_move(p);
        if transition.needs_redraw() {
            self.redraw(surface);
        }
        transition
    }

    /// Secondary action: drop the segment being drawn
    pub fn on_cancel(&mut self, surface: &mut dyn Surface) -> Transition {
        if self.ignore_input("cancel") {
            return Transition::None;
        }
        let transition = self.interaction.cancel();
        if transition.needs_redraw() {
            tracing::debug!("Drawing cancelled");
            self.redraw(surface);
        }
        transition
    }

    /// Commit a segment directly, bypassing the two-click gesture
    pub fn add_segment(&mut self, segment: Segment, surface: &mut dyn Surface) -> Option<usize> {
        if self.ignore_input("add segment") {
            return None;
        }
        let index = self.segments.append(segment);
        self.redraw(surface);
        Some(index)
    }

    /// Remove every segment and any gesture in progress
    pub fn clear_all(&mut self, surface: &mut dyn Surface) -> bool {
        if self.ignore_input("clear") {
            return false;
        }
        let count = self.segments.len();
        self.segments.clear();
        self.interaction.reset();
        surface.clear();
        tracing::info!("Cleared {count} segments");
        true
    }

    fn ignore_input(&self, what: &str) -> bool {
        if self.collapse.is_some() {
            tracing::debug!("Ignoring {what} while collapsing");
            return true;
        }
        false
    }

    // ── Collapse ──────────────────────────────────────────────

    /// Start the collapse animation. Returns false if one is already running.
    /// A gesture in progress is discarded.
    pub fn request_collapse(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.collapse.is_some() {
            return false;
        }
        self.interaction.reset();
        let animator = CollapseAnimator::new(
            self.collapse_settings.line_step,
            self.collapse_settings.convergence,
        );
        tracing::info!(
            "Collapse started: {} segments, step {}",
            self.segments.len(),
            animator.line_step()
        );
        self.collapse = Some(animator);
        scheduler.schedule_next_frame();
        true
    }

    /// Frame callback. Does nothing when no collapse is running.
    pub fn on_frame(
        &mut self,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> CollapseStatus {
        let Some(animator) = self.collapse.as_mut() else {
            return CollapseStatus::Finished;
        };
        match animator.frame(&mut self.segments, surface, scheduler) {
            Ok(CollapseStatus::Running) => CollapseStatus::Running,
            Ok(CollapseStatus::Finished) => {
                tracing::info!("Collapse finished after {} frames", animator.frames());
                self.collapse = None;
                CollapseStatus::Finished
            }
            Err(err) => {
                tracing::error!("Collapse aborted: {err}");
                self.collapse = None;
                debug_assert!(false, "collapse removed a segment it did not scan: {err}");
                CollapseStatus::Finished
            }
        }
    }

    // ── Redraw ────────────────────────────────────────────────

    /// Committed segments plus the preview while drawing
    pub fn visible_segments(&self) -> Vec<Segment> {
        let mut visible = self.segments.all().to_vec();
        visible.extend(self.interaction.preview());
        visible
    }

    /// Intersections among the visible segments
    pub fn intersections(&self) -> Vec<Intersection> {
        pairwise_intersections(&self.visible_segments())
    }

    /// Full redraw: clear, every visible segment, then every marker
    pub fn redraw(&self, surface: &mut dyn Surface) {
        surface.clear();
        let visible = self.visible_segments();
        for segment in &visible {
            surface.draw_line(segment.start, segment.end);
        }
        for hit in pairwise_intersections(&visible) {
            surface.draw_disc(
                self.marker_center(hit.point),
                self.markers.radius,
                self.markers.color,
            );
        }
    }

    fn marker_center(&self, p: Point2D) -> Point2D {
        if !self.markers.snap_to_pixel {
            return p;
        }
        // Round half up, so -2.5 goes to -2
        Point2D::new((p.x + 0.5).floor(), (p.y + 0.5).floor())
    }

    pub fn snapshot(&self) -> DrawingSnapshot {
        DrawingSnapshot {
            segments: self.segments.all().to_vec(),
            preview: self.interaction.preview(),
            intersections: self.intersections().into_iter().map(|h| h.point).collect(),
            collapsing: self.is_collapsing(),
        }
    }
}
