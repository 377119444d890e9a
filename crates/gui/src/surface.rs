//! Rendering surface and frame scheduling capabilities.
//!
//! The drawing core never talks to a window directly: everything it draws goes
//! through [`Surface`] and every animation step is requested through
//! [`FrameScheduler`]. [`DisplayList`] and [`FrameClock`] are the retained
//! implementations shared by the egui canvas and the headless harness.

use serde::{Deserialize, Serialize};
use shared::Point2D;

/// RGB color
pub type Rgb = [u8; 3];

/// Drawing primitives consumed by the board and the collapse animator
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);
    /// Stroke a straight line between two points
    fn draw_line(&mut self, from: Point2D, to: Point2D);
    /// Fill a disc
    fn draw_disc(&mut self, center: Point2D, radius: f64, color: Rgb);
}

/// Handle of a scheduled animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Ask for the animation step to run again on the next frame
    fn schedule_next_frame(&mut self) -> FrameToken;
    /// Drop a previously scheduled frame (no-op if it already ran)
    fn cancel_frame(&mut self, token: FrameToken);
}

// ============================================================================
// Display list
// ============================================================================

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: Point2D,
        to: Point2D,
    },
    Disc {
        center: Point2D,
        radius: f64,
        color: Rgb,
    },
}

/// Retained surface: keeps the commands issued since the last clear
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    /// Total number of clears (for tests and diagnostics)
    clears: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Line commands as `(from, to)` pairs
    pub fn lines(&self) -> Vec<(Point2D, Point2D)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                DrawCommand::Disc { .. } => None,
            })
            .collect()
    }

    /// Disc centers in draw order
    pub fn discs(&self) -> Vec<Point2D> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Disc { center, .. } => Some(*center),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn draw_disc(&mut self, center: Point2D, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }
}

// ============================================================================
// Frame clock
// ============================================================================

/// Cooperative frame clock with at most one pending frame.
///
/// The host loop calls [`FrameClock::take_due`] once per frame and runs the
/// animation step if a token comes back.
#[derive(Debug, Default)]
pub struct FrameClock {
    next_id: u64,
    pending: Option<FrameToken>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Consume the pending frame, if any
    pub fn take_due(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameClock {
    fn schedule_next_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list_records_and_clears() {
        let mut list = DisplayList::new();
        list.draw_line(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0));
        list.draw_disc(Point2D::new(2.0, 2.0), 5.0, [255, 0, 0]);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.lines().len(), 1);
        assert_eq!(list.discs(), vec![Point2D::new(2.0, 2.0)]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clear_count(), 1);
    }

    #[test]
    fn test_draw_command_serde_tag() {
        let cmd = DrawCommand::Disc {
            center: Point2D::new(1.0, 2.0),
            radius: 5.0,
            color: [255, 0, 0],
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"disc""#));
    }

    #[test]
    fn test_frame_clock_single_pending() {
        let mut clock = FrameClock::new();
        assert!(clock.pending().is_none());

        let first = clock.schedule_next_frame();
        let second = clock.schedule_next_frame();
        assert_ne!(first, second);
        assert_eq!(clock.pending(), Some(second));

        assert_eq!(clock.take_due(), Some(second));
        assert!(clock.take_due().is_none());
    }

    #[test]
    fn test_frame_clock_cancel() {
        let mut clock = FrameClock::new();
        let stale = clock.schedule_next_frame();
        let current = clock.schedule_next_frame();

        // Отмена устаревшего токена не трогает текущий кадр
        clock.cancel_frame(stale);
        assert_eq!(clock.pending(), Some(current));

        clock.cancel_frame(current);
        assert!(clock.pending().is_none());
    }
}
