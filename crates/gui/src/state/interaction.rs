//! Two-click draw gesture state machine

use shared::{Point2D, Segment};

/// Current gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// First point placed, the pointer drives the preview end
    Drawing {
        start: Point2D,
        preview_end: Point2D,
    },
}

/// What an input event did to the gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Event ignored in the current state
    None,
    /// First click: drawing started
    Started(Point2D),
    /// Pointer moved while drawing
    PreviewMoved(Segment),
    /// Second click: segment ready to be committed
    Committed(Segment),
    /// Secondary action: preview discarded
    Cancelled,
}

impl Transition {
    /// True if the visible picture changed and a redraw pass is needed
    pub fn needs_redraw(&self) -> bool {
        matches!(
            self,
            Transition::PreviewMoved(_) | Transition::Committed(_) | Transition::Cancelled
        )
    }
}

/// Interaction state machine (Idle <-> Drawing).
///
/// Never touches the segment collection: a commit is reported through
/// [`Transition::Committed`] and appended by the caller.
#[derive(Debug, Default)]
pub struct InteractionMachine {
    state: InteractionState,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, InteractionState::Drawing { .. })
    }

    /// Uncommitted segment from the first click to the pointer
    pub fn preview(&self) -> Option<Segment> {
        match self.state {
            InteractionState::Drawing { start, preview_end } => {
                Some(Segment::new(start, preview_end))
            }
            InteractionState::Idle => None,
        }
    }

    pub fn click(&mut self, p: Point2D) -> Transition {
        match self.state {
            InteractionState::Idle => {
                self.state = InteractionState::Drawing {
                    start: p,
                    preview_end: p,
                };
                Transition::Started(p)
            }
            InteractionState::Drawing { start, .. } => {
                self.state = InteractionState::Idle;
                Transition::Committed(Segment::new(start, p))
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point2D) -> Transition {
        match &mut self.state {
            InteractionState::Drawing { start, preview_end } => {
                *preview_end = p;
                Transition::PreviewMoved(Segment::new(*start, p))
            }
            InteractionState::Idle => Transition::None,
        }
    }

    pub fn cancel(&mut self) -> Transition {
        match self.state {
            InteractionState::Drawing { .. } => {
                self.state = InteractionState::Idle;
                Transition::Cancelled
            }
            InteractionState::Idle => Transition::None,
        }
    }

    /// Drop any gesture in progress without reporting it
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }
}
