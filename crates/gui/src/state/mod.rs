pub mod board;
pub mod collapse;
pub mod interaction;
pub mod segments;
pub mod settings;

pub use board::Board;
pub use collapse::{CollapseAnimator, CollapseStatus, Convergence};
pub use interaction::{InteractionMachine, InteractionState, Transition};
pub use segments::{SegmentCollection, SegmentError};
pub use settings::AppSettings;

use crate::surface::{DisplayList, FrameClock};

/// Combined application state
pub struct AppState {
    pub board: Board,
    /// Retained picture, painted by the canvas every frame
    pub surface: DisplayList,
    /// Pending collapse frame
    pub clock: FrameClock,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            board: Board::new(&settings),
            surface: DisplayList::new(),
            clock: FrameClock::new(),
            settings,
            show_settings_window: false,
        }
    }

    /// Push edited settings to the board and redraw markers with them
    pub fn apply_settings(&mut self) {
        self.settings = std::mem::take(&mut self.settings).sanitized();
        self.board.apply_settings(&self.settings);
        if !self.board.is_collapsing() {
            self.board.redraw(&mut self.surface);
        }
    }
}
