//! Drawing canvas panel: pointer input, frame pumping and painting

mod paint;

use egui::Ui;
use shared::Point2D;

use crate::state::AppState;

/// Central drawing canvas
pub struct CanvasPanel {
    /// Last pointer position forwarded to the board (surface space)
    last_hover: Option<Point2D>,
}

impl CanvasPanel {
    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        // ── Pointer input ───────────────────────────────────
        self.handle_pointer(&response, rect, state);

        // ── Collapse animation: one step per egui frame ─────
        Self::pump_frames(ui.ctx(), state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        paint::paint_display_list(ui.painter_at(rect), rect, &state.surface, &state.settings);
    }

    fn handle_pointer(&mut self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        if let Some(pos) = response.hover_pos() {
            let p = to_surface(pos, rect);
            if self.last_hover != Some(p) {
                self.last_hover = Some(p);
                state.board.on_pointer_move(p, &mut state.surface);
            }
        } else {
            self.last_hover = None;
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                state.board.on_click(to_surface(pos, rect), &mut state.surface);
            }
        }

        // Right click - cancel the segment being drawn
        if response.secondary_clicked() {
            state.board.on_cancel(&mut state.surface);
        }
    }

    fn pump_frames(ctx: &egui::Context, state: &mut AppState) {
        if state.clock.take_due().is_some() {
            state.board.on_frame(&mut state.surface, &mut state.clock);
        }
        if state.clock.pending().is_some() {
            ctx.request_repaint();
        }
    }
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen position to surface coordinates (origin at the canvas top-left)
fn to_surface(pos: egui::Pos2, rect: egui::Rect) -> Point2D {
    let local = pos - rect.min;
    Point2D::new(local.x as f64, local.y as f64)
}
