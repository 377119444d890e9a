//! Toolbar actions and UI

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

// ── Public actions (callable from menus and keyboard too) ────

pub fn action_collapse(state: &mut AppState) {
    state.board.request_collapse(&mut state.clock);
}

pub fn action_clear_all(state: &mut AppState) {
    state.board.clear_all(&mut state.surface);
}

pub fn action_cancel(state: &mut AppState) {
    state.board.on_cancel(&mut state.surface);
}

// ── Toolbar UI ───────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let idle = !state.board.is_collapsing();
    let has_segments = !state.board.segments().is_empty();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(idle && has_segments, egui::Button::new(t("tb.collapse")))
            .on_hover_text(t("tip.collapse"))
            .clicked()
        {
            action_collapse(state);
        }

        ui.separator();

        if ui
            .add_enabled(idle && has_segments, egui::Button::new(t("tb.clear_all")))
            .on_hover_text(t("tip.clear_all"))
            .clicked()
        {
            action_clear_all(state);
        }
    });
}
