//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::ui::toolbar;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (escape, collapse, delete) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::C) && !i.modifiers.command,
            i.key_pressed(egui::Key::Delete),
        )
    });

    // Escape: drop the segment being drawn
    if escape {
        toolbar::action_cancel(state);
    }
    // C: collapse everything
    if collapse && !state.board.segments().is_empty() {
        toolbar::action_collapse(state);
    }
    // Delete: clear all
    if delete {
        toolbar::action_clear_all(state);
    }
}
