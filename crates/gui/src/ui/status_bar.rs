use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let board = &state.board;
        ui.weak(format!("{}: {}", t("status.segments"), board.segments().len()));

        ui.separator();

        ui.weak(format!(
            "{}: {}",
            t("status.intersections"),
            board.intersections().len()
        ));

        ui.separator();

        if let Some(frames) = board.collapse_frames() {
            ui.colored_label(
                egui::Color32::from_rgb(255, 200, 100),
                format!("{} {frames}", t("status.collapsing")),
            );
            ui.separator();
            ui.weak(t("hint.wait"));
        } else if board.interaction().is_drawing() {
            ui.colored_label(egui::Color32::YELLOW, t("hint.line_end"));
        } else {
            ui.weak(t("hint.line_start"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("crossline v", env!("CARGO_PKG_VERSION")));
        });
    });
}
