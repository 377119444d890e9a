//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::collapse::Convergence;
use crate::state::settings::AppSettings;
use crate::state::AppState;
use crate::surface::Rgb;
use crate::ui::toolbar;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            ui.close_menu();
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    let idle = !state.board.is_collapsing();
    ui.menu_button(t("menu.edit"), |ui| {
        if ui
            .add_enabled(
                idle && state.board.interaction().is_drawing(),
                egui::Button::new(t("menu.cancel")),
            )
            .clicked()
        {
            toolbar::action_cancel(state);
            ui.close_menu();
        }
        ui.separator();
        if ui
            .add_enabled(
                idle && !state.board.segments().is_empty(),
                egui::Button::new(t("menu.clear_all")),
            )
            .clicked()
        {
            toolbar::action_clear_all(state);
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window. Returns true if any value changed.
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) -> bool {
    let mut open = state.show_settings_window;
    let mut changed = false;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(340.0)
        .show(ctx, |ui| {
            let settings = &mut state.settings;
            changed |= show_collapse_settings(ui, settings);
            changed |= show_marker_settings(ui, settings);
            changed |= show_canvas_settings(ui, settings);
            changed |= show_ui_settings(ui, settings);

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(t("settings.reset")).clicked() {
                    *settings = AppSettings::default();
                    changed = true;
                }
                if ui.button(t("settings.close")).clicked() {
                    state.show_settings_window = false;
                }
            });
        });
    state.show_settings_window = open && state.show_settings_window;
    changed
}

fn show_collapse_settings(ui: &mut egui::Ui, settings: &mut AppSettings) -> bool {
    let mut changed = false;
    ui.heading(t("settings.collapse"));
    ui.horizontal(|ui| {
        ui.label(t("settings.line_step"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.collapse.line_step)
                    .speed(0.1)
                    .range(0.1..=100.0),
            )
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.convergence"));
        let current = settings.collapse.convergence;
        egui::ComboBox::from_id_salt("convergence_combo")
            .selected_text(convergence_label(current))
            .show_ui(ui, |ui| {
                for option in [Convergence::Directional, Convergence::AxisAny] {
                    changed |= ui
                        .selectable_value(
                            &mut settings.collapse.convergence,
                            option,
                            convergence_label(option),
                        )
                        .changed();
                }
            });
    });
    ui.add_space(10.0);
    changed
}

fn convergence_label(convergence: Convergence) -> &'static str {
    match convergence {
        Convergence::Directional => t("settings.conv_directional"),
        Convergence::AxisAny => t("settings.conv_axis"),
    }
}

fn show_marker_settings(ui: &mut egui::Ui, settings: &mut AppSettings) -> bool {
    let mut changed = false;
    ui.heading(t("settings.markers"));
    ui.horizontal(|ui| {
        ui.label(t("settings.marker_radius"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.markers.radius)
                    .speed(0.1)
                    .range(1.0..=30.0),
            )
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.marker_color"));
        changed |= color_button(ui, &mut settings.markers.color);
    });
    changed |= ui
        .checkbox(&mut settings.markers.snap_to_pixel, t("settings.snap_to_pixel"))
        .changed();
    ui.add_space(10.0);
    changed
}

fn show_canvas_settings(ui: &mut egui::Ui, settings: &mut AppSettings) -> bool {
    let mut changed = false;
    ui.heading(t("settings.canvas"));
    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        changed |= color_button(ui, &mut settings.canvas.background_color);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.line_color"));
        changed |= color_button(ui, &mut settings.canvas.line_color);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.line_width"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.canvas.line_width)
                    .speed(0.1)
                    .range(0.5..=8.0),
            )
            .changed();
    });
    ui.add_space(10.0);
    changed
}

fn show_ui_settings(ui: &mut egui::Ui, settings: &mut AppSettings) -> bool {
    let mut changed = false;
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        changed |= ui
            .add(
                egui::DragValue::new(&mut settings.ui.font_size)
                    .speed(0.5)
                    .range(8.0..=24.0)
                    .suffix(" pt"),
            )
            .changed();
    });
    ui.add_space(10.0);
    changed
}

fn color_button(ui: &mut egui::Ui, rgb: &mut Rgb) -> bool {
    let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
    if ui.color_edit_button_srgba(&mut color).changed() {
        *rgb = [color.r(), color.g(), color.b()];
        return true;
    }
    false
}
