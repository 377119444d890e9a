//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::canvas::CanvasPanel;
use crate::state::{AppSettings, AppState};
use crate::ui::{status_bar, toolbar};

/// Main application
pub struct CrossLineApp {
    state: AppState,
    canvas: CanvasPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved settings (to detect changes)
    last_saved_settings: AppSettings,
}

impl CrossLineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, line_step: Option<f64>) -> Self {
        let mut settings = AppSettings::load();

        // CLI argument overrides the stored step; written back only with the next edit
        if let Some(step) = line_step {
            settings.collapse.line_step = step;
            settings = settings.sanitized();
        }
        let last_saved_settings = settings.clone();

        let state = AppState::with_settings(settings);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            canvas: CanvasPanel::new(),
            last_font_size,
            last_saved_settings,
        }
    }
}

impl eframe::App for CrossLineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        if menus::settings_window(ctx, &mut self.state) {
            self.state.apply_settings();
        }
        self.save_settings_if_changed();

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: drawing canvas ────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.state);
            });
    }
}

impl CrossLineApp {
    fn save_settings_if_changed(&mut self) {
        if self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }
    }
}
