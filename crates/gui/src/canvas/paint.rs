//! Painting the retained display list with egui

use egui::{Color32, Painter, Stroke};
use shared::Point2D;

use crate::state::AppSettings;
use crate::surface::{DisplayList, DrawCommand, Rgb};

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn to_screen(p: Point2D, rect: egui::Rect) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

/// Fill the canvas background and replay every recorded command
pub fn paint_display_list(painter: Painter, rect: egui::Rect, list: &DisplayList, settings: &AppSettings) {
    painter.rect_filled(rect, 0.0, color(settings.canvas.background_color));

    let stroke = Stroke::new(settings.canvas.line_width, color(settings.canvas.line_color));
    for cmd in list.commands() {
        match cmd {
            DrawCommand::Line { from, to } => {
                painter.line_segment([to_screen(*from, rect), to_screen(*to, rect)], stroke);
            }
            DrawCommand::Disc {
                center,
                radius,
                color: rgb,
            } => {
                painter.circle_filled(to_screen(*center, rect), *radius as f32, color(*rgb));
            }
        }
    }
}
