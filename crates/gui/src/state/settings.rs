//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::collapse::{Convergence, DEFAULT_LINE_STEP};
use crate::surface::Rgb;

/// Default intersection marker radius
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

/// Collapse animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseSettings {
    /// Distance each end moves toward the center per frame
    pub line_step: f64,
    /// When a shrinking segment counts as gone
    pub convergence: Convergence,
}

impl Default for CollapseSettings {
    fn default() -> Self {
        Self {
            line_step: DEFAULT_LINE_STEP,
            convergence: Convergence::default(),
        }
    }
}

/// Intersection marker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    /// Disc radius in surface units
    pub radius: f64,
    /// Disc color RGB
    pub color: Rgb,
    /// Round marker centers to whole units (half-up)
    pub snap_to_pixel: bool,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_MARKER_RADIUS,
            color: [255, 0, 0],
            snap_to_pixel: true,
        }
    }
}

/// Canvas appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Background color RGB
    pub background_color: Rgb,
    /// Stroke color RGB for segments (preview included)
    pub line_color: Rgb,
    /// Stroke width in points
    pub line_width: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_color: [255, 255, 255],
            line_color: [0, 0, 0],
            line_width: 1.0,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub collapse: CollapseSettings,
    #[serde(default)]
    pub markers: MarkerSettings,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Location of `settings.json` in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "crossline", "crossline")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::warn!("Failed to save settings: {e}");
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let settings: AppSettings = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }

    /// Replace values the animation or the canvas cannot work with
    pub fn sanitized(mut self) -> Self {
        if !(self.collapse.line_step > 0.0 && self.collapse.line_step.is_finite()) {
            tracing::warn!(
                "Invalid collapse line_step {}, using {}",
                self.collapse.line_step,
                DEFAULT_LINE_STEP
            );
            self.collapse.line_step = DEFAULT_LINE_STEP;
        }
        if !(self.markers.radius > 0.0 && self.markers.radius.is_finite()) {
            tracing::warn!(
                "Invalid marker radius {}, using {}",
                self.markers.radius,
                DEFAULT_MARKER_RADIUS
            );
            self.markers.radius = DEFAULT_MARKER_RADIUS;
        }
        if !(self.canvas.line_width > 0.0 && self.canvas.line_width.is_finite()) {
            self.canvas.line_width = CanvasSettings::default().line_width;
        }
        self
    }
}
