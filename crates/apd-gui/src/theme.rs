//! Theme and styling constants

use apd_model::Severity;
use egui::{Color32, CornerRadius, Stroke};

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Status colors not covered by egui's visuals
pub mod status {
    use egui::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
}

/// Bar and line colors, assigned to series in order.
const SERIES: [Color32; 4] = [
    Color32::from_rgb(99, 110, 250),
    Color32::from_rgb(239, 85, 59),
    Color32::from_rgb(0, 204, 150),
    Color32::from_rgb(171, 99, 250),
];

pub fn series_color(index: usize) -> Color32 {
    SERIES[index % SERIES.len()]
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Error => status::ERROR,
        Severity::Warning => status::WARNING,
        Severity::Success => status::SUCCESS,
    }
}

/// Palette for one of the two color schemes.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub bg_secondary: Color32,
    pub accent: Color32,
    pub border: Color32,
    /// Axis and grid lines in charts.
    pub grid: Color32,
}

pub fn colors(dark_mode: bool) -> ThemeColors {
    if dark_mode {
        ThemeColors {
            text_primary: Color32::from_gray(230),
            text_muted: Color32::from_gray(150),
            bg_secondary: Color32::from_gray(38),
            accent: Color32::from_rgb(10, 132, 255),
            border: Color32::from_gray(60),
            grid: Color32::from_gray(70),
        }
    } else {
        ThemeColors {
            text_primary: Color32::from_gray(20),
            text_muted: Color32::from_gray(110),
            bg_secondary: Color32::from_gray(242),
            accent: Color32::from_rgb(0, 122, 255),
            border: Color32::from_gray(210),
            grid: Color32::from_gray(200),
        }
    }
}

/// Installs the visuals for the chosen color scheme.
pub fn apply_style(ctx: &egui::Context, dark_mode: bool) {
    let theme = colors(dark_mode);
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent.linear_multiply(0.5));
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    ctx.set_visuals(visuals);
}
