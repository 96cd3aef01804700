//! Settings panel shown at the bottom of the sidebar.

use super::{MAX_CHART_HEIGHT, MIN_CHART_HEIGHT, Settings};
use crate::theme::{ThemeColors, spacing};
use egui::{Color32, CornerRadius, Vec2};
use std::path::PathBuf;

/// What the user changed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    None,
    /// Only display preferences changed; save them.
    Display,
    /// A data source changed; save and reload the data.
    Data,
}

impl SettingsChange {
    fn merge(self, other: SettingsChange) -> SettingsChange {
        match (self, other) {
            (Self::Data, _) | (_, Self::Data) => Self::Data,
            (Self::Display, _) | (_, Self::Display) => Self::Display,
            _ => Self::None,
        }
    }
}

/// Shows the settings controls and reports what changed.
pub fn show_settings(
    ui: &mut egui::Ui,
    settings: &mut Settings,
    theme: &ThemeColors,
) -> SettingsChange {
    let mut change = SettingsChange::None;

    egui::CollapsingHeader::new(format!("{} Settings", egui_phosphor::regular::GEAR))
        .default_open(false)
        .show(ui, |ui| {
            setting_row(ui, "Dark mode", theme, |ui| {
                if ui.add(toggle(&mut settings.display.dark_mode)).changed() {
                    change = change.merge(SettingsChange::Display);
                }
            });

            setting_row(ui, "Chart height", theme, |ui| {
                let slider = egui::Slider::new(
                    &mut settings.display.chart_height,
                    MIN_CHART_HEIGHT..=MAX_CHART_HEIGHT,
                )
                .step_by(10.0)
                .show_value(false);
                let response = ui.add(slider);
                if response.drag_stopped() || (response.changed() && !response.dragged()) {
                    change = change.merge(SettingsChange::Display);
                }
            });

            ui.separator();
            let dataset = &settings.data.dataset_path;
            if let Some(path) = path_row(ui, "Dataset", dataset, "CSV", "csv", theme) {
                settings.data.dataset_path = path;
                change = change.merge(SettingsChange::Data);
            }
            let model = &settings.data.model_path;
            if let Some(path) = path_row(ui, "Model bundle", model, "JSON", "json", theme) {
                settings.data.model_path = path;
                change = change.merge(SettingsChange::Data);
            }
        });

    change
}

fn setting_row(
    ui: &mut egui::Ui,
    label: &str,
    theme: &ThemeColors,
    add_widget: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(theme.text_primary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            add_widget(ui);
        });
    });
    ui.add_space(spacing::XS);
}

/// Path label with a browse button; returns the newly picked path.
fn path_row(
    ui: &mut egui::Ui,
    label: &str,
    current: &std::path::Path,
    filter_name: &str,
    extension: &str,
    theme: &ThemeColors,
) -> Option<PathBuf> {
    let mut picked = None;
    ui.label(egui::RichText::new(label).color(theme.text_primary));
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(current.display().to_string())
                .small()
                .color(theme.text_muted),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button(egui_phosphor::regular::FOLDER_OPEN)
                .on_hover_text(format!("Choose {}", label.to_lowercase()))
                .clicked()
            {
                picked = rfd::FileDialog::new()
                    .add_filter(filter_name, &[extension])
                    .pick_file();
                if let Some(path) = &picked {
                    tracing::info!("Selected {}: {:?}", label, path);
                }
            }
        });
    });
    ui.add_space(spacing::XS);
    picked
}

/// A toggle switch widget (iOS-style).
fn toggle(value: &mut bool) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| -> egui::Response {
        let desired_size = Vec2::new(36.0, 20.0);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if response.clicked() {
            *value = !*value;
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, *value);

            let bg_color = if *value {
                Color32::from_rgb(52, 199, 89)
            } else {
                Color32::from_gray(180)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(10), bg_color);

            let knob_radius = 8.0;
            let knob_x = egui::lerp(
                (rect.left() + knob_radius + 2.0)..=(rect.right() - knob_radius - 2.0),
                how_on,
            );
            let knob_center = egui::pos2(knob_x, rect.center().y);

            ui.painter()
                .circle_filled(knob_center, knob_radius, Color32::WHITE);
        }

        response
    }
}
