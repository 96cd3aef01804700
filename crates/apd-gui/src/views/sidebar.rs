//! Sidebar: navigation, data source status, and settings.

use apd_gui::context::AppContext;
use apd_gui::settings::ui::{SettingsChange, show_settings};
use apd_gui::state::{AppState, View};
use apd_gui::theme::{ThemeColors, spacing, status};
use egui::{RichText, Ui};

pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar; returns what the settings panel changed.
    pub fn show(
        ui: &mut Ui,
        state: &mut AppState,
        context: &AppContext,
        theme: &ThemeColors,
    ) -> SettingsChange {
        ui.add_space(spacing::MD);
        ui.heading(RichText::new("AI Productivity").strong());
        ui.label(RichText::new("Workplace analytics").color(theme.text_muted));
        ui.add_space(spacing::LG);

        ui.label(RichText::new("Menu").small().strong().color(theme.text_muted));
        ui.add_space(spacing::XS);
        for view in View::all() {
            let active = state.view == *view;
            let text = RichText::new(format!("{}  {}", view.icon(), view.label())).size(15.0);
            let response = ui.add_sized(
                [ui.available_width(), 32.0],
                egui::Button::selectable(active, text),
            );
            if response.clicked() {
                state.navigate(*view);
            }
        }

        ui.add_space(spacing::MD);
        ui.separator();
        ui.label(
            RichText::new(format!(
                "{} Tip: use the {} view to simulate an employee's burnout risk.",
                egui_phosphor::regular::LIGHTBULB,
                View::Prediction.label()
            ))
            .small()
            .color(theme.text_muted),
        );
        ui.separator();
        ui.add_space(spacing::SM);

        data_status(ui, context, theme);

        ui.add_space(spacing::MD);
        show_settings(ui, &mut state.settings, theme)
    }
}

fn data_status(ui: &mut Ui, context: &AppContext, theme: &ThemeColors) {
    let file_name = |path: &std::path::Path| {
        path.file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
    };

    ui.horizontal(|ui| {
        let icon_color = if context.dataset_loaded() {
            theme.accent
        } else {
            theme.text_muted
        };
        ui.label(RichText::new(egui_phosphor::regular::DATABASE).color(icon_color));
        ui.label(RichText::new(file_name(context.dataset_path())).small())
            .on_hover_text(context.dataset_path().display().to_string());
    });

    let bundle = context.bundle();
    ui.horizontal(|ui| {
        if bundle.is_ready() {
            ui.label(RichText::new(egui_phosphor::regular::CHECK_CIRCLE).color(status::SUCCESS));
            ui.label(RichText::new("Model bundle ready").small());
        } else {
            ui.label(RichText::new(egui_phosphor::regular::WARNING).color(status::WARNING));
            ui.label(RichText::new("Prediction unavailable").small())
                .on_hover_text(bundle.reason().unwrap_or_default());
        }
    });
}
