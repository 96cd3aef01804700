//! Main application struct and eframe::App implementation

use apd_gui::context::AppContext;
use apd_gui::settings::ui::SettingsChange;
use apd_gui::settings::{load_settings, save_settings};
use apd_gui::state::{AppState, View};
use apd_gui::theme::{self, spacing};
use eframe::egui;

use crate::views::{PredictionView, Sidebar, VisualizationView};

const SIDEBAR_WIDTH: f32 = 260.0;

/// Main application struct
pub struct DashboardApp {
    state: AppState,
    context: AppContext,
    /// Color scheme currently installed in the egui context
    applied_dark_mode: Option<bool>,
}

impl DashboardApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!(
            dataset = %settings.data.dataset_path.display(),
            model = %settings.data.model_path.display(),
            "loaded settings"
        );

        let context = AppContext::from_settings(&settings.data);
        Self {
            state: AppState::new(settings),
            context,
            applied_dark_mode: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let dark_mode = self.state.settings.display.dark_mode;
        if self.applied_dark_mode != Some(dark_mode) {
            theme::apply_style(ctx, dark_mode);
            self.applied_dark_mode = Some(dark_mode);
        }
    }

    fn handle_settings_change(&mut self, change: SettingsChange) {
        if change == SettingsChange::None {
            return;
        }
        if let Err(e) = save_settings(&self.state.settings) {
            tracing::error!("Failed to save settings: {e:#}");
        }
        if change == SettingsChange::Data {
            tracing::info!("data sources changed, reloading");
            self.context = AppContext::from_settings(&self.state.settings.data);
            self.state.prediction.reset();
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        let colors = theme::colors(self.state.settings.display.dark_mode);

        let change = egui::SidePanel::left("sidebar")
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| Sidebar::show(ui, &mut self.state, &self.context, &colors))
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(spacing::SM);
                    match self.state.view {
                        View::Visualization => VisualizationView::show(
                            ui,
                            &self.context,
                            self.state.settings.display.chart_height(),
                            &colors,
                        ),
                        View::Prediction => PredictionView::show(
                            ui,
                            &mut self.state.prediction,
                            self.context.bundle(),
                            &colors,
                        ),
                    }
                });
        });

        self.handle_settings_change(change);
    }
}
