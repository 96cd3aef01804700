//! Data visualization view: the eight dashboard charts in a two-column grid.

use apd_charts::Chart;
use apd_gui::context::AppContext;
use apd_gui::theme::{ThemeColors, spacing, status};
use egui::{RichText, Ui};

use super::chart::show_chart;

pub struct VisualizationView;

impl VisualizationView {
    pub fn show(ui: &mut Ui, context: &AppContext, chart_height: f32, theme: &ThemeColors) {
        ui.heading(RichText::new("AI Workplace Productivity Dashboard").size(26.0));
        ui.label(
            RichText::new(
                "How AI adoption relates to productivity, errors, and burnout across job roles.",
            )
            .color(theme.text_muted),
        );
        ui.add_space(spacing::MD);

        let charts = match context.charts() {
            Ok(charts) => charts,
            Err(error) => {
                load_error(ui, context, error, theme);
                return;
            }
        };

        for pair in charts.chunks(2) {
            chart_row(ui, pair, chart_height, theme);
            ui.add_space(spacing::LG);
        }
    }
}

/// Two charts side by side. Charts answering the same question share one heading.
fn chart_row(ui: &mut Ui, pair: &[Chart], chart_height: f32, theme: &ThemeColors) {
    let shared = match pair {
        [left, right] => left.id.question() == right.id.question(),
        _ => false,
    };
    if shared {
        question(ui, pair[0].id.question(), theme);
    }

    ui.columns(2, |columns| {
        for (column, chart) in columns.iter_mut().zip(pair) {
            column.push_id(chart.id.slug(), |ui| {
                if !shared {
                    question(ui, chart.id.question(), theme);
                }
                show_chart(ui, chart, chart_height, theme);
            });
        }
    });
}

fn question(ui: &mut Ui, text: &str, theme: &ThemeColors) {
    ui.label(RichText::new(text).size(16.0).strong().color(theme.text_primary));
    ui.add_space(spacing::XS);
}

fn load_error(ui: &mut Ui, context: &AppContext, error: &anyhow::Error, theme: &ThemeColors) {
    egui::Frame::new()
        .fill(theme.bg_secondary)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!(
                    "{} The dataset could not be loaded",
                    egui_phosphor::regular::WARNING_CIRCLE
                ))
                .size(16.0)
                .color(status::ERROR),
            );
            ui.add_space(spacing::SM);
            ui.label(format!("{error:#}"));
            ui.add_space(spacing::SM);
            ui.label(
                RichText::new(format!(
                    "Expected a CSV at {}. Pick another file under Settings.",
                    context.dataset_path().display()
                ))
                .small()
                .color(theme.text_muted),
            );
        });
}
