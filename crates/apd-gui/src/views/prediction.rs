//! Burnout prediction view: the input form and the decoded result.

use apd_gui::state::{PredictionOutcome, PredictionState};
use apd_gui::theme::{ThemeColors, severity_color, spacing, status};
use apd_model::{FormControl, FormField};
use apd_predict::{BundleState, ModelBundle, PredictionForm};
use egui::{RichText, Ui};
use std::sync::Arc;

/// Fields per form column.
const COLUMN_LEN: usize = 4;

pub struct PredictionView;

impl PredictionView {
    pub fn show(
        ui: &mut Ui,
        state: &mut PredictionState,
        bundle: &BundleState,
        theme: &ThemeColors,
    ) {
        ui.heading(RichText::new("Employee Burnout Risk Prediction").size(26.0));
        ui.label(
            RichText::new("Enter employee data to predict burnout risk level in real time.")
                .color(theme.text_muted),
        );
        ui.add_space(spacing::MD);

        let Some(bundle) = bundle.bundle().map(Arc::as_ref) else {
            unavailable_notice(ui, bundle.reason().unwrap_or_default());
            ui.add_space(spacing::MD);
            ui.add_enabled_ui(false, |ui| {
                form_grid(ui, &mut PredictionForm::default(), None);
            });
            return;
        };

        form_grid(ui, state.form_mut(bundle), Some(bundle));
        ui.add_space(spacing::LG);

        let label = format!("{} Predict Risk Now", egui_phosphor::regular::LIGHTNING);
        let button = egui::Button::new(RichText::new(label).size(16.0))
            .min_size(egui::vec2(200.0, 36.0));
        if ui.add(button).clicked() {
            state.submit(bundle);
        }

        if let Some(outcome) = state.outcome() {
            ui.add_space(spacing::LG);
            outcome_panel(ui, outcome, theme);
        }
    }
}

fn unavailable_notice(ui: &mut Ui, reason: &str) {
    ui.label(
        RichText::new(format!(
            "{} Prediction is unavailable: the model bundle could not be loaded.",
            egui_phosphor::regular::WARNING
        ))
        .color(status::WARNING),
    );
    ui.label(RichText::new(reason).small().weak());
}

/// Three columns of four controls, in form order.
fn form_grid(ui: &mut Ui, form: &mut PredictionForm, bundle: Option<&ModelBundle>) {
    ui.columns(3, |columns| {
        for (column, fields) in columns.iter_mut().zip(FormField::all().chunks(COLUMN_LEN)) {
            for field in fields {
                column.label(RichText::new(field.label()).strong());
                field_control(column, form, *field, bundle);
                column.add_space(spacing::SM);
            }
        }
    });
}

fn field_control(
    ui: &mut Ui,
    form: &mut PredictionForm,
    field: FormField,
    bundle: Option<&ModelBundle>,
) {
    if field.control() == FormControl::Choice {
        let classes = bundle.map_or(&[][..], |bundle| bundle.vocabulary(field.column()));
        let selected = form.choice(field).unwrap_or_default().to_string();
        egui::ComboBox::from_id_salt(field.column())
            .selected_text(&selected)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for class in classes {
                    if ui.selectable_label(*class == selected, class).clicked() {
                        form.set_choice(field, class.clone());
                    }
                }
            });
        return;
    }

    let (Some(mut value), Some(bounds)) = (form.numeric(field), field.bounds()) else {
        return;
    };
    let range = bounds.min..=bounds.max;
    let response = match field.control() {
        FormControl::Integer => ui.add(
            egui::DragValue::new(&mut value)
                .range(range)
                .speed(1.0)
                .fixed_decimals(0),
        ),
        FormControl::Number => ui.add(egui::DragValue::new(&mut value).range(range).speed(0.1)),
        _ => ui.add(egui::Slider::new(&mut value, range)),
    };
    if response.changed() {
        form.set_numeric(field, value);
    }
}

fn outcome_panel(ui: &mut Ui, outcome: &PredictionOutcome, theme: &ThemeColors) {
    let (headline, message, color) = match outcome {
        PredictionOutcome::Assessed(assessment) => (
            assessment.headline(),
            assessment.message().to_string(),
            severity_color(assessment.severity),
        ),
        PredictionOutcome::Failed(error) => (
            "Prediction failed".to_string(),
            error.clone(),
            status::ERROR,
        ),
    };

    egui::Frame::new()
        .fill(theme.bg_secondary)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(headline).size(20.0).strong().color(color));
            ui.add_space(spacing::XS);
            ui.label(RichText::new(message).color(theme.text_primary));
        });
}
