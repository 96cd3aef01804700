//! Prediction request pipeline: form values in, decoded risk label out.

use apd_model::columns::{
    AI_TOOL_USAGE_HOURS, BURNOUT_RISK_LEVEL, BURNOUT_RISK_SCORE, COLLABORATION_HOURS,
    DEADLINE_PRESSURE_LEVEL, ERROR_RATE_PERCENT, EXPERIENCE_YEARS, FOCUS_HOURS_PER_DAY, JOB_ROLE,
    LEARNING_TIME_HOURS, MANUAL_WORK_HOURS, MEETING_HOURS, PRODUCTIVITY_SCORE,
    TASK_COMPLEXITY_SCORE, TASKS_AUTOMATED_PERCENT, WORK_LIFE_BALANCE_SCORE,
};
use apd_model::{FormField, RiskAssessment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::bundle::ModelBundle;
use crate::classifier::Classifier;
use crate::encoder::CategoricalEncoder;
use crate::error::{PredictError, Result};

/// Task complexity fed to the classifier in place of a measured value.
pub const TASK_COMPLEXITY_PLACEHOLDER: f64 = 50.0;
/// Productivity score fed to the classifier in place of a measured value.
pub const PRODUCTIVITY_PLACEHOLDER: f64 = 70.0;
/// Value of the target column in an assembled row; never a feature.
pub const TARGET_DUMMY: f64 = 0.0;

/// One submission of the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub job_role: String,
    pub deadline_pressure: String,
    pub experience_years: i64,
    pub ai_usage_hours: f64,
    pub learning_hours: f64,
    pub automation_percent: f64,
    pub manual_work_hours: f64,
    pub collaboration_hours: f64,
    pub meeting_hours: f64,
    pub focus_hours: f64,
    pub work_life_balance: f64,
    pub error_rate: f64,
}

fn default_of(field: FormField) -> f64 {
    field.bounds().map_or(0.0, |bounds| bounds.default)
}

impl Default for PredictionForm {
    /// Numeric defaults with empty choices.
    fn default() -> Self {
        Self {
            job_role: String::new(),
            deadline_pressure: String::new(),
            experience_years: default_of(FormField::ExperienceYears) as i64,
            ai_usage_hours: default_of(FormField::AiUsageHours),
            learning_hours: default_of(FormField::LearningHours),
            automation_percent: default_of(FormField::AutomationPercent),
            manual_work_hours: default_of(FormField::ManualWorkHours),
            collaboration_hours: default_of(FormField::CollaborationHours),
            meeting_hours: default_of(FormField::MeetingHours),
            focus_hours: default_of(FormField::FocusHours),
            work_life_balance: default_of(FormField::WorkLifeBalance),
            error_rate: default_of(FormField::ErrorRate),
        }
    }
}

impl PredictionForm {
    /// Defaults with each choice set to the first class of its encoder.
    pub fn for_bundle(bundle: &ModelBundle) -> Self {
        let first = |field: &str| bundle.vocabulary(field).first().cloned().unwrap_or_default();
        Self {
            job_role: first(JOB_ROLE),
            deadline_pressure: first(DEADLINE_PRESSURE_LEVEL),
            ..Self::default()
        }
    }

    pub fn numeric(&self, field: FormField) -> Option<f64> {
        let value = match field {
            FormField::JobRole | FormField::DeadlinePressure => return None,
            FormField::ExperienceYears => self.experience_years as f64,
            FormField::AiUsageHours => self.ai_usage_hours,
            FormField::LearningHours => self.learning_hours,
            FormField::AutomationPercent => self.automation_percent,
            FormField::ManualWorkHours => self.manual_work_hours,
            FormField::CollaborationHours => self.collaboration_hours,
            FormField::MeetingHours => self.meeting_hours,
            FormField::FocusHours => self.focus_hours,
            FormField::WorkLifeBalance => self.work_life_balance,
            FormField::ErrorRate => self.error_rate,
        };
        Some(value)
    }

    /// Stores a clamped numeric value; choice fields are ignored.
    pub fn set_numeric(&mut self, field: FormField, value: f64) {
        let Some(bounds) = field.bounds() else {
            return;
        };
        let value = bounds.clamp(value);
        match field {
            FormField::JobRole | FormField::DeadlinePressure => {}
            FormField::ExperienceYears => self.experience_years = value.round() as i64,
            FormField::AiUsageHours => self.ai_usage_hours = value,
            FormField::LearningHours => self.learning_hours = value,
            FormField::AutomationPercent => self.automation_percent = value,
            FormField::ManualWorkHours => self.manual_work_hours = value,
            FormField::CollaborationHours => self.collaboration_hours = value,
            FormField::MeetingHours => self.meeting_hours = value,
            FormField::FocusHours => self.focus_hours = value,
            FormField::WorkLifeBalance => self.work_life_balance = value,
            FormField::ErrorRate => self.error_rate = value,
        }
    }

    pub fn choice(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::JobRole => Some(&self.job_role),
            FormField::DeadlinePressure => Some(&self.deadline_pressure),
            _ => None,
        }
    }

    pub fn set_choice(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::JobRole => self.job_role = value.into(),
            FormField::DeadlinePressure => self.deadline_pressure = value.into(),
            _ => {}
        }
    }

    /// Copy with every numeric field clamped into its control's range.
    pub fn clamped(&self) -> Self {
        let mut form = self.clone();
        for field in FormField::all() {
            if let Some(value) = self.numeric(*field) {
                form.set_numeric(*field, value);
            }
        }
        form
    }
}

/// A cell of the assembled input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

/// Named cells of one record, in record-field order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputRow {
    cells: Vec<(String, FeatureValue)>,
}

impl InputRow {
    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.cells.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.cells
            .iter()
            .find(|(cell, _)| cell == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reduces and reorders the row to exactly `features`.
    pub fn select(&self, features: &[String]) -> Result<InputRow> {
        let mut selected = InputRow::default();
        for feature in features {
            let value = self
                .get(feature)
                .ok_or_else(|| PredictError::MissingFeature {
                    feature: feature.clone(),
                })?;
            selected.push(feature.clone(), value.clone());
        }
        Ok(selected)
    }
}

/// Builds the full record row from a form: measured fields from the form,
/// placeholders for the two unmeasured scores, and a dummy target.
pub fn assemble_row(form: &PredictionForm) -> InputRow {
    use FeatureValue::{Category, Number};

    let mut row = InputRow::default();
    row.push(JOB_ROLE, Category(form.job_role.clone()));
    row.push(EXPERIENCE_YEARS, Number(form.experience_years as f64));
    row.push(AI_TOOL_USAGE_HOURS, Number(form.ai_usage_hours));
    row.push(TASKS_AUTOMATED_PERCENT, Number(form.automation_percent));
    row.push(MANUAL_WORK_HOURS, Number(form.manual_work_hours));
    row.push(LEARNING_TIME_HOURS, Number(form.learning_hours));
    row.push(DEADLINE_PRESSURE_LEVEL, Category(form.deadline_pressure.clone()));
    row.push(MEETING_HOURS, Number(form.meeting_hours));
    row.push(COLLABORATION_HOURS, Number(form.collaboration_hours));
    row.push(ERROR_RATE_PERCENT, Number(form.error_rate));
    row.push(TASK_COMPLEXITY_SCORE, Number(TASK_COMPLEXITY_PLACEHOLDER));
    row.push(FOCUS_HOURS_PER_DAY, Number(form.focus_hours));
    row.push(WORK_LIFE_BALANCE_SCORE, Number(form.work_life_balance));
    row.push(PRODUCTIVITY_SCORE, Number(PRODUCTIVITY_PLACEHOLDER));
    row.push(BURNOUT_RISK_SCORE, Number(TARGET_DUMMY));
    row
}

/// Encodes a selected row: categories become their encoder codes.
pub fn encode_row(bundle: &ModelBundle, row: &InputRow) -> Result<Vec<f64>> {
    row.cells
        .iter()
        .map(|(name, value)| match value {
            FeatureValue::Number(number) => Ok(*number),
            FeatureValue::Category(category) => {
                let code = bundle.encoder(name)?.transform(category)?;
                Ok(code as f64)
            }
        })
        .collect()
}

/// Runs an already assembled row through select, encode, classify, decode.
pub fn predict_row(bundle: &ModelBundle, row: &InputRow) -> Result<RiskAssessment> {
    let selected = row.select(&bundle.features)?;
    let encoded = encode_row(bundle, &selected)?;
    let code = bundle.model.predict(&encoded)?;
    let label = bundle.encoder(BURNOUT_RISK_LEVEL)?.inverse_transform(code)?;
    debug!(code, label, "class decoded");
    Ok(RiskAssessment::from_label(label))
}

/// Predicts the burnout risk level for one form submission.
pub fn predict(bundle: &ModelBundle, form: &PredictionForm) -> Result<RiskAssessment> {
    let span = info_span!("predict", job_role = %form.job_role);
    let _guard = span.enter();
    predict_row(bundle, &assemble_row(&form.clamped()))
}
