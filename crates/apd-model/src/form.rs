//! Prediction form definition: one control per input field, with bounds.

use serde::{Deserialize, Serialize};

use crate::columns;

/// Widget used to collect a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormControl {
    /// Pick one value from an encoder vocabulary; defaults to the first.
    Choice,
    /// Whole-number input.
    Integer,
    /// Free numeric input.
    Number,
    /// Numeric slider.
    Slider,
}

/// Inclusive range and default for a numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    /// Clamps into `[min, max]`; NaN becomes the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

/// The twelve inputs of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    JobRole,
    ExperienceYears,
    AiUsageHours,
    LearningHours,
    AutomationPercent,
    ManualWorkHours,
    DeadlinePressure,
    CollaborationHours,
    MeetingHours,
    FocusHours,
    WorkLifeBalance,
    ErrorRate,
}

impl FormField {
    /// All fields in layout order: three columns of four.
    pub fn all() -> &'static [FormField] {
        &[
            Self::JobRole,
            Self::ExperienceYears,
            Self::AiUsageHours,
            Self::LearningHours,
            Self::AutomationPercent,
            Self::ManualWorkHours,
            Self::DeadlinePressure,
            Self::CollaborationHours,
            Self::MeetingHours,
            Self::FocusHours,
            Self::WorkLifeBalance,
            Self::ErrorRate,
        ]
    }

    /// Dataset column the field feeds.
    pub fn column(&self) -> &'static str {
        match self {
            Self::JobRole => columns::JOB_ROLE,
            Self::ExperienceYears => columns::EXPERIENCE_YEARS,
            Self::AiUsageHours => columns::AI_TOOL_USAGE_HOURS,
            Self::LearningHours => columns::LEARNING_TIME_HOURS,
            Self::AutomationPercent => columns::TASKS_AUTOMATED_PERCENT,
            Self::ManualWorkHours => columns::MANUAL_WORK_HOURS,
            Self::DeadlinePressure => columns::DEADLINE_PRESSURE_LEVEL,
            Self::CollaborationHours => columns::COLLABORATION_HOURS,
            Self::MeetingHours => columns::MEETING_HOURS,
            Self::FocusHours => columns::FOCUS_HOURS_PER_DAY,
            Self::WorkLifeBalance => columns::WORK_LIFE_BALANCE_SCORE,
            Self::ErrorRate => columns::ERROR_RATE_PERCENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobRole => "Job role",
            Self::ExperienceYears => "Years of experience",
            Self::AiUsageHours => "AI usage (hours/week)",
            Self::LearningHours => "Learning (hours/week)",
            Self::AutomationPercent => "Tasks automated (%)",
            Self::ManualWorkHours => "Manual work (hours/week)",
            Self::DeadlinePressure => "Deadline pressure",
            Self::CollaborationHours => "Collaboration (hours/week)",
            Self::MeetingHours => "Meetings (hours/week)",
            Self::FocusHours => "Focus (hours/day)",
            Self::WorkLifeBalance => "Work-life balance (1-10)",
            Self::ErrorRate => "Error rate (%)",
        }
    }

    pub fn control(&self) -> FormControl {
        match self {
            Self::JobRole | Self::DeadlinePressure => FormControl::Choice,
            Self::ExperienceYears => FormControl::Integer,
            Self::AiUsageHours
            | Self::LearningHours
            | Self::CollaborationHours
            | Self::ErrorRate => FormControl::Number,
            Self::AutomationPercent
            | Self::ManualWorkHours
            | Self::MeetingHours
            | Self::FocusHours
            | Self::WorkLifeBalance => FormControl::Slider,
        }
    }

    /// Bounds for numeric controls; `None` for choices.
    pub fn bounds(&self) -> Option<FieldBounds> {
        let bounds = match self {
            Self::JobRole | Self::DeadlinePressure => return None,
            Self::ExperienceYears => FieldBounds::new(0.0, 40.0, 5.0),
            Self::AiUsageHours => FieldBounds::new(0.0, 50.0, 10.0),
            Self::LearningHours => FieldBounds::new(0.0, 20.0, 2.0),
            Self::AutomationPercent => FieldBounds::new(0.0, 100.0, 30.0),
            Self::ManualWorkHours => FieldBounds::new(0.0, 50.0, 20.0),
            Self::CollaborationHours => FieldBounds::new(0.0, 30.0, 5.0),
            Self::MeetingHours => FieldBounds::new(0.0, 50.0, 10.0),
            Self::FocusHours => FieldBounds::new(1.0, 12.0, 5.0),
            Self::WorkLifeBalance => FieldBounds::new(1.0, 10.0, 7.0),
            Self::ErrorRate => FieldBounds::new(0.0, 10.0, 1.0),
        };
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_numeric_field_has_bounds_containing_default() {
        for field in FormField::all() {
            match field.control() {
                FormControl::Choice => assert!(field.bounds().is_none()),
                _ => {
                    let bounds = field.bounds().unwrap();
                    assert!(bounds.min <= bounds.default && bounds.default <= bounds.max);
                }
            }
        }
    }

    #[test]
    fn clamp_respects_range() {
        let focus = FormField::FocusHours.bounds().unwrap();
        assert_eq!(focus.clamp(0.0), 1.0);
        assert_eq!(focus.clamp(15.0), 12.0);
        assert_eq!(focus.clamp(6.5), 6.5);
        assert_eq!(focus.clamp(f64::NAN), 5.0);
    }

    #[test]
    fn fields_map_to_distinct_columns() {
        let mut columns: Vec<_> = FormField::all().iter().map(FormField::column).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), 12);
    }
}
