//! Column catalogue for the employee dataset.
//!
//! Every column the dashboard reads is named here once; chart builders, the
//! prediction pipeline, and the form all refer to these constants.

use serde::{Deserialize, Serialize};

pub const JOB_ROLE: &str = "job_role";
pub const EXPERIENCE_YEARS: &str = "experience_years";
pub const AI_TOOL_USAGE_HOURS: &str = "ai_tool_usage_hours_per_week";
pub const TASKS_AUTOMATED_PERCENT: &str = "tasks_automated_percent";
pub const MANUAL_WORK_HOURS: &str = "manual_work_hours_per_week";
pub const LEARNING_TIME_HOURS: &str = "learning_time_hours_per_week";
pub const DEADLINE_PRESSURE_LEVEL: &str = "deadline_pressure_level";
pub const MEETING_HOURS: &str = "meeting_hours_per_week";
pub const COLLABORATION_HOURS: &str = "collaboration_hours_per_week";
pub const ERROR_RATE_PERCENT: &str = "error_rate_percent";
pub const TASK_COMPLEXITY_SCORE: &str = "task_complexity_score";
pub const FOCUS_HOURS_PER_DAY: &str = "focus_hours_per_day";
pub const WORK_LIFE_BALANCE_SCORE: &str = "work_life_balance_score";
pub const PRODUCTIVITY_SCORE: &str = "productivity_score";
pub const BURNOUT_RISK_SCORE: &str = "burnout_risk_score";
pub const BURNOUT_RISK_LEVEL: &str = "burnout_risk_level";

/// Whether a column holds measurements or category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Numeric,
    Categorical,
}

/// Static description of one employee record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn numeric(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Numeric,
    }
}

const fn categorical(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Categorical,
    }
}

/// All employee record columns, in dataset order.
pub const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    categorical(JOB_ROLE),
    numeric(EXPERIENCE_YEARS),
    numeric(AI_TOOL_USAGE_HOURS),
    numeric(TASKS_AUTOMATED_PERCENT),
    numeric(MANUAL_WORK_HOURS),
    numeric(LEARNING_TIME_HOURS),
    categorical(DEADLINE_PRESSURE_LEVEL),
    numeric(MEETING_HOURS),
    numeric(COLLABORATION_HOURS),
    numeric(ERROR_RATE_PERCENT),
    numeric(TASK_COMPLEXITY_SCORE),
    numeric(FOCUS_HOURS_PER_DAY),
    numeric(WORK_LIFE_BALANCE_SCORE),
    numeric(PRODUCTIVITY_SCORE),
    numeric(BURNOUT_RISK_SCORE),
    categorical(BURNOUT_RISK_LEVEL),
];

/// Categorical inputs the classifier receives as encoded integers.
pub const CATEGORICAL_FIELDS: &[&str] = &[JOB_ROLE, DEADLINE_PRESSURE_LEVEL];

/// The fourteen record fields a prediction row is assembled from.
pub const PREDICTION_FEATURES: &[&str] = &[
    JOB_ROLE,
    EXPERIENCE_YEARS,
    AI_TOOL_USAGE_HOURS,
    TASKS_AUTOMATED_PERCENT,
    MANUAL_WORK_HOURS,
    LEARNING_TIME_HOURS,
    DEADLINE_PRESSURE_LEVEL,
    MEETING_HOURS,
    COLLABORATION_HOURS,
    ERROR_RATE_PERCENT,
    TASK_COMPLEXITY_SCORE,
    FOCUS_HOURS_PER_DAY,
    WORK_LIFE_BALANCE_SCORE,
    PRODUCTIVITY_SCORE,
];

impl FieldSpec {
    pub fn is_categorical(&self) -> bool {
        self.kind == FieldKind::Categorical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> Option<&'static FieldSpec> {
        EMPLOYEE_FIELDS.iter().find(|spec| spec.name == name)
    }

    #[test]
    fn prediction_features_are_known_fields() {
        assert_eq!(PREDICTION_FEATURES.len(), 14);
        for name in PREDICTION_FEATURES {
            assert!(spec(name).is_some(), "{name} missing from catalogue");
        }
    }

    #[test]
    fn categorical_fields_are_flagged() {
        for name in CATEGORICAL_FIELDS {
            assert!(spec(name).is_some_and(FieldSpec::is_categorical));
        }
        assert!(!spec(PRODUCTIVITY_SCORE).is_some_and(FieldSpec::is_categorical));
        assert!(spec("salary").is_none());
    }
}
