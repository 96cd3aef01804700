//! Burnout risk labels and the severity tier used to present them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The three-class target the classifier predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(ModelError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// Presentation tier for a prediction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl Severity {
    /// "High" is an error, "Medium" a warning, anything else a success.
    pub fn for_label(label: &str) -> Self {
        match label {
            "High" => Severity::Error,
            "Medium" => Severity::Warning,
            _ => Severity::Success,
        }
    }
}

/// A decoded prediction ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Label exactly as decoded by the target encoder.
    pub label: String,
    pub severity: Severity,
}

impl RiskAssessment {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let severity = Severity::for_label(&label);
        Self { label, severity }
    }

    /// The label parsed into the closed set, if it is one of the three.
    pub fn level(&self) -> Option<RiskLevel> {
        self.label.parse().ok()
    }

    pub fn headline(&self) -> String {
        format!("Prediction result: {}", self.label)
    }

    pub fn message(&self) -> &'static str {
        match self.severity {
            Severity::Error => "High burnout risk! The workload needs adjusting.",
            Severity::Warning => {
                "Moderate burnout risk. Keep an eye on the employee's focus hours."
            }
            Severity::Success => "Low burnout risk. Keep up the current work rhythm!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tiers() {
        assert_eq!(Severity::for_label("High"), Severity::Error);
        assert_eq!(Severity::for_label("Medium"), Severity::Warning);
        assert_eq!(Severity::for_label("Low"), Severity::Success);
        assert_eq!(Severity::for_label("Unknown"), Severity::Success);
    }

    #[test]
    fn parse_risk_level() {
        assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(" Low ".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert!("high".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn assessment_messages_follow_severity() {
        let high = RiskAssessment::from_label("High");
        assert_eq!(high.level(), Some(RiskLevel::High));
        assert_eq!(high.headline(), "Prediction result: High");
        assert!(high.message().starts_with("High burnout risk"));

        let low = RiskAssessment::from_label("Low");
        assert_eq!(low.severity, Severity::Success);
        assert!(low.message().starts_with("Low burnout risk"));
    }
}
