//! Tests for apd-model types.

use apd_model::{FormField, PREDICTION_FEATURES, RiskAssessment, Severity};

#[test]
fn form_fields_cover_measured_prediction_features() {
    // The two placeholders are the only prediction features without a form control.
    let missing: Vec<&str> = PREDICTION_FEATURES
        .iter()
        .copied()
        .filter(|name| !FormField::all().iter().any(|f| f.column() == *name))
        .collect();
    assert_eq!(missing, vec!["task_complexity_score", "productivity_score"]);
}

#[test]
fn assessment_serializes() {
    let assessment = RiskAssessment::from_label("Medium");
    let json = serde_json::to_string(&assessment).expect("serialize assessment");
    let round: RiskAssessment = serde_json::from_str(&json).expect("deserialize assessment");
    assert_eq!(round.severity, Severity::Warning);
    assert_eq!(round.label, "Medium");
}
