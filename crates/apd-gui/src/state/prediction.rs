//! Prediction view state: the form being edited and the last result.

use apd_model::RiskAssessment;
use apd_predict::{ModelBundle, PredictionForm, predict};

/// Result of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Assessed(RiskAssessment),
    /// The pipeline rejected the input; the message is shown in place of a result.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct PredictionState {
    form: Option<PredictionForm>,
    outcome: Option<PredictionOutcome>,
}

impl PredictionState {
    /// The form, initialised from the bundle's vocabularies on first use.
    pub fn form_mut(&mut self, bundle: &ModelBundle) -> &mut PredictionForm {
        self.form
            .get_or_insert_with(|| PredictionForm::for_bundle(bundle))
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    /// Runs the current form through the pipeline and keeps the outcome.
    pub fn submit(&mut self, bundle: &ModelBundle) -> &PredictionOutcome {
        let form = self.form_mut(bundle).clone();
        let outcome = match predict(bundle, &form) {
            Ok(assessment) => {
                tracing::info!(label = %assessment.label, "prediction made");
                PredictionOutcome::Assessed(assessment)
            }
            Err(error) => {
                tracing::error!(%error, "prediction failed");
                PredictionOutcome::Failed(error.to_string())
            }
        };
        self.outcome.insert(outcome)
    }

    /// Drops the form and result, e.g. after the bundle changes.
    pub fn reset(&mut self) {
        self.form = None;
        self.outcome = None;
    }
}
