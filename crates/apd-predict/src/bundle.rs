//! Model bundle loading.
//!
//! A bundle is one JSON document holding the feature order, the fitted
//! categorical encoders, and the trained classifier:
//!
//! ```json
//! {
//!   "features": ["job_role", "experience_years", "..."],
//!   "encoders": { "job_role": { "classes": ["Analyst", "Engineer"] } },
//!   "model": { "kind": "random_forest", "n_classes": 3, "trees": [] }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use apd_model::columns::{BURNOUT_RISK_LEVEL, CATEGORICAL_FIELDS};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classifier::{Classifier, TreeModel};
use crate::encoder::{CategoricalEncoder, LabelEncoder};
use crate::error::{PredictError, Result};

/// Bundle path used when none is configured.
pub const DEFAULT_MODEL_PATH: &str = "rf_model.json";

/// Trained classifier plus everything needed to encode its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    /// Column names the classifier expects, in order.
    pub features: Vec<String>,
    pub encoders: BTreeMap<String, LabelEncoder>,
    pub model: TreeModel,
}

impl ModelBundle {
    /// Binds encoder field names and checks internal consistency.
    pub fn validate(&mut self) -> Result<()> {
        if self.features.is_empty() {
            return Err(PredictError::InvalidBundle("feature list is empty".into()));
        }
        for (field, encoder) in &mut self.encoders {
            encoder.bind_field(field);
            encoder.validate()?;
        }
        for field in CATEGORICAL_FIELDS {
            if self.features.iter().any(|f| f == field) && !self.encoders.contains_key(*field) {
                return Err(PredictError::MissingEncoder {
                    field: field.to_string(),
                });
            }
        }
        let target = self.encoder(BURNOUT_RISK_LEVEL)?;
        if target.classes().len() != self.model.n_classes() {
            return Err(PredictError::InvalidBundle(format!(
                "target encoder has {} classes but the model predicts {}",
                target.classes().len(),
                self.model.n_classes()
            )));
        }
        self.model.validate()?;
        let required = self.model.required_features();
        if required > self.features.len() {
            return Err(PredictError::FeatureCountMismatch {
                expected: required,
                actual: self.features.len(),
            });
        }
        Ok(())
    }

    pub fn encoder(&self, field: &str) -> Result<&LabelEncoder> {
        self.encoders
            .get(field)
            .ok_or_else(|| PredictError::MissingEncoder {
                field: field.to_string(),
            })
    }

    /// Trained vocabulary of a categorical field, empty when it has no encoder.
    pub fn vocabulary(&self, field: &str) -> &[String] {
        self.encoders
            .get(field)
            .map(CategoricalEncoder::classes)
            .unwrap_or_default()
    }

    /// Parses and validates a bundle from JSON text.
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        let mut bundle: Self =
            serde_json::from_str(text).map_err(|source| PredictError::BundleParse {
                path: path.to_path_buf(),
                source,
            })?;
        bundle.validate()?;
        Ok(bundle)
    }
}

/// Reads the bundle at `path`.
pub fn load_model_bundle(path: impl AsRef<Path>) -> Result<ModelBundle> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PredictError::BundleUnavailable {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| PredictError::BundleRead {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = ModelBundle::from_json(&text, path)?;
    info!(
        path = %path.display(),
        features = bundle.features.len(),
        classes = bundle.model.n_classes(),
        "model bundle loaded"
    );
    Ok(bundle)
}

/// Outcome of the one bundle load attempt made per session.
#[derive(Debug, Clone)]
pub enum BundleState {
    Ready(Arc<ModelBundle>),
    /// Prediction is disabled; visualisation keeps working.
    Unavailable { path: PathBuf, reason: String },
}

impl BundleState {
    /// Loads the bundle, downgrading any failure to `Unavailable`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_model_bundle(path) {
            Ok(bundle) => Self::Ready(Arc::new(bundle)),
            Err(error) => {
                warn!(path = %path.display(), %error, "prediction disabled");
                Self::Unavailable {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                }
            }
        }
    }

    pub fn bundle(&self) -> Option<&Arc<ModelBundle>> {
        match self {
            Self::Ready(bundle) => Some(bundle),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Why prediction is unavailable, if it is.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable { reason, .. } => Some(reason),
        }
    }}

#[cfg(test)]
mod tests {
    use super::*;

    const STUMP: &str = r#"{
        "features": ["job_role", "experience_years"],
        "encoders": {
            "job_role": { "classes": ["Analyst", "Engineer"] },
            "burnout_risk_level": { "classes": ["High", "Low", "Medium"] }
        },
        "model": {
            "kind": "decision_tree",
            "n_classes": 3,
            "tree": {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [1, -2, -2],
                "threshold": [4.5, -2.0, -2.0],
                "value": [[1, 1, 1], [0, 3, 1], [4, 0, 1]]
            }
        }
    }"#;

    #[test]
    fn parses_and_binds_encoder_fields() {
        let bundle = ModelBundle::from_json(STUMP, Path::new("b.json")).unwrap();
        assert_eq!(bundle.encoder("job_role").unwrap().field(), "job_role");
        assert_eq!(bundle.vocabulary("job_role"), ["Analyst", "Engineer"]);
        assert!(bundle.vocabulary("deadline_pressure_level").is_empty());
    }

    #[test]
    fn target_encoder_is_required() {
        let text = STUMP.replace("burnout_risk_level", "other_target");
        let err = ModelBundle::from_json(&text, Path::new("b.json")).unwrap_err();
        assert!(matches!(
            err,
            PredictError::MissingEncoder { field } if field == BURNOUT_RISK_LEVEL
        ));
    }

    #[test]
    fn categorical_feature_without_encoder_is_rejected() {
        let text = STUMP.replace(r#""job_role": { "classes": ["Analyst", "Engineer"] },"#, "");
        let err = ModelBundle::from_json(&text, Path::new("b.json")).unwrap_err();
        assert!(matches!(err, PredictError::MissingEncoder { field } if field == "job_role"));
    }

    #[test]
    fn split_on_missing_feature_is_rejected() {
        let text = STUMP.replace(r#""feature": [1, -2, -2]"#, r#""feature": [5, -2, -2]"#);
        let err = ModelBundle::from_json(&text, Path::new("b.json")).unwrap_err();
        assert!(matches!(err, PredictError::FeatureCountMismatch { expected: 6, actual: 2 }));
    }

    #[test]
    fn missing_file_leaves_state_unavailable() {
        let state = BundleState::load("definitely/not/here.json");
        assert!(!state.is_ready());
        assert!(state.reason().unwrap().contains("not found"));
        assert!(state.bundle().is_none());
    }
}
