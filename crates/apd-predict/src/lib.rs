//! Burnout risk prediction.
//!
//! A [`ModelBundle`] carries the classifier's feature order, the fitted
//! [`LabelEncoder`]s, and a tree-ensemble [`TreeModel`]. [`predict`] turns a
//! [`PredictionForm`] into a decoded [`apd_model::RiskAssessment`]:
//!
//! 1. assemble a full record row, using placeholders for the two scores that
//!    cannot be supplied up front;
//! 2. reduce it to the bundle's feature list, in order;
//! 3. encode categorical cells;
//! 4. classify and decode the class code with the target encoder.
//!
//! [`BundleState`] records whether the bundle could be loaded at startup.
//! A missing bundle disables prediction without affecting anything else.

pub mod bundle;
pub mod classifier;
pub mod encoder;
mod error;
pub mod pipeline;

pub use bundle::{BundleState, DEFAULT_MODEL_PATH, ModelBundle, load_model_bundle};
pub use classifier::{Classifier, DecisionTree, TreeModel};
pub use encoder::{CategoricalEncoder, LabelEncoder};
pub use error::{PredictError, Result};
pub use pipeline::{
    FeatureValue, InputRow, PRODUCTIVITY_PLACEHOLDER, PredictionForm, TARGET_DUMMY,
    TASK_COMPLEXITY_PLACEHOLDER, assemble_row, encode_row, predict, predict_row,
};
