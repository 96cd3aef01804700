pub mod columns;
pub mod error;
pub mod form;
pub mod risk;

pub use columns::{
    CATEGORICAL_FIELDS, EMPLOYEE_FIELDS, FieldKind, FieldSpec, PREDICTION_FEATURES,
};
pub use error::{ModelError, Result};
pub use form::{FieldBounds, FormControl, FormField};
pub use risk::{RiskAssessment, RiskLevel, Severity};
