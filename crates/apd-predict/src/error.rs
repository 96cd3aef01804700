//! Error types for the prediction crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// The bundle file does not exist.
    #[error("model bundle unavailable: {path} not found")]
    BundleUnavailable { path: PathBuf },

    #[error("failed to read model bundle {path}: {source}")]
    BundleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model bundle {path}: {source}")]
    BundleParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The bundle parsed but is structurally inconsistent.
    #[error("invalid model bundle: {0}")]
    InvalidBundle(String),

    #[error("no encoder for field '{field}'")]
    MissingEncoder { field: String },

    #[error("value '{value}' is not in the trained vocabulary of '{field}'")]
    UnknownCategory { field: String, value: String },

    #[error("class code {code} is out of range for '{field}'")]
    UnknownClassCode { field: String, code: usize },

    /// The classifier expects a feature the input row does not carry.
    #[error("input row has no feature '{feature}'")]
    MissingFeature { feature: String },

    #[error("classifier expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PredictError>;
