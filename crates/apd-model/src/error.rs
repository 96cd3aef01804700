use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown burnout risk level: {0}")]
    UnknownRiskLevel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
