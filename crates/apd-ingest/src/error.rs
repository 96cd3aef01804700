//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading the employee dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The dataset file does not exist.
    #[error("dataset unavailable: {path} not found")]
    DatasetUnavailable { path: PathBuf },

    /// The dataset file exists but could not be read.
    #[error("failed to read dataset {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars rejected the file as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The file parsed but holds no rows.
    #[error("dataset is empty: {path}")]
    EmptyDataset { path: PathBuf },

    /// A header cell is blank.
    #[error("dataset {path} has an empty column name")]
    EmptyColumnName { path: PathBuf },

    /// Column not found in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Column exists but has the wrong type for the requested read.
    #[error("column '{column}' is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DatasetUnavailable {
            path: PathBuf::from("data/df.csv"),
        };
        assert_eq!(err.to_string(), "dataset unavailable: data/df.csv not found");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
