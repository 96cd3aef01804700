use thiserror::Error;

use apd_ingest::IngestError;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("aggregation failed: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
    #[error("column '{column}' has no values to aggregate")]
    NoValues { column: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
