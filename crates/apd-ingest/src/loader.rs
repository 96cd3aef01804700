//! Dataset loading and the process-wide shared handle.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use polars::prelude::*;

use crate::dataset::EmployeeDataset;
use crate::error::{IngestError, Result};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "df.csv";

/// Reads the employee CSV into memory.
///
/// A missing file is [`IngestError::DatasetUnavailable`]; a file Polars cannot
/// parse, or one with no rows, is rejected as malformed. Catalogue columns
/// that are absent are only logged: each chart checks its own columns.
pub fn load_dataset(path: &Path) -> Result<EmployeeDataset> {
    let started = Instant::now();
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(IngestError::DatasetUnavailable {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::DatasetUnavailable {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_shape(&df, path)?;

    let dataset = EmployeeDataset::from_file(path, df);
    let missing = dataset.missing_columns();
    if !missing.is_empty() {
        tracing::warn!(
            path = %path.display(),
            missing = ?missing,
            "dataset lacks expected columns; dependent charts will fail"
        );
    }
    let mistyped = dataset.mistyped_columns();
    if !mistyped.is_empty() {
        tracing::warn!(
            path = %path.display(),
            columns = ?mistyped,
            "numeric columns hold non-numeric values; dependent charts will fail"
        );
    }
    tracing::info!(
        path = %path.display(),
        rows = dataset.height(),
        columns = dataset.width(),
        duration_ms = started.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

fn validate_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }
    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Once-initialised, shared, read-only dataset handle.
///
/// The first successful [`SharedDataset::get`] reads storage; every later
/// call returns the same `Arc`. A failed load is not cached, so the caller
/// sees the same fatal error again rather than a stale empty table.
#[derive(Debug)]
pub struct SharedDataset {
    path: PathBuf,
    cell: OnceLock<Arc<EmployeeDataset>>,
}

impl SharedDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<EmployeeDataset>> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }
        let loaded = Arc::new(load_dataset(&self.path)?);
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }
}

impl Default for SharedDataset {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}
