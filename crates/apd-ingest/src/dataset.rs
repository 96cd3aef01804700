//! The in-memory employee table.

use std::path::{Path, PathBuf};

use polars::prelude::*;

use apd_common::{f64_values, is_numeric_dtype, numeric_columns, string_values};
use apd_model::EMPLOYEE_FIELDS;

use crate::error::{IngestError, Result};

/// Read-only table of employee records.
///
/// Constructed once per process and shared by reference; nothing mutates the
/// frame after load. Derived columns (bins, segments) live in the chart
/// builders, never here.
#[derive(Debug, Clone)]
pub struct EmployeeDataset {
    source: Option<PathBuf>,
    frame: DataFrame,
}

impl EmployeeDataset {
    /// Wraps an already-built frame (tests, in-memory sources).
    pub fn from_frame(frame: DataFrame) -> Self {
        Self {
            source: None,
            frame,
        }
    }

    pub(crate) fn from_file(path: &Path, frame: DataFrame) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            frame,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    /// Catalogue columns absent from this dataset.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        EMPLOYEE_FIELDS
            .iter()
            .map(|spec| spec.name)
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Catalogue columns that should be numeric but were read as another type.
    pub fn mistyped_columns(&self) -> Vec<&'static str> {
        EMPLOYEE_FIELDS
            .iter()
            .filter(|spec| !spec.is_categorical())
            .filter(|spec| {
                self.frame
                    .column(spec.name)
                    .is_ok_and(|column| !is_numeric_dtype(column.dtype()))
            })
            .map(|spec| spec.name)
            .collect()
    }

    /// Reads a numeric column as `f64` values.
    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.column(name)?;
        if !is_numeric_dtype(column.dtype()) {
            return Err(IngestError::ColumnType {
                column: name.to_string(),
                expected: "numeric",
            });
        }
        Ok(f64_values(&self.frame, name)?)
    }

    /// Reads a column as trimmed text values.
    pub fn text(&self, name: &str) -> Result<Vec<Option<String>>> {
        self.column(name)?;
        Ok(string_values(&self.frame, name)?)
    }

    /// Names of every numeric column, in frame order.
    pub fn numeric_columns(&self) -> Vec<String> {
        numeric_columns(&self.frame)
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.frame
            .column(name)
            .map_err(|_| IngestError::ColumnNotFound {
                column: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> EmployeeDataset {
        let frame = DataFrame::new(vec![
            Series::new("job_role".into(), vec!["Engineer", "Analyst"]).into(),
            Series::new("productivity_score".into(), vec![71.0, 64.5]).into(),
        ])
        .unwrap();
        EmployeeDataset::from_frame(frame)
    }

    #[test]
    fn reads_numeric_and_text_columns() {
        let ds = dataset();
        assert_eq!(ds.height(), 2);
        assert_eq!(
            ds.numeric("productivity_score").unwrap(),
            vec![Some(71.0), Some(64.5)]
        );
        assert_eq!(
            ds.text("job_role").unwrap(),
            vec![Some("Engineer".to_string()), Some("Analyst".to_string())]
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let ds = dataset();
        let err = ds.numeric("meeting_hours_per_week").unwrap_err();
        assert!(matches!(
            err,
            IngestError::ColumnNotFound { ref column } if column == "meeting_hours_per_week"
        ));
        assert!(ds.missing_columns().contains(&"meeting_hours_per_week"));
        assert!(!ds.missing_columns().contains(&"job_role"));
    }

    #[test]
    fn text_in_a_numeric_field_is_mistyped() {
        let frame = DataFrame::new(vec![
            Series::new("job_role".into(), vec!["Engineer", "Analyst"]).into(),
            Series::new("focus_hours_per_day".into(), vec!["five", "6"]).into(),
            Series::new("productivity_score".into(), vec![71.0, 64.5]).into(),
        ])
        .unwrap();
        let ds = EmployeeDataset::from_frame(frame);
        assert_eq!(ds.mistyped_columns(), vec!["focus_hours_per_day"]);
    }

    #[test]
    fn text_column_is_not_numeric() {
        let ds = dataset();
        assert!(matches!(
            ds.numeric("job_role"),
            Err(IngestError::ColumnType { .. })
        ));
    }
}
