//! Polars column and `AnyValue` helpers.
//!
//! The dashboard reads every column either as optional `f64` values or as
//! optional strings; these helpers centralise the casting rules.

use polars::prelude::*;

/// Returns true for integer and floating-point column types.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Names of all numeric columns, in frame order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .collect()
}

/// Reads a column as `f64` values, casting integer columns.
///
/// Fails when the column is absent or cannot be cast (e.g. free text).
pub fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(PolarsError::SchemaMismatch(
            format!(
                "column '{name}' is {} but a numeric column is required",
                column.dtype()
            )
            .into(),
        ));
    }
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

/// Reads a column as trimmed strings; empty cells become `None`.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let cast = column.cast(&DataType::String)?;
    Ok(cast
        .str()?
        .into_iter()
        .map(|value| {
            value
                .map(str::trim)
                .filter(|trimmed| !trimmed.is_empty())
                .map(str::to_string)
        })
        .collect())
}

/// Formats a number with three decimals, dropping trailing zeros.
///
/// # Examples
///
/// ```
/// use apd_common::format_numeric;
///
/// assert_eq!(format_numeric(70.0), "70");
/// assert_eq!(format_numeric(1.25), "1.25");
/// assert_eq!(format_numeric(-0.333333), "-0.333");
/// ```
pub fn format_numeric(v: f64) -> String {
    format_decimal(v, 3)
}

/// Formats a number with at most `decimals` places, dropping trailing zeros.
/// Values that round to zero print as `0`, never `-0`.
pub fn format_decimal(v: f64, decimals: usize) -> String {
    let s = format!("{v:.decimals$}");
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        DataFrame::new(vec![
            Series::new("job_role".into(), vec!["Engineer", " Analyst ", ""]).into(),
            Series::new("experience_years".into(), vec![1i64, 4, 12]).into(),
            Series::new("productivity_score".into(), vec![Some(70.5), None, Some(88.0)]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_numeric_columns_skip_text() {
        let df = sample_df();
        assert_eq!(
            numeric_columns(&df),
            vec!["experience_years".to_string(), "productivity_score".to_string()]
        );
    }

    #[test]
    fn test_f64_values_casts_integers() {
        let df = sample_df();
        assert_eq!(
            f64_values(&df, "experience_years").unwrap(),
            vec![Some(1.0), Some(4.0), Some(12.0)]
        );
        assert_eq!(
            f64_values(&df, "productivity_score").unwrap(),
            vec![Some(70.5), None, Some(88.0)]
        );
    }

    #[test]
    fn test_f64_values_rejects_text_and_missing() {
        let df = sample_df();
        assert!(f64_values(&df, "job_role").is_err());
        assert!(f64_values(&df, "no_such_column").is_err());
    }

    #[test]
    fn test_string_values_trim_and_blank() {
        let df = sample_df();
        assert_eq!(
            string_values(&df, "job_role").unwrap(),
            vec![Some("Engineer".to_string()), Some("Analyst".to_string()), None]
        );
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(-0.0001), "0");
        assert_eq!(format_numeric(2.34567), "2.346");
    }

    #[test]
    fn test_format_decimal_precision() {
        assert_eq!(format_decimal(0.126, 2), "0.13");
        assert_eq!(format_decimal(100.0, 2), "100");
        assert_eq!(format_decimal(100.0, 0), "100");
        assert_eq!(format_decimal(-0.004, 2), "0");
    }
}
