//! Categorical encoders.

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// A fitted mapping between category values and integer codes.
pub trait CategoricalEncoder {
    /// Code of `value`, failing for values outside the trained vocabulary.
    fn transform(&self, value: &str) -> Result<usize>;
    /// Category value for `code`.
    fn inverse_transform(&self, code: usize) -> Result<&str>;
    /// The trained vocabulary, in code order.
    fn classes(&self) -> &[String];
}

/// Label encoder: codes are positions in the sorted vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    #[serde(skip)]
    field: String,
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fits on observed values: the vocabulary is their sorted distinct set.
    pub fn fit<I, S>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = values.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self {
            field: field.to_string(),
            classes,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub(crate) fn bind_field(&mut self, field: &str) {
        self.field = field.to_string();
    }

    /// Vocabulary must be non-empty, sorted, and free of duplicates.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(PredictError::InvalidBundle(format!(
                "encoder '{}' has an empty vocabulary",
                self.field
            )));
        }
        if !self.classes.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(PredictError::InvalidBundle(format!(
                "encoder '{}' vocabulary is not sorted and unique",
                self.field
            )));
        }
        Ok(())
    }
}

impl CategoricalEncoder for LabelEncoder {
    fn transform(&self, value: &str) -> Result<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .map_err(|_| PredictError::UnknownCategory {
                field: self.field.clone(),
                value: value.to_string(),
            })
    }

    fn inverse_transform(&self, code: usize) -> Result<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| PredictError::UnknownClassCode {
                field: self.field.clone(),
                code,
            })
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_sorts_and_dedups() {
        let encoder =
            LabelEncoder::fit("deadline_pressure_level", ["Medium", "High", "Low", "High"]);
        assert_eq!(encoder.classes(), &["High", "Low", "Medium"]);
        assert_eq!(encoder.transform("Low").unwrap(), 1);
        assert_eq!(encoder.inverse_transform(2).unwrap(), "Medium");
    }

    #[test]
    fn unknown_values_are_errors() {
        let encoder = LabelEncoder::fit("job_role", ["Analyst", "Engineer"]);
        assert!(matches!(
            encoder.transform("Astronaut"),
            Err(PredictError::UnknownCategory { .. })
        ));
        assert!(matches!(
            encoder.inverse_transform(2),
            Err(PredictError::UnknownClassCode { code: 2, .. })
        ));
    }

    #[test]
    fn unsorted_vocabulary_is_invalid() {
        let encoder: LabelEncoder =
            serde_json::from_str(r#"{"classes": ["Low", "High"]}"#).unwrap();
        assert!(encoder.validate().is_err());
    }
}
