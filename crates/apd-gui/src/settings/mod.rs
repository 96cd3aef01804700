//! User settings for the dashboard GUI.
//!
//! - Data sources (dataset and model bundle paths)
//! - Display preferences (dark mode, chart height)

mod persistence;
pub mod ui;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use apd_ingest::DEFAULT_DATASET_PATH;
use apd_predict::DEFAULT_MODEL_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub display: DisplaySettings,
}

/// Where the dataset and model bundle are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

/// Chart height limits in points.
pub const MIN_CHART_HEIGHT: f32 = 180.0;
pub const MAX_CHART_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Height of each chart in the grid.
    pub chart_height: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            chart_height: 260.0,
        }
    }
}

impl DisplaySettings {
    /// Chart height clamped to the supported range.
    pub fn chart_height(&self) -> f32 {
        if self.chart_height.is_nan() {
            return Self::default().chart_height;
        }
        self.chart_height.clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory_files() {
        let settings = Settings::default();
        assert_eq!(settings.data.dataset_path, PathBuf::from("df.csv"));
        assert_eq!(settings.data.model_path, PathBuf::from("rf_model.json"));
    }

    #[test]
    fn chart_height_is_clamped() {
        let display = DisplaySettings {
            dark_mode: false,
            chart_height: 2000.0,
        };
        assert_eq!(display.chart_height(), MAX_CHART_HEIGHT);
    }

    #[test]
    fn default_settings_snapshot() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        insta::assert_snapshot!(text, @r#"
        [data]
        dataset_path = "df.csv"
        model_path = "rf_model.json"

        [display]
        dark_mode = false
        chart_height = 260.0
        "#);
    }
}
