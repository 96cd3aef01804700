//! Shared read-only data behind both views.

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use apd_charts::{Chart, dashboard_charts};
use apd_ingest::SharedDataset;
use apd_predict::BundleState;

use crate::settings::DataSettings;

/// The dataset handle, the bundle resolved at startup, and the dashboard
/// charts built from the dataset on first use.
pub struct AppContext {
    dataset: SharedDataset,
    bundle: BundleState,
    charts: OnceLock<Result<Vec<Chart>>>,
}

impl AppContext {
    /// Resolves the model bundle now; the dataset loads when first needed.
    pub fn new(dataset_path: &Path, model_path: &Path) -> Self {
        Self {
            dataset: SharedDataset::new(dataset_path),
            bundle: BundleState::load(model_path),
            charts: OnceLock::new(),
        }
    }

    pub fn from_settings(data: &DataSettings) -> Self {
        Self::new(&data.dataset_path, &data.model_path)
    }

    pub fn dataset_path(&self) -> &Path {
        self.dataset.path()
    }

    /// Whether the dataset has been read from storage yet.
    pub fn dataset_loaded(&self) -> bool {
        self.dataset.is_loaded()
    }

    pub fn bundle(&self) -> &BundleState {
        &self.bundle
    }

    /// The eight dashboard charts, or why they cannot be shown.
    pub fn charts(&self) -> Result<&[Chart], &anyhow::Error> {
        self.charts.get_or_init(|| self.build_charts()).as_deref()
    }

    fn build_charts(&self) -> Result<Vec<Chart>> {
        let dataset = self
            .dataset
            .get()
            .with_context(|| format!("load dataset {}", self.dataset.path().display()))?;
        dashboard_charts(&dataset).context("build dashboard charts")
    }
}
