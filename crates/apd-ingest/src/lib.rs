//! Employee dataset ingestion.
//!
//! Loads the per-employee CSV into a Polars-backed [`EmployeeDataset`] and
//! exposes [`SharedDataset`], a handle that reads storage at most once per
//! process and hands out the same table to every consumer.
//!
//! # Example
//!
//! ```ignore
//! use apd_ingest::SharedDataset;
//!
//! let shared = SharedDataset::new("df.csv");
//! let dataset = shared.get()?;
//! println!("{} employees", dataset.height());
//! ```

mod dataset;
mod error;
mod loader;

pub use dataset::EmployeeDataset;
pub use error::{IngestError, Result};
pub use loader::{DEFAULT_DATASET_PATH, SharedDataset, load_dataset};
