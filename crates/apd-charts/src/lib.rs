//! Aggregations behind the dashboard charts.
//!
//! Each builder takes the shared [`apd_ingest::EmployeeDataset`], derives a
//! bucket or group per record without touching the dataset, averages a target
//! column, and returns a renderer-agnostic [`Chart`]. A missing or mistyped
//! column is an error; nothing renders an empty chart in its place.

pub mod binning;
pub mod builders;
pub mod chart;
mod dashboard;
mod error;
pub mod profile;
pub mod stats;

pub use builders::{
    ai_usage_by_job_role, ai_vs_productivity, burnout_correlation, error_rate_vs_automation,
    experience_vs_productivity, meeting_hours_vs_productivity, productivity_by_job_role,
};
pub use chart::{Chart, ChartId, ChartKind, ChartSeries};
pub use dashboard::{build_chart, dashboard_charts};
pub use error::{ChartError, Result};
pub use profile::{Segment, TopPerformerProfile, top_performer_chart, top_performer_profile};
