//! View components
//!
//! The sidebar plus one view per navigation entry.

mod chart;
mod prediction;
mod sidebar;
mod visualization;

pub use prediction::PredictionView;
pub use sidebar::Sidebar;
pub use visualization::VisualizationView;
