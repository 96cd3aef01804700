//! AI productivity dashboard - GUI library.
//!
//! Holds the parts of the desktop application that do not need a window:
//! settings, navigation and form state, the shared data context, chart
//! geometry, and theme constants.

pub mod context;
pub mod plot;
pub mod settings;
pub mod state;
pub mod theme;
