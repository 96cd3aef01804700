//! Command-line surface for the AI productivity dashboard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
