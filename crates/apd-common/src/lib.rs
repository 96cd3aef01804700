//! Shared utilities for the dashboard crates.
//!
//! This crate provides the Polars column helpers used by ingestion, the chart
//! builders, and the command-line table printer.

pub mod frame;

pub use frame::{
    f64_values, format_decimal, format_numeric, is_numeric_dtype, numeric_columns, string_values,
};
