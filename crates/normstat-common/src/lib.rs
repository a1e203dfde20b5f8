//! Shared utilities for normstat crates.
//!
//! This crate provides common helpers used across the workspace: Polars
//! `AnyValue` conversion into typed cells and the number formatting used by
//! the report.

pub mod cells;
pub mod format;

// Re-export commonly used functions at crate root for convenience
pub use cells::{DEFAULT_MISSING_MARKERS, any_to_cell, parse_cell, parse_f64};
pub use format::{format_compact, format_fixed, format_float, format_truncated};
