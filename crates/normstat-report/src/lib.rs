//! Report output.
//!
//! Renders a [`ReportTable`](normstat_model::ReportTable) as CSV (columns
//! `Column, Type, Assumed Measure, Measure Values`) or JSON, and persists it
//! through a [`ReportSink`].

pub mod error;
mod render;
mod sink;

pub use error::{ReportError, Result};
pub use render::{render, render_csv, render_json};
pub use sink::{FileSink, ReportSink};
