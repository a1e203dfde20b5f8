//! Column classification and descriptive statistics.
//!
//! [`analyze`] turns a [`Dataset`](normstat_model::Dataset) into a
//! [`ReportTable`](normstat_model::ReportTable): text columns are labeled,
//! numeric columns with few distinct values get frequency counts, and the rest
//! are tested for normality with [`shapiro_wilk`] and summarized accordingly.

pub mod analyze;
pub mod classify;
pub mod normality;
pub mod render;
pub mod stats;

pub use analyze::{analyze, analyze_column};
pub use classify::{
    CATEGORICAL_MAX_DISTINCT, IDENTIFIER_COLUMN, MIN_TEST_OBSERVATIONS, SIGNIFICANCE_LEVEL,
    summarize_categorical, summarize_column, summarize_continuous,
};
pub use normality::{MAX_ACCURATE_SAMPLE, NormalityError, shapiro_wilk};
pub use render::report_row;
