//! Per-column classification.
//!
//! A column is text, categorical-like numeric, or continuous-like numeric.
//! Continuous columns go through the Shapiro-Wilk test and are summarized by
//! mean/std dev or median/min-max depending on the outcome.

use normstat_model::{Column, ColumnSummary};
use tracing::warn;

use crate::normality::{MAX_ACCURATE_SAMPLE, shapiro_wilk};
use crate::stats::{distinct_count, frequencies, mean, median, min_max, sample_std_dev};

/// Row identifier column, excluded from analysis. Matched case-sensitively.
pub const IDENTIFIER_COLUMN: &str = "ID";

/// Numeric columns with at most this many distinct values are categorical.
pub const CATEGORICAL_MAX_DISTINCT: usize = 10;

/// Fewest observations for which the normality test is run.
pub const MIN_TEST_OBSERVATIONS: usize = 4;

/// A p-value strictly above this keeps the normality assumption.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Classifies one column and computes its summary statistics.
pub fn summarize_column(column: &Column) -> ColumnSummary {
    if !column.is_numeric() {
        return ColumnSummary::Text;
    }
    let observations = column.numeric_observations();
    if distinct_count(&observations) > CATEGORICAL_MAX_DISTINCT {
        summarize_continuous(&observations)
    } else {
        summarize_categorical(&observations)
    }
}

/// Summarizes a continuous-like observation set.
pub fn summarize_continuous(observations: &[f64]) -> ColumnSummary {
    let count = observations.len();
    if count < MIN_TEST_OBSERVATIONS {
        return ColumnSummary::InsufficientData {
            observations: count,
        };
    }
    if count > MAX_ACCURATE_SAMPLE {
        warn!(
            observations = count,
            "normality p-value may be inaccurate above {MAX_ACCURATE_SAMPLE} observations"
        );
    }

    let test = match shapiro_wilk(observations) {
        Ok(test) => test,
        Err(error) => {
            return ColumnSummary::TestFailed {
                message: error.to_string(),
            };
        }
    };

    if test.p_value > SIGNIFICANCE_LEVEL {
        let (Some(mean), Some(std_dev)) = (mean(observations), sample_std_dev(observations))
        else {
            return ColumnSummary::InsufficientData {
                observations: count,
            };
        };
        ColumnSummary::Normal {
            mean,
            std_dev,
            test,
        }
    } else {
        let (Some(median), Some((min, max))) = (median(observations), min_max(observations))
        else {
            return ColumnSummary::InsufficientData {
                observations: count,
            };
        };
        ColumnSummary::NotNormal {
            median,
            min,
            max,
            test,
        }
    }
}

/// Summarizes a categorical-like observation set by value counts.
pub fn summarize_categorical(observations: &[f64]) -> ColumnSummary {
    ColumnSummary::Categorical {
        observations: observations.len(),
        frequencies: frequencies(observations),
    }
}
