//! Rendering of column summaries into report rows.

use normstat_common::{format_compact, format_fixed, format_float, format_truncated};
use normstat_model::{ColumnSummary, Frequency, ReportRow};

pub const MEAN_AND_STD_DEV: &str = "Mean and Std Dev";
pub const MEDIAN_AND_MIN_MAX: &str = "Median and Min-Max";
pub const NOT_APPLICABLE: &str = "Not Applicable";
pub const COUNTS_AND_PERCENTAGES: &str = "Counts and Percentages";

/// Builds the report row for a summarized column.
pub fn report_row(column_name: &str, summary: &ColumnSummary) -> ReportRow {
    let (assumed_measure, measure_values) = match summary {
        ColumnSummary::Normal { mean, std_dev, .. } => (
            MEAN_AND_STD_DEV.to_string(),
            format!(
                "Mean={}, Std Dev={}",
                format_fixed(*mean, 2),
                format_fixed(*std_dev, 2)
            ),
        ),
        ColumnSummary::NotNormal {
            median, min, max, ..
        } => (
            MEDIAN_AND_MIN_MAX.to_string(),
            format!(
                "Median={}, Min-Max=({}, {})",
                format_float(*median),
                format_compact(*min),
                format_compact(*max)
            ),
        ),
        // The failure text takes the place of the measure name.
        ColumnSummary::TestFailed { message } => (message.clone(), String::new()),
        ColumnSummary::InsufficientData { .. } => (NOT_APPLICABLE.to_string(), String::new()),
        ColumnSummary::Categorical {
            observations,
            frequencies,
        } => (
            COUNTS_AND_PERCENTAGES.to_string(),
            render_frequencies(*observations, frequencies),
        ),
        ColumnSummary::Text => (String::new(), String::new()),
    };

    ReportRow {
        column_name: column_name.to_string(),
        type_label: summary.type_label(),
        assumed_measure,
        measure_values,
    }
}

fn render_frequencies(observations: usize, frequencies: &[Frequency]) -> String {
    if observations == 0 {
        return String::new();
    }
    frequencies
        .iter()
        .map(|frequency| {
            let percent = frequency.count as f64 / observations as f64 * 100.0;
            format!(
                "{} values: n={} (%{})",
                format_truncated(frequency.value),
                frequency.count,
                format_fixed(percent, 2)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use normstat_model::{NormalityTest, TypeLabel};

    const TEST: NormalityTest = NormalityTest {
        statistic: 0.97,
        p_value: 0.87,
    };

    #[test]
    fn normal_rounds_to_two_decimals() {
        let row = report_row(
            "Age",
            &ColumnSummary::Normal {
                mean: 27.0,
                std_dev: 11f64.sqrt(),
                test: TEST,
            },
        );
        assert_eq!(row.type_label, TypeLabel::Normal);
        assert_eq!(row.assumed_measure, "Mean and Std Dev");
        assert_eq!(row.measure_values, "Mean=27.00, Std Dev=3.32");
    }

    #[test]
    fn not_normal_keeps_unrounded_values() {
        let row = report_row(
            "Height",
            &ColumnSummary::NotNormal {
                median: 162.0,
                min: 148.0,
                max: 236.5,
                test: TEST,
            },
        );
        assert_eq!(row.measure_values, "Median=162.0, Min-Max=(148, 236.5)");
    }

    #[test]
    fn not_normal_uses_exponents_for_extreme_magnitudes() {
        let row = report_row(
            "Titer",
            &ColumnSummary::NotNormal {
                median: 6e-7,
                min: 1.0,
                max: 1e20,
                test: TEST,
            },
        );
        assert_eq!(row.measure_values, "Median=6e-07, Min-Max=(1, 1e+20)");
    }

    #[test]
    fn failed_test_message_is_the_measure() {
        let row = report_row(
            "Weight",
            &ColumnSummary::TestFailed {
                message: "data contains non-finite values".to_string(),
            },
        );
        assert_eq!(row.type_label, TypeLabel::ErrorInTest);
        assert_eq!(row.assumed_measure, "data contains non-finite values");
        assert_eq!(row.measure_values, "");
    }

    #[test]
    fn categorical_truncates_values_and_formats_percentages() {
        let row = report_row(
            "Dose",
            &ColumnSummary::Categorical {
                observations: 3,
                frequencies: vec![
                    Frequency {
                        value: 2.5,
                        count: 2,
                    },
                    Frequency {
                        value: 7.0,
                        count: 1,
                    },
                ],
            },
        );
        assert_eq!(
            row.measure_values,
            "2 values: n=2 (%66.67), 7 values: n=1 (%33.33)"
        );
    }

    #[test]
    fn empty_categorical_and_text_render_blank() {
        let empty = report_row(
            "Blank",
            &ColumnSummary::Categorical {
                observations: 0,
                frequencies: Vec::new(),
            },
        );
        assert_eq!(empty.assumed_measure, "Counts and Percentages");
        assert_eq!(empty.measure_values, "");

        let text = report_row("Notes", &ColumnSummary::Text);
        assert_eq!(text.fields(), ["Notes", "String type data content", "", ""]);
    }
}
