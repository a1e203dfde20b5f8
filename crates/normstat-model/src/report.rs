//! Report types produced by column classification.
//!
//! A [`ColumnSummary`] holds the computed statistics for one column. It is
//! turned into a [`ReportRow`] of display strings by a separate formatting
//! step, so the numbers stay testable independently of their rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Column headers of the persisted report, in order.
pub const REPORT_HEADERS: [&str; 4] = ["Column", "Type", "Assumed Measure", "Measure Values"];

/// Classification outcome for an analyzed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLabel {
    /// Continuous-like numeric column that passed the normality test.
    #[serde(rename = "Normal")]
    Normal,
    /// Continuous-like numeric column that failed the normality test.
    #[serde(rename = "Not Normal")]
    NotNormal,
    /// The normality test itself could not be computed.
    #[serde(rename = "Error in Test")]
    ErrorInTest,
    /// Too few observations to run the normality test.
    #[serde(rename = "Insufficient Data")]
    InsufficientData,
    /// Numeric column with few distinct values, summarized by frequency.
    #[serde(rename = "Categorical or Non-numeric")]
    Categorical,
    /// Column holding text; no statistics are computed.
    #[serde(rename = "String type data content")]
    Text,
}

impl TypeLabel {
    pub const ALL: [TypeLabel; 6] = [
        TypeLabel::Normal,
        TypeLabel::NotNormal,
        TypeLabel::ErrorInTest,
        TypeLabel::InsufficientData,
        TypeLabel::Categorical,
        TypeLabel::Text,
    ];

    /// Returns the label exactly as it appears in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeLabel::Normal => "Normal",
            TypeLabel::NotNormal => "Not Normal",
            TypeLabel::ErrorInTest => "Error in Test",
            TypeLabel::InsufficientData => "Insufficient Data",
            TypeLabel::Categorical => "Categorical or Non-numeric",
            TypeLabel::Text => "String type data content",
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TypeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown type label: {s}"))
    }
}

/// Outcome of a normality test on one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalityTest {
    /// Test statistic (Shapiro-Wilk W).
    pub statistic: f64,
    /// P-value under the null hypothesis of normality.
    pub p_value: f64,
}

/// Occurrence count of one distinct value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    pub value: f64,
    pub count: usize,
}

/// Computed statistics for one column, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSummary {
    Normal {
        mean: f64,
        std_dev: f64,
        test: NormalityTest,
    },
    NotNormal {
        median: f64,
        min: f64,
        max: f64,
        test: NormalityTest,
    },
    TestFailed {
        message: String,
    },
    InsufficientData {
        observations: usize,
    },
    Categorical {
        observations: usize,
        /// Sorted by descending count.
        frequencies: Vec<Frequency>,
    },
    Text,
}

impl ColumnSummary {
    pub fn type_label(&self) -> TypeLabel {
        match self {
            ColumnSummary::Normal { .. } => TypeLabel::Normal,
            ColumnSummary::NotNormal { .. } => TypeLabel::NotNormal,
            ColumnSummary::TestFailed { .. } => TypeLabel::ErrorInTest,
            ColumnSummary::InsufficientData { .. } => TypeLabel::InsufficientData,
            ColumnSummary::Categorical { .. } => TypeLabel::Categorical,
            ColumnSummary::Text => TypeLabel::Text,
        }
    }

    /// Normality test result, when the test ran successfully.
    pub fn normality_test(&self) -> Option<&NormalityTest> {
        match self {
            ColumnSummary::Normal { test, .. } | ColumnSummary::NotNormal { test, .. } => {
                Some(test)
            }
            _ => None,
        }
    }
}

/// One rendered report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub column_name: String,
    pub type_label: TypeLabel,
    pub assumed_measure: String,
    pub measure_values: String,
}

impl ReportRow {
    /// Cells in report column order.
    pub fn fields(&self) -> [&str; 4] {
        [
            self.column_name.as_str(),
            self.type_label.as_str(),
            self.assumed_measure.as_str(),
            self.measure_values.as_str(),
        ]
    }
}

/// Ordered report rows for one analyzed sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub sheet: String,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.column_name.as_str()).collect()
    }

    pub fn row(&self, column_name: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.column_name == column_name)
    }

    /// Number of rows carrying the given label.
    pub fn count_label(&self, label: TypeLabel) -> usize {
        self.rows.iter().filter(|row| row.type_label == label).count()
    }
}

/// File format of a persisted report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Infers the format from a file extension, defaulting to CSV.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}
