//! Polars AnyValue conversion into typed cells.
//!
//! This module converts Polars `AnyValue` cells into the typed [`CellValue`]
//! model. Typing happens once, at load time, so later stages never inspect
//! raw strings again.

use normstat_model::CellValue;
use polars::prelude::AnyValue;

/// Cell contents treated as missing by default.
///
/// Matches the markers spreadsheet and data-frame tools commonly read as
/// "not available".
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parses a string as f64, returning None for invalid or empty strings.
///
/// # Examples
///
/// ```
/// use normstat_common::parse_f64;
///
/// assert_eq!(parse_f64(" 1.5 "), Some(1.5));
/// assert_eq!(parse_f64("1e3"), Some(1000.0));
/// assert_eq!(parse_f64("abc"), None);
/// assert_eq!(parse_f64(""), None);
/// ```
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Types a raw text cell: missing marker, number, or text.
///
/// # Examples
///
/// ```
/// use normstat_common::{DEFAULT_MISSING_MARKERS, parse_cell};
/// use normstat_model::CellValue;
///
/// assert_eq!(parse_cell("42", DEFAULT_MISSING_MARKERS), CellValue::Number(42.0));
/// assert_eq!(parse_cell("NA", DEFAULT_MISSING_MARKERS), CellValue::Missing);
/// assert_eq!(parse_cell("ok", DEFAULT_MISSING_MARKERS), CellValue::Text("ok".to_string()));
/// ```
pub fn parse_cell<S: AsRef<str>>(raw: &str, missing_markers: &[S]) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty()
        || missing_markers
            .iter()
            .any(|marker| marker.as_ref() == trimmed)
    {
        return CellValue::Missing;
    }
    match parse_f64(trimmed) {
        Some(number) if number.is_nan() => CellValue::Missing,
        Some(number) => CellValue::Number(number),
        None => CellValue::Text(trimmed.to_string()),
    }
}

/// Converts a Polars `AnyValue` into a typed cell.
///
/// Numeric dtypes become numbers directly, strings go through [`parse_cell`],
/// and `Null` is missing. Any other dtype is kept as its text rendering.
pub fn any_to_cell<S: AsRef<str>>(value: AnyValue<'_>, missing_markers: &[S]) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => float_cell(f64::from(v)),
        AnyValue::Float64(v) => float_cell(v),
        AnyValue::String(s) => parse_cell(s, missing_markers),
        AnyValue::StringOwned(s) => parse_cell(s.as_str(), missing_markers),
        other => parse_cell(&other.to_string(), missing_markers),
    }
}

fn float_cell(value: f64) -> CellValue {
    if value.is_nan() {
        CellValue::Missing
    } else {
        CellValue::Number(value)
    }
}
