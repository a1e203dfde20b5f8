//! Sheet-level analysis.

use normstat_model::{Column, ColumnSummary, Dataset, ReportRow, ReportTable};
use tracing::{debug, info, info_span, warn};

use crate::classify::{IDENTIFIER_COLUMN, summarize_column};
use crate::render::report_row;

/// Analyzes every column of `dataset` except the identifier column.
///
/// The identifier column is dropped from a working copy, so `dataset` itself
/// is not modified. Rows follow the dataset's column order.
pub fn analyze(dataset: &Dataset) -> ReportTable {
    let span = info_span!(
        "analyze",
        sheet = %dataset.name,
        columns = dataset.column_count(),
        rows = dataset.row_count()
    );
    let _guard = span.enter();

    let working = dataset.without_column(IDENTIFIER_COLUMN);
    if working.column_count() < dataset.column_count() {
        debug!("identifier column excluded");
    }

    let mut table = ReportTable::new(dataset.name.clone());
    for column in working.columns() {
        table.push_row(analyze_column(column));
    }

    info!(rows = table.len(), "analysis complete");
    table
}

/// Classifies and renders a single column.
pub fn analyze_column(column: &Column) -> ReportRow {
    let summary = summarize_column(column);
    match &summary {
        ColumnSummary::TestFailed { message } => {
            warn!(column = %column.name, error = %message, "normality test failed");
        }
        _ => {
            debug!(
                column = %column.name,
                label = %summary.type_label(),
                observations = column.observation_count(),
                "classified column"
            );
        }
    }
    report_row(&column.name, &summary)
}
