//! Pure report renderers.

use normstat_model::{OutputFormat, REPORT_HEADERS, ReportTable};

use crate::error::Result;

/// Renders the report as CSV with a header row and no index column.
pub fn render_csv(table: &ReportTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_HEADERS)?;
    for row in &table.rows {
        writer.write_record(row.fields())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(table: &ReportTable) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(table)?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn render(table: &ReportTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Json => render_json(table),
    }
}
