//! Analysis run with explicit stages.
//!
//! 1. **Select input**: pick a sheet of the source and load it
//! 2. **Select output**: pick the report destination
//! 3. **Analyze**: classify and summarize every column
//! 4. **Persist**: write the report
//!
//! Declining either selection ends the run quietly with nothing written.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use normstat_core::analyze;
use normstat_ingest::DatasetSource;
use normstat_model::{Dataset, OutputFormat, ReportTable};
use normstat_report::{FileSink, ReportSink};

/// Chooses which sheet to analyze.
pub trait SheetSelector {
    /// Returns `None` when the user declines to choose.
    fn select_sheet(&mut self, sheets: &[String]) -> Option<String>;
}

/// Chooses where the report is saved.
pub trait DestinationSelector {
    /// Returns `None` when the user declines to choose.
    fn select_destination(&mut self) -> Option<PathBuf>;
}

/// A completed run.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub sheet: String,
    pub destination: PathBuf,
    pub format: OutputFormat,
    pub report: ReportTable,
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    Cancelled,
    Completed(AnalysisRun),
}

// ============================================================================
// Stage 1: Select input
// ============================================================================

/// Picks a sheet and loads it. `Ok(None)` means the selection was declined.
pub fn load_input(
    source: &dyn DatasetSource,
    selector: &mut dyn SheetSelector,
) -> Result<Option<Dataset>> {
    let sheets = source.sheet_names().context("list sheets")?;
    let Some(sheet) = selector.select_sheet(&sheets) else {
        info!("no sheet selected");
        return Ok(None);
    };
    let dataset = source
        .load_sheet(&sheet)
        .with_context(|| format!("load sheet {sheet}"))?;
    info!(
        sheet = %dataset.name,
        columns = dataset.column_count(),
        rows = dataset.row_count(),
        "sheet loaded"
    );
    Ok(Some(dataset))
}

// ============================================================================
// Stage 2: Select output
// ============================================================================

/// Resolves the destination path and report format.
///
/// An explicit format wins; otherwise the extension decides. A destination
/// without an extension gets the format's one.
pub fn resolve_destination(path: &Path, format: Option<OutputFormat>) -> (PathBuf, OutputFormat) {
    let extension = path.extension().and_then(|ext| ext.to_str());
    let format = format.unwrap_or_else(|| OutputFormat::from_extension(extension));
    let mut destination = path.to_path_buf();
    if extension.is_none() {
        destination.set_extension(format.extension());
    }
    (destination, format)
}

// ============================================================================
// Stages 3-4: Analyze and persist
// ============================================================================

/// Analyzes the dataset and hands the report to the sink.
pub fn analyze_and_persist(dataset: &Dataset, sink: &mut dyn ReportSink) -> Result<ReportTable> {
    let report = analyze(dataset);
    sink.write_report(&report).context("write report")?;
    Ok(report)
}

/// Runs the whole analysis against a file destination.
///
/// `selector` answers both the sheet and the destination question.
pub fn run_analysis<S>(
    source: &dyn DatasetSource,
    selector: &mut S,
    format: Option<OutputFormat>,
) -> Result<RunOutcome>
where
    S: SheetSelector + DestinationSelector,
{
    let Some(dataset) = load_input(source, selector)? else {
        return Ok(RunOutcome::Cancelled);
    };
    let Some(requested) = selector.select_destination() else {
        info!("no destination selected");
        return Ok(RunOutcome::Cancelled);
    };
    let (destination, format) = resolve_destination(&requested, format);

    let span = info_span!("persist", destination = %destination.display());
    let _guard = span.enter();
    let mut sink = FileSink::new(&destination).with_format(format);
    let report = analyze_and_persist(&dataset, &mut sink)
        .with_context(|| format!("save report to {}", destination.display()))?;

    Ok(RunOutcome::Completed(AnalysisRun {
        sheet: dataset.name,
        destination,
        format,
        report,
    }))
}
