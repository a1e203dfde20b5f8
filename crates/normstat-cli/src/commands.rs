use anyhow::{Context, Result};
use tracing::info_span;

use normstat_cli::pipeline::{RunOutcome, run_analysis};
use normstat_cli::prompt::Prompter;
use normstat_ingest::{DatasetSource, Workbook};

use crate::cli::{AnalyzeArgs, SheetsArgs};
use crate::types::SheetInfo;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<RunOutcome> {
    let workbook = info_span!("ingest", source = %args.source.display())
        .in_scope(|| Workbook::open(&args.source))
        .with_context(|| format!("open {}", args.source.display()))?;

    let mut prompter = Prompter::stdio(args.sheet.clone(), args.output.clone());
    run_analysis(&workbook, &mut prompter, args.format.map(Into::into))
}

pub fn run_sheets(args: &SheetsArgs) -> Result<Vec<SheetInfo>> {
    let _ingest = info_span!("ingest", source = %args.source.display()).entered();
    let workbook =
        Workbook::open(&args.source).with_context(|| format!("open {}", args.source.display()))?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names()? {
        let dataset = workbook
            .load_sheet(&name)
            .with_context(|| format!("load sheet {name}"))?;
        sheets.push(SheetInfo {
            columns: dataset.column_count(),
            rows: dataset.row_count(),
            name,
        });
    }
    Ok(sheets)
}
