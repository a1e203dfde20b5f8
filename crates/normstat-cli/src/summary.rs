use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use normstat_cli::pipeline::AnalysisRun;
use normstat_model::{REPORT_HEADERS, ReportTable, TypeLabel};

use crate::types::SheetInfo;

pub fn print_summary(run: &AnalysisRun) {
    println!("Sheet: {}", run.sheet);
    println!(
        "Report: {} ({})",
        run.destination.display(),
        run.format.extension()
    );
    println!("{}", report_table(&run.report));
    println!("{}", label_counts(&run.report));
}

pub fn print_sheets(sheets: &[SheetInfo]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Columns"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.columns),
            Cell::new(sheet.rows),
        ]);
    }
    println!("{table}");
}

fn report_table(report: &ReportTable) -> Table {
    let mut table = Table::new();
    table.set_header(REPORT_HEADERS.into_iter().map(header_cell).collect::<Vec<_>>());
    apply_summary_table_style(&mut table);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.column_name).add_attribute(Attribute::Bold),
            label_cell(row.type_label),
            text_or_dash(&row.assumed_measure),
            text_or_dash(&row.measure_values),
        ]);
    }
    table
}

fn label_counts(report: &ReportTable) -> String {
    let counts: Vec<String> = TypeLabel::ALL
        .iter()
        .map(|label| (label, report.count_label(*label)))
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| format!("{label}: {count}"))
        .collect();
    if counts.is_empty() {
        "No columns analyzed.".to_string()
    } else {
        counts.join(" | ")
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Percentage(50)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn label_cell(label: TypeLabel) -> Cell {
    let cell = Cell::new(label.as_str());
    match label {
        TypeLabel::Normal => cell.fg(Color::Green),
        TypeLabel::NotNormal => cell.fg(Color::Yellow),
        TypeLabel::ErrorInTest => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        TypeLabel::InsufficientData => cell.fg(Color::DarkYellow),
        TypeLabel::Categorical => cell.fg(Color::Blue),
        TypeLabel::Text => cell.fg(Color::DarkGrey),
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
