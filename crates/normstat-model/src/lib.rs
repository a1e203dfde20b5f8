pub mod error;
pub mod report;
pub mod table;

pub use error::{ModelError, Result};
pub use report::{
    ColumnSummary, Frequency, NormalityTest, OutputFormat, REPORT_HEADERS, ReportRow,
    ReportTable, TypeLabel,
};
pub use table::{CellValue, Column, Dataset};
