//! Worksheet ingestion utilities.
//!
//! This crate locates the sheets of a workbook source and loads one of them
//! into a typed [`Dataset`](normstat_model::Dataset).
//!
//! # Features
//!
//! - **Sheet Discovery**: a `.csv` file is a one-sheet workbook, a directory
//!   of `.csv` files is a workbook whose sheets are the files
//! - **CSV Loading**: read through Polars with every column as text, then type
//!   each cell once as number, text, or missing
//! - **Validation**: header, encoding, and size checks before parsing
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use normstat_ingest::{DatasetSource, Workbook};
//!
//! let workbook = Workbook::open(Path::new("data/survey"))?;
//! let sheets = workbook.sheet_names()?;
//! let dataset = workbook.load_sheet(&sheets[0])?;
//! ```

mod csv;
mod discovery;
mod error;
mod options;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{
    check_file_size_with_limit, dataframe_to_dataset, normalize_header, read_csv_frame,
    read_csv_headers, read_csv_sheet, validate_encoding, validate_headers,
};

// === Sheet Discovery ===
pub use discovery::{Sheet, discover_sheets, list_csv_files};

// === Options ===
pub use options::{IngestOptions, MAX_CSV_FILE_SIZE};

// === Workbook ===
pub use workbook::{DatasetSource, Workbook};
