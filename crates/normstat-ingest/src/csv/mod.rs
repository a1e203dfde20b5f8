//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_header, validate_headers};
pub use reader::{
    check_file_size_with_limit, dataframe_to_dataset, read_csv_frame, read_csv_headers,
    read_csv_sheet, validate_encoding,
};
