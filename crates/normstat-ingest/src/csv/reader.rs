//! CSV sheet reading into a typed dataset.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};

use normstat_common::any_to_cell;
use normstat_model::{Column, Dataset};

use super::header::{normalize_header, validate_headers};
use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads and validates the header row of a CSV file.
///
/// Quoted names may contain delimiters and line breaks.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(open_file(path)?));
    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = record.iter().map(normalize_header).collect();
    validate_headers(&headers, path)?;
    Ok(headers)
}

/// Reads a CSV file into a Polars DataFrame with every column as text.
///
/// Typing is deferred to [`dataframe_to_dataset`] so that missing markers and
/// mixed columns are handled the same way for every sheet.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Converts a DataFrame into a typed dataset, naming columns from `headers`.
pub fn dataframe_to_dataset(
    df: &DataFrame,
    headers: &[String],
    sheet: &str,
    options: &IngestOptions,
) -> Result<Dataset> {
    if df.width() != headers.len() {
        return Err(IngestError::DataFrame {
            message: format!(
                "sheet '{sheet}' has {} columns but {} headers",
                df.width(),
                headers.len()
            ),
        });
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (series, name) in df.get_columns().iter().zip(headers) {
        let cells = (0..df.height())
            .map(|idx| {
                let value = series.get(idx).unwrap_or(AnyValue::Null);
                any_to_cell(value, &options.missing_markers)
            })
            .collect();
        columns.push(Column::new(name.clone(), cells));
    }

    Ok(Dataset::new(sheet, columns)?)
}

/// Loads one CSV sheet as a typed dataset.
pub fn read_csv_sheet(path: &Path, sheet: &str, options: &IngestOptions) -> Result<Dataset> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;
    let headers = read_csv_headers(path)?;
    let df = read_csv_frame(path)?;

    if df.height() == 0 {
        tracing::warn!(sheet = %sheet, path = %path.display(), "sheet has no data rows");
    }
    if df.width() > 500 {
        tracing::warn!(
            sheet = %sheet,
            columns = df.width(),
            "sheet has more than 500 columns - may impact performance"
        );
    }

    dataframe_to_dataset(&df, &headers, sheet, options)
}
