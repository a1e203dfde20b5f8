//! Sheet discovery for workbook sources.
//!
//! A workbook is either a single CSV file (one sheet) or a directory whose
//! CSV files are its sheets. Sheet names are file stems.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// A sheet located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name (file stem).
    pub name: String,
    /// Path to the CSV file backing the sheet.
    pub path: PathBuf,
}

impl Sheet {
    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        if is_csv_path(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Discovers the sheets of a workbook source.
pub fn discover_sheets(source: &Path) -> Result<Vec<Sheet>> {
    if source.is_dir() {
        let sheets: Vec<Sheet> = list_csv_files(source)?
            .into_iter()
            .map(Sheet::from_path)
            .collect();
        if sheets.is_empty() {
            return Err(IngestError::NoSheets {
                path: source.to_path_buf(),
            });
        }
        tracing::debug!(
            source = %source.display(),
            sheet_count = sheets.len(),
            "discovered sheets"
        );
        return Ok(sheets);
    }

    if !source.exists() {
        return Err(IngestError::FileNotFound {
            path: source.to_path_buf(),
        });
    }

    if is_csv_path(source) {
        Ok(vec![Sheet::from_path(source.to_path_buf())])
    } else {
        Err(IngestError::UnsupportedSource {
            path: source.to_path_buf(),
        })
    }
}

fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
