//! CSV header parsing and validation.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Normalizes a header value by trimming whitespace and a stray BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Checks that every header is non-empty and unique.
pub fn validate_headers(headers: &[String], path: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (position, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
                position: position + 1,
            });
        }
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateColumn {
                column: header.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
