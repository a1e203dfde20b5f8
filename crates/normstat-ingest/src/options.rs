//! Ingestion options.

use normstat_common::DEFAULT_MISSING_MARKERS;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options controlling how sheets are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Cell contents read as missing values.
    pub missing_markers: Vec<String>,
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|marker| (*marker).to_string())
                .collect(),
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    /// Replace the missing-value markers.
    #[must_use]
    pub fn with_missing_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file size limit in bytes.
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}
