//! Report destinations.

use std::fs;
use std::path::{Path, PathBuf};

use normstat_model::{OutputFormat, ReportTable};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::render::render;

/// Somewhere a finished report can be persisted.
pub trait ReportSink {
    fn write_report(&mut self, table: &ReportTable) -> Result<()>;
}

/// Writes the report to a file, replacing any existing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl FileSink {
    /// Creates a sink whose format follows the path's extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format =
            OutputFormat::from_extension(path.extension().and_then(|ext| ext.to_str()));
        Self { path, format }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, table: &ReportTable) -> Result<()> {
        let contents = render(table, self.format)?;
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, contents).map_err(|source| ReportError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            format = self.format.extension(),
            rows = table.len(),
            "report written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(FileSink::new("out/report.json").format, OutputFormat::Json);
        assert_eq!(FileSink::new("out/report.JSON").format, OutputFormat::Json);
        assert_eq!(FileSink::new("report.csv").format, OutputFormat::Csv);
        assert_eq!(FileSink::new("report").format, OutputFormat::Csv);
        assert_eq!(
            FileSink::new("report.csv")
                .with_format(OutputFormat::Json)
                .format,
            OutputFormat::Json
        );
    }
}
