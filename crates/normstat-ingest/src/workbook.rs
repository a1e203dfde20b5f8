//! Workbook sources: the input side of an analysis run.

use std::path::{Path, PathBuf};

use normstat_model::Dataset;

use crate::csv::read_csv_sheet;
use crate::discovery::{Sheet, discover_sheets};
use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

/// Something that can list sheets and load one of them as a dataset.
pub trait DatasetSource {
    /// Sheet names in presentation order.
    fn sheet_names(&self) -> Result<Vec<String>>;

    /// Loads the named sheet.
    fn load_sheet(&self, sheet: &str) -> Result<Dataset>;
}

/// A CSV-backed workbook: one `.csv` file, or a directory of them.
#[derive(Debug, Clone)]
pub struct Workbook {
    path: PathBuf,
    sheets: Vec<Sheet>,
    options: IngestOptions,
}

impl Workbook {
    /// Opens a workbook with default ingestion options.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_options(path, IngestOptions::default())
    }

    pub fn open_with_options(path: &Path, options: IngestOptions) -> Result<Self> {
        let sheets = discover_sheets(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

impl DatasetSource for Workbook {
    fn sheet_names(&self) -> Result<Vec<String>> {
        Ok(self.sheets.iter().map(|sheet| sheet.name.clone()).collect())
    }

    fn load_sheet(&self, name: &str) -> Result<Dataset> {
        let sheet = self.sheet(name).ok_or_else(|| IngestError::SheetNotFound {
            sheet: name.to_string(),
            path: self.path.clone(),
        })?;
        let dataset = read_csv_sheet(&sheet.path, &sheet.name, &self.options)?;
        tracing::debug!(
            sheet = %sheet.name,
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "loaded sheet"
        );
        Ok(dataset)
    }
}
