#![deny(unsafe_code)]

use std::collections::BTreeSet;

use crate::error::{ModelError, Result};

/// A single worksheet cell, typed once when the sheet is loaded.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a numeric column; `None` entries become missing cells.
    pub fn from_numbers(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let cells = values
            .iter()
            .map(|value| match value {
                Some(number) => CellValue::Number(*number),
                None => CellValue::Missing,
            })
            .collect();
        Self::new(name, cells)
    }

    /// Builds a text column; `None` entries become missing cells.
    pub fn from_texts(name: impl Into<String>, values: &[Option<&str>]) -> Self {
        let cells = values
            .iter()
            .map(|value| match value {
                Some(text) => CellValue::Text((*text).to_string()),
                None => CellValue::Missing,
            })
            .collect();
        Self::new(name, cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when no cell of the full column holds text.
    ///
    /// A column with only missing cells counts as numeric.
    pub fn is_numeric(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|cell| matches!(cell, CellValue::Text(_)))
    }

    /// Non-missing cells, in column order.
    pub fn observations(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().filter(|cell| !cell.is_missing())
    }

    /// Numeric observations, in column order. Text cells are skipped.
    pub fn numeric_observations(&self) -> Vec<f64> {
        self.cells.iter().filter_map(CellValue::as_number).collect()
    }

    pub fn observation_count(&self) -> usize {
        self.observations().count()
    }
}

/// One worksheet: ordered, uniquely named, equal-length columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub name: String,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(ragged) = columns.iter().find(|column| column.len() != expected) {
                return Err(ModelError::RaggedColumn {
                    column: ragged.name.clone(),
                    expected,
                    actual: ragged.len(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns a copy without the named column. Matching is case-sensitive.
    pub fn without_column(&self, name: &str) -> Dataset {
        Dataset {
            name: self.name.clone(),
            columns: self
                .columns
                .iter()
                .filter(|column| column.name != name)
                .cloned()
                .collect(),
        }
    }
}
