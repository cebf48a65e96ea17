//! Minimal column-oriented table used as chart input.
//!
//! A [`Dataset`] holds named columns of equal length; each column is either
//! numeric (`Option<f64>` cells) or categorical (`Option<String>` cells).
//! Missing cells are `None`. Charts never mutate a caller's dataset; every
//! derivation (row filter, coordinate transform) returns a copy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by column lookups and dataset construction.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required column is absent.
    #[error("column not found: {0}")]
    MissingColumn(String),
    /// A column exists but holds the other cell type.
    #[error("column {name} is not {expected}")]
    ColumnType {
        name: String,
        expected: &'static str,
    },
    /// An inserted column's length disagrees with the existing rows.
    #[error("column {name} has {got} rows, dataset has {expected}")]
    LengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },
    /// A row mask's length disagrees with the existing rows.
    #[error("mask has {got} entries, dataset has {expected} rows")]
    MaskLength { got: usize, expected: usize },
}

/// One named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Num(Vec<Option<f64>>),
    Cat(Vec<Option<String>>),
}

impl Column {
    fn len(&self) -> usize {
        match self {
            Column::Num(v) => v.len(),
            Column::Cat(v) => v.len(),
        }
    }

    /// String representation of one cell, `None` when missing.
    fn repr(&self, row: usize) -> Option<String> {
        match self {
            Column::Num(v) => v[row].map(|x| x.to_string()),
            Column::Cat(v) => v[row].clone(),
        }
    }

    fn filtered(&self, mask: &[bool]) -> Column {
        match self {
            Column::Num(v) => Column::Num(
                v.iter()
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(c, _)| *c)
                    .collect(),
            ),
            Column::Cat(v) => Column::Cat(
                v.iter()
                    .zip(mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(c, _)| c.clone())
                    .collect(),
            ),
        }
    }
}

/// Insertion-ordered collection of equally sized named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (zero for a dataset without columns).
    pub fn len(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Insert or replace a numeric column.
    pub fn insert_num(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Option<f64>>,
    ) -> Result<(), DatasetError> {
        self.insert(name.into(), Column::Num(cells))
    }

    /// Insert or replace a categorical column.
    pub fn insert_cat(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Option<String>>,
    ) -> Result<(), DatasetError> {
        self.insert(name.into(), Column::Cat(cells))
    }

    fn insert(&mut self, name: String, column: Column) -> Result<(), DatasetError> {
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(DatasetError::LengthMismatch {
                got: column.len(),
                expected: self.len(),
                name,
            });
        }
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = column;
        } else {
            self.columns.push((name, column));
        }
        Ok(())
    }

    fn column(&self, name: &str) -> Result<&Column, DatasetError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    /// Numeric cells of a column, or a lookup/type error.
    pub fn num(&self, name: &str) -> Result<&[Option<f64>], DatasetError> {
        match self.column(name)? {
            Column::Num(v) => Ok(v),
            Column::Cat(_) => Err(DatasetError::ColumnType {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Categorical cells of a column, or a lookup/type error.
    pub fn cat(&self, name: &str) -> Result<&[Option<String>], DatasetError> {
        match self.column(name)? {
            Column::Cat(v) => Ok(v),
            Column::Num(_) => Err(DatasetError::ColumnType {
                name: name.to_string(),
                expected: "categorical",
            }),
        }
    }

    /// Per-row string representation of a column (numeric cells formatted
    /// via `f64::to_string`); missing cells stay `None`.
    pub fn reprs(&self, name: &str) -> Result<Vec<Option<String>>, DatasetError> {
        let col = self.column(name)?;
        Ok((0..self.len()).map(|i| col.repr(i)).collect())
    }

    /// Distinct non-missing values of a column, sorted by their string
    /// representation. The sort keeps category coloring deterministic.
    pub fn categories(&self, name: &str) -> Result<Vec<String>, DatasetError> {
        let mut out: Vec<String> = self.reprs(name)?.into_iter().flatten().collect();
        out.sort();
        out.dedup();
        Ok(out)
    }

    /// Row mask selecting cells of `name` equal to `category`.
    pub fn category_mask(&self, name: &str, category: &str) -> Result<Vec<bool>, DatasetError> {
        Ok(self
            .reprs(name)?
            .into_iter()
            .map(|r| r.as_deref() == Some(category))
            .collect())
    }

    /// Copy of the dataset keeping only rows where `mask` is true.
    pub fn filter(&self, mask: &[bool]) -> Result<Dataset, DatasetError> {
        if mask.len() != self.len() {
            return Err(DatasetError::MaskLength {
                got: mask.len(),
                expected: self.len(),
            });
        }
        Ok(Dataset {
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), c.filtered(mask)))
                .collect(),
        })
    }
}
