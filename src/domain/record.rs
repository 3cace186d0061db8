//! Column-oriented tabular record
//!
//! A [`Record`] is what collaborators hand to the masking engine and what the
//! engine hands back. Columns are ordered and every column holds the same
//! number of rows.

use super::errors::MaskError;
use super::result::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Empty or null cell
    Missing,
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Calendar date
    Date(NaiveDate),
}

/// Shape of a cell, used for type-directed fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Missing,
    Text,
    Integer,
    Float,
    Date,
}

impl CellValue {
    /// Convenience constructor for text cells
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Missing => ValueKind::Missing,
            Self::Text(_) => ValueKind::Text,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Date(_) => ValueKind::Date,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Borrow the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell
    ///
    /// Text is accepted when it parses as a number after trimming, so a CSV
    /// column read as text still routes through numeric transforms.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) if f.is_finite() => Some(*f),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Key used for pseudonym lookup: trimmed and lower-cased for text,
    /// the display form for everything else. Missing cells have no key.
    pub fn normalized_key(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Text(s) => Some(s.trim().to_lowercase()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Header text exactly as read from the source
    pub header: String,
    /// Cells in row order
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(header: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered set of equally long columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    columns: Vec<Column>,
    row_count: usize,
}

impl Record {
    /// Build a record, checking that every column has the same row count
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Validation`] naming the first column whose length
    /// differs from the first column's.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        if let Some(bad) = columns.iter().find(|c| c.len() != row_count) {
            return Err(MaskError::Validation(format!(
                "Column '{}' has {} rows, expected {}",
                bad.header,
                bad.len(),
                row_count
            )));
        }

        Ok(Self { columns, row_count })
    }

    /// A record with no columns
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            row_count: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// First column with the given header
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.header == header)
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.column(header).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Cells of one row, in column order
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }
}
