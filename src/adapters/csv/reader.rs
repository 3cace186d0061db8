//! CSV to [`Record`]

use super::ensure_csv;
use crate::domain::{CellValue, Column, Record, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

const ISO_DATE: &str = "%Y-%m-%d";

/// Read a headered CSV file
///
/// # Errors
///
/// - [`MaskError::Configuration`](crate::domain::MaskError::Configuration)
///   for a non-`.csv` path
/// - [`MaskError::Csv`](crate::domain::MaskError::Csv) when the file cannot be
///   opened or parsed
pub fn read_record(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();
    ensure_csv(path)?;

    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)?;
    let record = collect(reader)?;

    tracing::debug!(
        path = %path.display(),
        columns = record.column_count(),
        rows = record.row_count(),
        "Read CSV"
    );
    Ok(record)
}

/// Read headered CSV content from any reader
pub fn read_record_from<R: Read>(input: R) -> Result<Record> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(input);
    collect(reader)
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Record> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut values: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() > headers.len() {
            tracing::warn!(
                row = index + 1,
                fields = row.len(),
                expected = headers.len(),
                "Row has extra fields, ignoring them"
            );
        }
        for (column, cells) in values.iter_mut().enumerate() {
            cells.push(row.get(column).map(parse_cell).unwrap_or(CellValue::Missing));
        }
    }

    let columns = headers
        .into_iter()
        .zip(values)
        .map(|(header, cells)| Column::new(header, cells))
        .collect();
    Record::new(columns)
}

/// Type a raw CSV field
///
/// Empty fields are missing. A field becomes an integer, float or ISO date
/// only when that value renders back to exactly the same text, so leading
/// zeros, `+` signs and trailing decimal zeros survive as text.
pub fn parse_cell(raw: &str) -> CellValue {
    if raw.trim().is_empty() {
        return CellValue::Missing;
    }

    if let Ok(n) = raw.parse::<i64>() {
        if n.to_string() == raw {
            return CellValue::Integer(n);
        }
    }

    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() && f.to_string() == raw {
            return CellValue::Float(f);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE) {
        if date.format(ISO_DATE).to_string() == raw {
            return CellValue::Date(date);
        }
    }

    CellValue::Text(raw.to_string())
}
