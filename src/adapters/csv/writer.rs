//! [`Record`] to CSV

use super::ensure_csv;
use crate::domain::{Record, Result};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Write a record as a headered CSV file, replacing any existing file
///
/// Dates are written as ISO `YYYY-MM-DD`, missing cells as empty fields.
pub fn write_record(path: impl AsRef<Path>, record: &Record) -> Result<()> {
    let path = path.as_ref();
    ensure_csv(path)?;

    let writer = WriterBuilder::new().from_path(path)?;
    write_rows(writer, record)?;

    tracing::debug!(
        path = %path.display(),
        columns = record.column_count(),
        rows = record.row_count(),
        "Wrote CSV"
    );
    Ok(())
}

/// Write a record as headered CSV to any writer
pub fn write_record_to<W: Write>(output: W, record: &Record) -> Result<()> {
    write_rows(WriterBuilder::new().from_writer(output), record)
}

fn write_rows<W: Write>(mut writer: csv::Writer<W>, record: &Record) -> Result<()> {
    if record.column_count() == 0 {
        return Ok(());
    }

    writer.write_record(record.headers())?;
    for index in 0..record.row_count() {
        if let Some(row) = record.row(index) {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
    }
    writer.flush()?;
    Ok(())
}
