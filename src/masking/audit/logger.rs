//! Audit logger for masking runs

use crate::domain::{Column, Record};
use crate::masking::report::MaskingOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator fed to the digest between cells
const CELL_SEPARATOR: &[u8] = b"\x1f";

#[derive(Debug, Serialize)]
struct AuditLogEntry {
    run_id: String,
    timestamp: String,
    rows: usize,
    processing_time_ms: u64,
    columns: Vec<AuditColumn>,
    skipped: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AuditColumn {
    header: String,
    category: String,
    rows_masked: usize,
    /// SHA-256 of the column's original cells (never log plaintext PII)
    values_hash: String,
}

/// Append-only audit trail of masking runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Record one masking run
    ///
    /// `original` is the record before masking; only digests of its selected
    /// columns reach the log.
    pub fn log_run(&self, original: &Record, outcome: &MaskingOutcome) -> Result<()> {
        let columns = outcome
            .columns
            .iter()
            .map(|result| AuditColumn {
                header: result.header.clone(),
                category: result.category.label().to_string(),
                rows_masked: result.rows_masked,
                values_hash: original
                    .column(&result.header)
                    .map(hash_column)
                    .unwrap_or_default(),
            })
            .collect();

        let entry = AuditLogEntry {
            run_id: outcome.run_id.to_string(),
            timestamp: outcome.timestamp.to_rfc3339(),
            rows: outcome.record.row_count(),
            processing_time_ms: outcome.processing_time_ms,
            columns,
            skipped: outcome.skipped.clone(),
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            let headers: Vec<&str> = entry.columns.iter().map(|c| c.header.as_str()).collect();
            writeln!(
                file,
                "[{}] Run: {} | Rows: {} | Columns: {} | Skipped: {} | Time: {}ms",
                entry.timestamp,
                entry.run_id,
                entry.rows,
                headers.join(", "),
                entry.skipped.len(),
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hex SHA-256 over a column's cells in row order
fn hash_column(column: &Column) -> String {
    let mut hasher = Sha256::new();
    for value in &column.values {
        hasher.update(value.to_string().as_bytes());
        hasher.update(CELL_SEPARATOR);
    }
    format!("{:x}", hasher.finalize())
}
