//! Mask command implementation
//!
//! Reads a CSV file, masks the selected columns and writes the result next
//! to the input (or to `--output`).

use super::load_app_config;
use crate::adapters::csv::{ensure_csv, masked_output_path, read_record, write_record};
use crate::masking::MaskingEngine;
use clap::Args;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// CSV file to mask
    pub file: PathBuf,

    /// Comma-separated headers of the columns to mask
    #[arg(long, value_delimiter = ',', required_unless_present = "all", conflicts_with = "all")]
    pub columns: Vec<String>,

    /// Mask every column
    #[arg(long)]
    pub all: bool,

    /// Output path [default: masked_<file> next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible synthetic values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mask columns in parallel
    #[arg(long)]
    pub concurrent: bool,
}

impl MaskArgs {
    /// Execute the mask command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file.display(), "Masking file");

        let mut config = match load_app_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

        if let Some(seed) = self.seed {
            config.masking.seed = Some(seed);
        }
        if self.concurrent {
            config.masking.concurrent = true;
        }
        let concurrent = config.masking.concurrent;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| masked_output_path(&self.file));
        if let Err(e) = ensure_csv(&output) {
            eprintln!("❌ Invalid output path: {e}");
            return Ok(e.exit_code());
        }

        let engine = match MaskingEngine::new(config.masking) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ Failed to initialize masking engine: {e:#}");
                return Ok(2);
            }
        };

        let record = match read_record(&self.file) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("❌ Failed to read {}: {e}", self.file.display());
                return Ok(e.exit_code());
            }
        };

        let selected = self.selected_columns(&record.headers());

        let outcome = if concurrent {
            Arc::new(engine)
                .apply_masking_concurrent(record, selected)
                .await?
        } else {
            engine.apply_masking(&record, &selected)?
        };

        if let Err(e) = write_record(&output, &outcome.record) {
            eprintln!("❌ Failed to write {}: {e}", output.display());
            return Ok(e.exit_code());
        }

        println!("{}", outcome.summary().format_console());
        println!("✅ Masked file written: {}", output.display());

        Ok(0)
    }

    fn selected_columns(&self, headers: &[&str]) -> HashSet<String> {
        if self.all {
            headers.iter().map(|h| h.to_string()).collect()
        } else {
            self.columns
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect()
        }
    }
}
