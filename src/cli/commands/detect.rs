//! Detect command implementation
//!
//! Classifies every column header of a CSV file and prints the result.

use super::load_app_config;
use crate::adapters::csv::read_record;
use crate::masking::MaskingEngine;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// CSV file to inspect
    pub file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file.display(), "Detecting column categories");

        let config = match load_app_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

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

        let report = engine.classify_columns(&record.headers());

        if self.json {
            println!("{}", report.format_json()?);
        } else {
            println!("{}", report.format_console());
        }

        Ok(0)
    }
}
