// Tabmask - Column-aware tabular data masking
// Copyright (c) 2025 Tabmask Contributors
// Licensed under the MIT License

//! # Tabmask - column-aware masking for tabular data
//!
//! Tabmask anonymizes tabular records by working out what each column holds
//! from its header and replacing the values with masked, pseudonymized or
//! synthetic substitutes that keep the original shape.
//!
//! ## Overview
//!
//! This library provides:
//! - **Classifying** column headers into PII categories with keyword and
//!   fuzzy matching in a fixed priority order
//! - **Masking** values with shape-preserving transforms
//! - **Pseudonymizing** categorical values with stable per-run labels
//! - **Generating** synthetic names, addresses, IDs, dates and numbers
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`masking`] - Classification, maskers, generators and the engine
//! - [`adapters`] - File formats (CSV)
//! - [`domain`] - Records, cells and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use tabmask::adapters::csv::{masked_output_path, read_record, write_record};
//! use tabmask::masking::{MaskingConfig, MaskingEngine};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = MaskingEngine::new(MaskingConfig::default())?;
//!     let record = read_record("people.csv")?;
//!
//!     let report = engine.classify_columns(&record.headers());
//!     println!("{}", report.format_console());
//!
//!     let selected: HashSet<String> = ["Email", "Age"].iter().map(|s| s.to_string()).collect();
//!     let outcome = engine.apply_masking(&record, &selected)?;
//!     write_record(masked_output_path("people.csv"), &outcome.record)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library-level failures use [`domain::MaskError`]; the engine layer returns
//! `anyhow::Result` with context. Malformed cell values are never errors:
//! every transform passes them through unchanged.
//!
//! ## Logging
//!
//! Tabmask uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(rows = 1200, "Masking started");
//! warn!(header = "Ghost", "Selected column not found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod masking;
