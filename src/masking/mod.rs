//! Column-aware masking for tabular records
//!
//! This module classifies column headers into PII categories and replaces
//! the values of selected columns with masked, pseudonymized or synthetic
//! substitutes that keep the original shape.
//!
//! # Architecture
//!
//! The masking pipeline consists of:
//! - **Classification**: keyword containment and fuzzy matching of headers,
//!   tested in a fixed category priority order
//! - **Maskers**: pure shape-preserving transforms (partial text, email,
//!   phone, credit card, address, dates, numeric buckets)
//! - **Generators**: synthetic names, addresses, IDs, dates and numbers
//! - **Pseudonyms**: stable per-run labels for gender, religion and race
//! - **Audit**: one log entry per run with hashed original values
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabmask::masking::{MaskingConfig, MaskingEngine};
//!
//! let engine = MaskingEngine::new(MaskingConfig::default())?;
//! let report = engine.classify_columns(&record.headers());
//! let outcome = engine.apply_masking(&record, &selected)?;
//! ```

pub mod audit;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod generators;
pub mod maskers;
pub mod models;
pub mod pseudonym;
pub mod report;

// Re-export main types
pub use classifier::ColumnClassifier;
pub use config::{GenericPolicy, MaskingConfig};
pub use engine::MaskingEngine;
pub use models::{Classification, MatchMethod, PiiCategory};
pub use pseudonym::PseudonymRegistry;
pub use report::{DetectionReport, MaskingOutcome, MaskingSummary};
