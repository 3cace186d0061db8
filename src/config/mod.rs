//! Configuration management for Tabmask.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Tabmask uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TABMASK_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`MaskingConfig`] - Masking engine settings, including the audit trail
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [masking]
//! mask_char = "*"
//! fuzzy_threshold = 80
//! generic_policy = "placeholder"
//! seed = 42
//!
//! [masking.audit]
//! enabled = true
//! log_path = "./audit/masking.log"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::masking::config::{AuditConfig, GenericPolicy, MaskingConfig};
pub use loader::{load_config, load_config_or_default};
pub use schema::{AppConfig, ApplicationConfig, LoggingConfig};
