//! Masking engine configuration

use crate::masking::maskers::DEFAULT_MASK_CHAR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default fuzzy match threshold (0-100, a keyword must score strictly above it)
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// What the generic transform writes into unclassified columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenericPolicy {
    /// `MASKED` for text, zero for numbers
    #[default]
    Placeholder,
    /// One synthetic word, a small synthetic number
    Synthetic,
}

/// Configuration for [`MaskingEngine`](crate::masking::MaskingEngine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Character that replaces hidden characters
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Default threshold for keyword sets that do not set their own
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,

    #[serde(default)]
    pub generic_policy: GenericPolicy,

    /// Text written into generic text cells under the placeholder policy
    #[serde(default = "default_generic_placeholder")]
    pub generic_placeholder: String,

    /// Seed for reproducible runs; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Keyword library replacing the built-in one
    #[serde(default)]
    pub keyword_library: Option<PathBuf>,

    /// Mask selected columns in parallel
    #[serde(default)]
    pub concurrent: bool,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_mask_char() -> char {
    DEFAULT_MASK_CHAR
}

fn default_fuzzy_threshold() -> u8 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_generic_placeholder() -> String {
    "MASKED".to_string()
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            fuzzy_threshold: default_fuzzy_threshold(),
            generic_policy: GenericPolicy::default(),
            generic_placeholder: default_generic_placeholder(),
            seed: None,
            keyword_library: None,
            concurrent: false,
            audit: AuditConfig::default(),
        }
    }
}

impl MaskingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.mask_char.is_whitespace() || self.mask_char.is_control() {
            anyhow::bail!(
                "mask_char must be a visible character, got {:?}",
                self.mask_char
            );
        }

        if self.fuzzy_threshold > 100 {
            anyhow::bail!(
                "fuzzy_threshold must be between 0 and 100, got {}",
                self.fuzzy_threshold
            );
        }

        if self.generic_placeholder.trim().is_empty() {
            anyhow::bail!("generic_placeholder cannot be empty");
        }

        if let Some(ref path) = self.keyword_library {
            if !path.exists() {
                anyhow::bail!("Keyword library file not found: {}", path.display());
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                anyhow::bail!("Keyword library must be a TOML file: {}", path.display());
            }
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply `TABMASK_MASKING_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TABMASK_MASKING_MASK_CHAR") {
            let mut chars = val.chars();
            self.mask_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => anyhow::bail!("Invalid TABMASK_MASKING_MASK_CHAR: {:?}", val),
            };
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_FUZZY_THRESHOLD") {
            self.fuzzy_threshold = val
                .parse()
                .context("Invalid TABMASK_MASKING_FUZZY_THRESHOLD value")?;
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_GENERIC_POLICY") {
            self.generic_policy = match val.to_lowercase().as_str() {
                "placeholder" => GenericPolicy::Placeholder,
                "synthetic" => GenericPolicy::Synthetic,
                _ => anyhow::bail!("Invalid TABMASK_MASKING_GENERIC_POLICY: {}", val),
            };
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_GENERIC_PLACEHOLDER") {
            self.generic_placeholder = val;
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_SEED") {
            self.seed = Some(val.parse().context("Invalid TABMASK_MASKING_SEED value")?);
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_KEYWORD_LIBRARY") {
            self.keyword_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_CONCURRENT") {
            self.concurrent = val
                .parse()
                .context("Invalid TABMASK_MASKING_CONCURRENT value")?;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/masking.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            anyhow::bail!("audit.log_path cannot be empty when audit logging is enabled");
        }
        Ok(())
    }

    /// Apply `TABMASK_MASKING_AUDIT_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TABMASK_MASKING_AUDIT_ENABLED") {
            self.enabled = val
                .parse()
                .context("Invalid TABMASK_MASKING_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("TABMASK_MASKING_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid TABMASK_MASKING_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaskingConfig::default();
        assert_eq!(config.mask_char, '*');
        assert_eq!(config.fuzzy_threshold, 80);
        assert_eq!(config.generic_policy, GenericPolicy::Placeholder);
        assert_eq!(config.generic_placeholder, "MASKED");
        assert!(config.seed.is_none());
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_mask_char() {
        let config = MaskingConfig {
            mask_char: ' ',
            ..MaskingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let config = MaskingConfig {
            fuzzy_threshold: 101,
            ..MaskingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_keyword_library() {
        let config = MaskingConfig {
            keyword_library: Some(PathBuf::from("/nonexistent/keywords.toml")),
            ..MaskingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Keyword library file not found"));
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: MaskingConfig = toml::from_str(
            r##"
mask_char = "#"
generic_policy = "synthetic"
seed = 42

[audit]
enabled = true
"##,
        )
        .unwrap();
        assert_eq!(config.mask_char, '#');
        assert_eq!(config.generic_policy, GenericPolicy::Synthetic);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.fuzzy_threshold, 80);
        assert!(config.audit.enabled);
        assert_eq!(config.audit.log_path, PathBuf::from("./audit/masking.log"));
    }
}
