//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AppConfig;
use crate::domain::errors::MaskError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AppConfig
/// 4. Applies environment variable overrides (TABMASK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`MaskError::Configuration`] if the file is missing or unreadable,
/// a referenced environment variable is unset, parsing fails or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use tabmask::config::loader::load_config;
///
/// let config = load_config("tabmask.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MaskError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MaskError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: AppConfig = toml::from_str(&contents)
        .map_err(|e| MaskError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(config)
}

/// Loads configuration, falling back to defaults when `path` does not exist
///
/// Used for the implicit default config path; an explicitly requested file
/// goes through [`load_config`] so that a missing file is an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        finalize(AppConfig::default())
    }
}

fn finalize(mut config: AppConfig) -> Result<AppConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MaskError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Replace `${VAR}` references with environment values
///
/// Comment lines are left alone so commented-out examples never require
/// their variables. Every unset variable is reported at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MaskError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut missing: Vec<String> = Vec::new();

    let lines: Vec<String> = input
        .lines()
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            pattern
                .replace_all(line, |caps: &regex::Captures<'_>| {
                    std::env::var(&caps[1]).unwrap_or_else(|_| {
                        if !missing.iter().any(|m| m == &caps[1]) {
                            missing.push(caps[1].to_string());
                        }
                        caps[0].to_string()
                    })
                })
                .into_owned()
        })
        .collect();

    if !missing.is_empty() {
        return Err(MaskError::Configuration(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    Ok(lines.join("\n") + "\n")
}

/// Applies environment variable overrides using TABMASK_* prefix
///
/// Environment variables follow the pattern: TABMASK_<SECTION>_<KEY>
/// For example: TABMASK_APPLICATION_LOG_LEVEL, TABMASK_MASKING_SEED
fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    if let Ok(val) = std::env::var("TABMASK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config
        .masking
        .apply_env_overrides()
        .map_err(|e| MaskError::Configuration(format!("{e:#}")))?;

    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("TABMASK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
