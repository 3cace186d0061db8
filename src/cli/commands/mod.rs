//! CLI command implementations
//!
//! Every command returns a process exit code: 0 success, 2 configuration
//! error, 3 input error, 5 fatal error.

pub mod detect;
pub mod init;
pub mod mask;
pub mod validate;

use super::DEFAULT_CONFIG_PATH;
use crate::config::{load_config, load_config_or_default, AppConfig};
use crate::domain::Result;
use std::path::Path;

/// Load the explicitly given config, or the default path if it exists
pub fn load_app_config(config_path: Option<&Path>) -> Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
}

/// Display name of the config source for user messages
pub(crate) fn config_source(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
        None => "built-in defaults".to_string(),
    }
}
