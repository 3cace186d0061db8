//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which loads the
//! configuration, builds the masking engine from it and prints a summary.

use super::{config_source, load_app_config};
use crate::masking::MaskingEngine;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let source = config_source(config_path);
        tracing::info!(config = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_app_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded and validated");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        // Building the engine also loads the keyword library
        let engine = match MaskingEngine::new(config.masking.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Masking engine could not be initialized");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        let masking = engine.config();
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Mask Character: {}", masking.mask_char);
        println!("  Fuzzy Threshold: {}", masking.fuzzy_threshold);
        println!("  Generic Policy: {:?}", masking.generic_policy);
        println!(
            "  Keyword Library: {}",
            masking
                .keyword_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!(
            "  Seed: {}",
            masking
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string())
        );
        println!("  Concurrent: {}", masking.concurrent);
        if masking.audit.enabled {
            println!("  Audit Log: {}", masking.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();

        Ok(0)
    }
}
