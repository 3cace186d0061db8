//! Init command implementation
//!
//! This module implements the `init` command for generating a commented
//! default configuration file.

use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Tabmask configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: tabmask validate-config");
                println!("  3. Inspect a file: tabmask detect data.csv");
                println!("  4. Mask it: tabmask mask data.csv --columns Name,Email");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Commented configuration with every setting at its default
    pub fn generate_config() -> String {
        r##"# Tabmask Configuration File
# Column-aware masking for tabular data
#
# Every setting below shows its default. Values may reference environment
# variables with ${VAR_NAME}; any setting can also be overridden with
# TABMASK_<SECTION>_<KEY>, e.g. TABMASK_MASKING_SEED=42.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[masking]
# Character that replaces hidden characters
mask_char = "*"

# Fuzzy header matching threshold (0-100). A keyword must score strictly
# above it to match.
fuzzy_threshold = 80

# Unclassified columns: "placeholder" writes generic_placeholder into text
# cells and zero into numbers; "synthetic" writes a random word or number.
generic_policy = "placeholder"
generic_placeholder = "MASKED"

# Fixed seed for reproducible runs (random when unset)
# seed = 42

# Keyword library replacing the built-in one
# keyword_library = "./keywords.toml"

# Mask selected columns in parallel
concurrent = false

[masking.audit]
# Append one entry per masking run; original values are stored as SHA-256
enabled = false
log_path = "./audit/masking.log"
json_format = true

[logging]
# JSON log files with rotation (console logging is always on)
local_enabled = false
local_path = "./logs"
# Rotation: daily, hourly, never
local_rotation = "daily"
"##
        .to_string()
    }
}
