//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tabmask using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "tabmask.toml";

/// Tabmask - column-aware masking for tabular data
#[derive(Parser, Debug)]
#[command(name = "tabmask")]
#[command(version, about, long_about = None)]
#[command(author = "Tabmask Contributors")]
pub struct Cli {
    /// Path to configuration file [default: tabmask.toml, optional]
    #[arg(short, long, env = "TABMASK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TABMASK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the columns of a CSV file without changing it
    Detect(commands::detect::DetectArgs),

    /// Mask selected columns of a CSV file
    Mask(commands::mask::MaskArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_detect() {
        let cli = Cli::parse_from(["tabmask", "detect", "people.csv"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.file, PathBuf::from("people.csv"));
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_mask_columns() {
        let cli = Cli::parse_from([
            "tabmask",
            "mask",
            "people.csv",
            "--columns",
            "Email,Age",
            "--seed",
            "7",
        ]);
        match cli.command {
            Commands::Mask(args) => {
                assert_eq!(args.columns, vec!["Email", "Age"]);
                assert!(!args.all);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_mask_requires_selection() {
        assert!(Cli::try_parse_from(["tabmask", "mask", "people.csv"]).is_err());
        assert!(
            Cli::try_parse_from(["tabmask", "mask", "people.csv", "--all", "--columns", "A"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["tabmask", "mask", "people.csv", "--all"]).is_ok());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["tabmask", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["tabmask", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
