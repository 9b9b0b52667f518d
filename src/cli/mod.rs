//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for asset-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for configuration or argument errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for fatal runtime errors
pub const EXIT_FATAL: i32 = 5;

/// asset-export - tagging project export tool
#[derive(Parser, Debug)]
#[command(name = "asset-export")]
#[command(version, about, long_about = None)]
#[command(author = "Asset Export Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "asset-export.toml", env = "ASSET_EXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ASSET_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the configured project
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Generate segmentation masks from an exported annotation file
    Masks(commands::masks::MasksArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["asset-export", "export"]);
        assert_eq!(cli.config, "asset-export.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "asset-export",
            "--config",
            "custom.toml",
            "export",
            "--asset-state",
            "tagged",
            "--project",
            "p.vott",
            "--dry-run",
        ]);
        assert_eq!(cli.config, "custom.toml");
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.asset_state.as_deref(), Some("tagged"));
                assert_eq!(args.project.as_deref(), Some("p.vott"));
                assert!(args.dry_run);
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["asset-export", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["asset-export", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["asset-export", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }

    #[test]
    fn test_cli_parse_masks() {
        let cli = Cli::parse_from(["asset-export", "masks", "out/file.json", "out/masks"]);
        match cli.command {
            Commands::Masks(args) => {
                assert_eq!(args.annotation_file.to_str(), Some("out/file.json"));
                assert_eq!(args.mask_dir.to_str(), Some("out/masks"));
            }
            other => panic!("expected masks command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_masks_requires_paths() {
        assert!(Cli::try_parse_from(["asset-export", "masks", "out/file.json"]).is_err());
    }
}
