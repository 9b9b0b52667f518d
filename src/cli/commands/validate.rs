//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the asset-export configuration file.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{load_config, AppConfig, StorageTarget};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        match config.validate() {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!();
                for line in summary(&config) {
                    println!("{line}");
                }
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_CONFIG_ERROR)
            }
        }
    }
}

/// Human-readable summary of a loaded configuration
fn summary(config: &AppConfig) -> Vec<String> {
    let storage = match config.storage.provider_type {
        StorageTarget::LocalFileSystem => "local file system",
    };
    let asset_state = config
        .export
        .asset_state
        .map(|s| s.to_string())
        .unwrap_or_else(|| "(not set, pass --asset-state)".to_string());

    vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.application.log_level),
        format!("  Dry Run: {}", config.application.dry_run),
        format!("  Project: {}", config.project.path),
        format!("  Storage: {} at {}", storage, config.storage.path),
        format!("  Export Format: {}", config.export.format),
        format!("  Asset State: {asset_state}"),
        format!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        ),
    ]
}
