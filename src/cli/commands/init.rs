//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "asset-export.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing asset-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point project.path at your project file");
                println!("  2. Point storage.path at the directory holding asset metadata");
                println!("  3. Choose export.asset_state: all, visited or tagged");
                println!("  4. Validate configuration: asset-export validate-config");
                println!("  5. Run export: asset-export export");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# asset-export configuration

[application]
log_level = "info"
dry_run = false

[project]
path = "project.vott"

[storage]
provider_type = "localFileSystem"
path = "./storage"

[export]
format = "tensorFlowPascalVoc"
asset_state = "tagged"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and documentation
    fn generate_config_with_examples() -> String {
        r#"# asset-export configuration
#
# Values may reference environment variables with ${VAR_NAME}. Every key can
# also be overridden with ASSET_EXPORT_<SECTION>_<KEY>, for example
# ASSET_EXPORT_EXPORT_ASSET_STATE=visited.

[application]
# trace, debug, info, warn or error
log_level = "info"
# Load and serialize everything but write nothing to storage
dry_run = false

[project]
# Project file: name, tags and the assets keyed by id
path = "${PROJECT_DIR}/project.vott"

[storage]
# Only the local file system is supported
provider_type = "localFileSystem"
# Directory holding <asset id>-asset.json files; the export container
# "<project name>-TFPascalVoc-export" is created beneath it
path = "${PROJECT_DIR}/storage"

[export]
format = "tensorFlowPascalVoc"
# all     - every asset
# visited - assets that were opened or tagged
# tagged  - assets carrying at least one tagged region
asset_state = "visited"

[logging]
# JSON log files next to the console output
local_enabled = true
local_path = "logs"
# daily, hourly or never
local_rotation = "daily"
"#
        .to_string()
    }
}
