//! Configuration management for asset-export.
//!
//! Configuration is read from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ASSET_EXPORT_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [project]
//! path = "${PROJECT_ROOT}/my-project.vott"
//!
//! [storage]
//! provider_type = "localFileSystem"
//! path = "${PROJECT_ROOT}"
//!
//! [export]
//! format = "tensorFlowPascalVoc"
//! asset_state = "visited"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use asset_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("asset-export.toml")?;
//! println!("Exporting {}", config.project.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, ENV_PREFIX};
pub use schema::{
    AppConfig, ApplicationConfig, ExportConfig, LoggingConfig, ProjectConfig, StorageConfig,
    StorageTarget,
};
