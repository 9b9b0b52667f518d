//! Export command implementation
//!
//! This module implements the `export` command, which writes the configured
//! project to its storage in the configured export format.

use crate::adapters::metadata::StorageMetadataLoader;
use crate::adapters::storage::{LocalFileSystemStorage, StorageProvider};
use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{load_config, AppConfig, StorageTarget};
use crate::core::export::{create_export_provider, AssetStateFilter, ExportResources};
use crate::domain::{ExportError, Project};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the asset state filter (all, visited, tagged)
    #[arg(long, value_name = "STATE")]
    pub asset_state: Option<String>,

    /// Override the project file path
    #[arg(long, value_name = "PATH")]
    pub project: Option<String>,

    /// Override the storage root
    #[arg(long, value_name = "PATH")]
    pub storage: Option<String>,

    /// Dry run mode - load and serialize without writing to storage
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        if let Err(e) = self.apply_overrides(&mut config) {
            eprintln!("{e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let dry_run = config.application.dry_run;
        if dry_run {
            println!("🔍 DRY RUN MODE - nothing will be written to storage");
        }

        let project = Arc::new(Project::from_file(&config.project.path).await?);

        let storage: Arc<dyn StorageProvider + Send + Sync> = match config.storage.provider_type {
            StorageTarget::LocalFileSystem => {
                Arc::new(LocalFileSystemStorage::new(&config.storage.path).with_dry_run(dry_run))
            }
        };
        let loader = Arc::new(StorageMetadataLoader::new(
            Arc::clone(&storage),
            env!("CARGO_PKG_VERSION"),
        ));

        let selected = config
            .export
            .asset_state
            .map(|filter| count_selected(&project, filter))
            .unwrap_or_default();

        let resources = ExportResources::new(Arc::clone(&project), storage, loader);
        let provider =
            match create_export_provider(config.export.format, resources, config.export.asset_state)
            {
                Ok(provider) => provider,
                Err(ExportError::InvalidArgument(msg)) => {
                    tracing::error!(error = %msg, "Cannot create export provider");
                    eprintln!("{msg}: set export.asset_state or pass --asset-state");
                    return Ok(EXIT_CONFIG_ERROR);
                }
                Err(e) => return Err(e.into()),
            };

        provider.export().await?;

        println!(
            "✅ Exported {} of {} asset(s) from '{}' to {}",
            selected,
            project.assets.len(),
            project.name,
            provider.export_path()
        );
        Ok(EXIT_SUCCESS)
    }

    /// Apply command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut AppConfig) -> Result<(), ExportError> {
        if let Some(state) = &self.asset_state {
            let filter: AssetStateFilter = state.parse()?;
            tracing::info!(asset_state = %filter, "Overriding asset state filter from CLI");
            config.export.asset_state = Some(filter);
        }

        if let Some(project) = &self.project {
            tracing::info!(project = %project, "Overriding project path from CLI");
            config.project.path = project.clone();
        }

        if let Some(storage) = &self.storage {
            tracing::info!(storage = %storage, "Overriding storage path from CLI");
            config.storage.path = storage.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        Ok(())
    }
}

/// Number of project assets passing `filter`
fn count_selected(project: &Project, filter: AssetStateFilter) -> usize {
    project
        .assets
        .values()
        .filter(|asset| filter.matches(asset.state))
        .count()
}
