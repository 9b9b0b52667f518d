//! Core business logic for asset-export.
//!
//! # Modules
//!
//! - [`export`] - Filtering, metadata loading, document assembly and providers
//! - [`masks`] - Palettised segmentation masks from an exported document
//!
//! # Export Workflow
//!
//! 1. **Filter**: Select project assets by lifecycle state
//! 2. **Load**: Fetch every selected asset's metadata concurrently
//! 3. **Assemble**: Replace the project's assets with the loaded metadata
//! 4. **Persist**: Create the destination container and write `file.json`
//!
//! # Example
//!
//! ```rust,no_run
//! use asset_export::adapters::metadata::StorageMetadataLoader;
//! use asset_export::adapters::storage::LocalFileSystemStorage;
//! use asset_export::core::export::{
//!     create_export_provider, AssetStateFilter, ExportFormat, ExportResources,
//! };
//! use asset_export::domain::Project;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Arc::new(Project::from_file("my-project.vott").await?);
//! let storage = Arc::new(LocalFileSystemStorage::new("/data/my-project"));
//! let loader = Arc::new(StorageMetadataLoader::new(storage.clone(), "2.1.0"));
//!
//! let provider = create_export_provider(
//!     ExportFormat::TensorFlowPascalVoc,
//!     ExportResources::new(project, storage, loader),
//!     Some(AssetStateFilter::Tagged),
//! )?;
//! provider.export().await?;
//! println!("Wrote {}", provider.export_path());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod masks;
