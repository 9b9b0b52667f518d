// Asset Export - Tagging Project Export Tool
// Copyright (c) 2025 Asset Export Contributors
// Licensed under the MIT License

//! # Asset Export - Tagging Project Export
//!
//! Asset Export turns an image/video tagging project into a single JSON
//! artifact for downstream object-detection training pipelines.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Selecting** project assets by lifecycle state (all, visited, tagged)
//! - **Loading** every selected asset's annotation metadata concurrently
//! - **Assembling** an export document from the project and its metadata
//! - **Persisting** the document as `file.json` in a format-specific container
//! - **Rendering** palettised segmentation masks from an exported document
//!
//! ## Architecture
//!
//! Asset Export follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (filtering, loading, assembly, providers)
//! - [`adapters`] - External integrations (storage, metadata loading)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asset_export::adapters::metadata::StorageMetadataLoader;
//! use asset_export::adapters::storage::LocalFileSystemStorage;
//! use asset_export::core::export::{
//!     AssetStateFilter, ExportProvider, ExportResources, TfPascalVocExportOptions,
//!     TfPascalVocJsonExportProvider,
//! };
//! use asset_export::domain::Project;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let project = Arc::new(Project::from_file("my-project.vott").await?);
//!     let storage = Arc::new(LocalFileSystemStorage::new("/data/my-project"));
//!     let loader = Arc::new(StorageMetadataLoader::new(storage.clone(), "2.1.0"));
//!
//!     let provider = TfPascalVocJsonExportProvider::new(
//!         ExportResources::new(project, storage, loader),
//!         Some(TfPascalVocExportOptions::new(AssetStateFilter::Visited)),
//!     )?;
//!     provider.export().await?;
//!
//!     println!("Exported to {}", provider.export_path());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type
//! [`domain::ExportError`] distinguishes bad arguments, unknown filter
//! states, metadata load failures and storage failures:
//!
//! ```rust,no_run
//! use asset_export::core::export::AssetStateFilter;
//! use asset_export::domain::ExportError;
//!
//! let err = "archived".parse::<AssetStateFilter>().unwrap_err();
//! assert!(matches!(err, ExportError::InvalidState(_)));
//! ```
//!
//! ## Logging
//!
//! Asset Export uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::info;
//!
//! info!(project = "My Project", assets = 42, "Starting export");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
