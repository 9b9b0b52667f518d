//! External system integrations for asset-export.
//!
//! - [`storage`] - Storage abstraction (trait-based) and the local file system backend
//! - [`metadata`] - Asset metadata loading
//!
//! # Design Pattern
//!
//! Adapters isolate external collaborators behind traits so the exporter can
//! be driven by any backend and tested with mock implementations.
//!
//! ```rust,no_run
//! use asset_export::adapters::metadata::StorageMetadataLoader;
//! use asset_export::adapters::storage::{LocalFileSystemStorage, StorageProvider};
//! use std::sync::Arc;
//!
//! let storage: Arc<dyn StorageProvider + Send + Sync> =
//!     Arc::new(LocalFileSystemStorage::new("/data/my-project"));
//! let loader = StorageMetadataLoader::new(storage.clone(), env!("CARGO_PKG_VERSION"));
//! ```

pub mod metadata;
pub mod storage;
