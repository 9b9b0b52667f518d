//! Asset metadata loading
//!
//! The exporter only depends on the [`AssetMetadataLoader`] trait; the
//! storage-backed loader is the implementation used by the CLI.

pub mod storage;
pub mod traits;

pub use storage::{StorageMetadataLoader, ASSET_METADATA_FILE_SUFFIX};
pub use traits::AssetMetadataLoader;
