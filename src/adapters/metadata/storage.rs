//! Storage-backed metadata loader
//!
//! The tagging application saves one `<asset id>-asset.json` file per asset
//! next to the project in its target storage. This loader reads those files
//! back through a [`StorageProvider`].

use crate::adapters::metadata::traits::AssetMetadataLoader;
use crate::adapters::storage::StorageProvider;
use crate::domain::errors::{ExportError, MetadataError, StorageError};
use crate::domain::{Asset, AssetMetadata, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Suffix appended to the asset id to form the metadata file name
pub const ASSET_METADATA_FILE_SUFFIX: &str = "-asset.json";

/// Metadata loader reading per-asset JSON files from a storage provider
pub struct StorageMetadataLoader {
    storage: Arc<dyn StorageProvider + Send + Sync>,
    version: String,
}

impl StorageMetadataLoader {
    /// Create a loader reading from `storage`
    ///
    /// `version` is stamped on the empty records produced for assets that
    /// have no metadata file yet.
    pub fn new(storage: Arc<dyn StorageProvider + Send + Sync>, version: impl Into<String>) -> Self {
        Self {
            storage,
            version: version.into(),
        }
    }

    /// Storage path of the metadata file for `asset`
    pub fn metadata_path(asset: &Asset) -> String {
        format!("{}{}", asset.id, ASSET_METADATA_FILE_SUFFIX)
    }
}

#[async_trait]
impl AssetMetadataLoader for StorageMetadataLoader {
    async fn load_metadata(&self, asset: &Asset) -> Result<AssetMetadata> {
        let path = Self::metadata_path(asset);

        let json = match self.storage.read_text(&path).await {
            Ok(json) => json,
            Err(ExportError::Storage(StorageError::NotFound(_))) => {
                tracing::debug!(
                    asset_id = %asset.id,
                    "No metadata file, using empty record"
                );
                return Ok(AssetMetadata::empty(asset.clone(), self.version.clone()));
            }
            Err(e) => {
                return Err(MetadataError::ReadFailed {
                    asset_id: asset.id.to_string(),
                    message: e.to_string(),
                }
                .into());
            }
        };

        let metadata: AssetMetadata =
            serde_json::from_str(&json).map_err(|e| MetadataError::InvalidFormat {
                asset_id: asset.id.to_string(),
                message: e.to_string(),
            })?;

        Ok(metadata)
    }
}
