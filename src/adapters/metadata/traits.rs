//! Asset metadata loader trait

use crate::domain::{Asset, AssetMetadata, Result};
use async_trait::async_trait;

/// Loads the full metadata record of an asset
///
/// Loads for distinct assets are independent and may run concurrently.
#[async_trait]
pub trait AssetMetadataLoader: Send + Sync {
    /// Load the metadata record for `asset`
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MetadataLoad` if the record cannot be produced.
    async fn load_metadata(&self, asset: &Asset) -> Result<AssetMetadata>;
}
