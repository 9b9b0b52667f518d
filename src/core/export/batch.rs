//! Concurrent metadata loading
//!
//! This module loads the metadata of a batch of assets concurrently with
//! all-or-nothing semantics: either every record is returned, or the first
//! failure is.

use crate::adapters::metadata::AssetMetadataLoader;
use crate::domain::errors::MetadataError;
use crate::domain::{Asset, AssetMetadata, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

/// All-or-nothing concurrent metadata batch
///
/// Every load is spawned as its own task, so there is no ordering between
/// them and no limit on how many run at once. [`load_all`](Self::load_all)
/// returns on the first failure in completion order. Loads still in flight at
/// that point are not cancelled: they run to completion in the background and
/// their results are discarded.
pub struct MetadataBatch {
    loader: Arc<dyn AssetMetadataLoader + Send + Sync>,
}

impl MetadataBatch {
    /// Create a batch backed by `loader`
    pub fn new(loader: Arc<dyn AssetMetadataLoader + Send + Sync>) -> Self {
        Self { loader }
    }

    /// Load metadata for every asset
    ///
    /// The returned records are in completion order, not input order.
    ///
    /// # Errors
    ///
    /// Returns the first loader error encountered, unmodified. A load task
    /// that panics is reported as `MetadataError::Aborted`.
    pub async fn load_all(&self, assets: Vec<Asset>) -> Result<Vec<AssetMetadata>> {
        let total = assets.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let mut pending: FuturesUnordered<_> = assets
            .into_iter()
            .map(|asset| {
                let loader = Arc::clone(&self.loader);
                let asset_id = asset.id.clone();
                let handle = tokio::spawn(async move { loader.load_metadata(&asset).await });
                async move { (asset_id, handle.await) }
            })
            .collect();

        tracing::debug!(total, "Loading asset metadata");

        let mut loaded = Vec::with_capacity(total);
        while let Some((asset_id, joined)) = pending.next().await {
            match joined {
                Ok(Ok(metadata)) => loaded.push(metadata),
                Ok(Err(e)) => {
                    tracing::debug!(
                        asset_id = %asset_id,
                        loaded = loaded.len(),
                        abandoned = pending.len(),
                        "Metadata load failed, abandoning batch"
                    );
                    return Err(e);
                }
                Err(join_err) => {
                    return Err(MetadataError::Aborted {
                        asset_id: asset_id.into_inner(),
                        message: join_err.to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(loaded)
    }
}
