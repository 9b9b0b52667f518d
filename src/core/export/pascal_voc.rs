//! TensorFlow Pascal VOC JSON export provider
//!
//! Writes a single JSON file holding the project and the metadata of every
//! asset selected by the configured [`AssetStateFilter`].

use crate::adapters::storage::StorageProvider;
use crate::core::export::batch::MetadataBatch;
use crate::core::export::document::ExportDocument;
use crate::core::export::filter::AssetStateFilter;
use crate::core::export::provider::{ExportContext, ExportProvider, ExportResources};
use crate::domain::{Asset, Project, Result};
use crate::{log_export_complete, log_export_start};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Format tag used in the destination container name
pub const TF_PASCAL_VOC_FORMAT_TAG: &str = "TFPascalVoc";

/// Options of the TensorFlow Pascal VOC export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfPascalVocExportOptions {
    /// Which assets to include
    pub asset_state: AssetStateFilter,
}

impl TfPascalVocExportOptions {
    pub fn new(asset_state: AssetStateFilter) -> Self {
        Self { asset_state }
    }
}

/// TensorFlow Pascal VOC JSON export provider
pub struct TfPascalVocJsonExportProvider {
    context: ExportContext<TfPascalVocExportOptions>,
}

impl TfPascalVocJsonExportProvider {
    /// Create the provider
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidArgument` if `options` is `None`.
    pub fn new(
        resources: ExportResources,
        options: Option<TfPascalVocExportOptions>,
    ) -> Result<Self> {
        Ok(Self {
            context: ExportContext::new(resources, options)?,
        })
    }

    pub fn options(&self) -> &TfPascalVocExportOptions {
        self.context.options()
    }

    /// Assets passing the configured filter
    pub fn selected_assets(&self) -> Vec<Asset> {
        let filter = self.context.options().asset_state;
        self.context
            .project()
            .assets
            .values()
            .filter(|asset| filter.matches(asset.state))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ExportProvider for TfPascalVocJsonExportProvider {
    fn format_tag(&self) -> &'static str {
        TF_PASCAL_VOC_FORMAT_TAG
    }

    fn project(&self) -> &Project {
        self.context.project()
    }

    fn storage(&self) -> &dyn StorageProvider {
        &**self.context.storage()
    }

    async fn export(&self) -> Result<()> {
        let start_time = Instant::now();
        let project = self.context.project();
        log_export_start!(&project.name, TF_PASCAL_VOC_FORMAT_TAG);

        let selected = self.selected_assets();
        tracing::debug!(
            asset_state = %self.context.options().asset_state,
            selected = selected.len(),
            total = project.assets.len(),
            "Filtered project assets"
        );

        let metadata = MetadataBatch::new(Arc::clone(self.context.loader()))
            .load_all(selected)
            .await?;

        let document = ExportDocument::new(project, metadata);
        let exported = document.assets().len();
        let json = document.to_json_pretty()?;

        let container = self.container_name();
        self.storage().create_container(&container).await?;

        let path = self.export_path();
        self.storage().write_text(&path, &json).await?;

        tracing::info!(
            path = %path,
            storage = %self.storage().provider_type(),
            "Export written"
        );
        log_export_complete!(exported, start_time.elapsed());
        Ok(())
    }
}
