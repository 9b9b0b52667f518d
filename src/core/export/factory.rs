//! Export provider factory
//!
//! This module maps a configured export format to its provider implementation.

use crate::core::export::filter::AssetStateFilter;
use crate::core::export::pascal_voc::{TfPascalVocExportOptions, TfPascalVocJsonExportProvider};
use crate::core::export::provider::{ExportProvider, ExportResources};
use crate::domain::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Single JSON file with project and asset metadata for TensorFlow Pascal VOC tooling
    #[serde(rename = "tensorFlowPascalVoc")]
    TensorFlowPascalVoc,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::TensorFlowPascalVoc => "tensorFlowPascalVoc",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tensorflowpascalvoc" | "tfpascalvoc" => Ok(ExportFormat::TensorFlowPascalVoc),
            _ => Err(ExportError::InvalidArgument(format!(
                "Unknown export format '{s}'. Supported: tensorFlowPascalVoc"
            ))),
        }
    }
}

/// Create the export provider for `format`
///
/// # Arguments
///
/// * `format` - Export format to produce
/// * `resources` - Project and collaborators
/// * `asset_state` - Asset state filter; `None` is rejected by the provider
///
/// # Errors
///
/// Returns `ExportError::InvalidArgument` if the provider cannot be built.
pub fn create_export_provider(
    format: ExportFormat,
    resources: ExportResources,
    asset_state: Option<AssetStateFilter>,
) -> Result<Box<dyn ExportProvider>> {
    match format {
        ExportFormat::TensorFlowPascalVoc => {
            tracing::debug!(format = %format, "Creating export provider");
            let options = asset_state.map(TfPascalVocExportOptions::new);
            let provider = TfPascalVocJsonExportProvider::new(resources, options)?;
            Ok(Box::new(provider) as Box<dyn ExportProvider>)
        }
    }
}
