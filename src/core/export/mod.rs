//! Export orchestration
//!
//! This module provides the export logic for asset-export:
//! - Asset state filtering
//! - Concurrent, all-or-nothing metadata loading
//! - Export document assembly and naming
//! - The provider contract, the Pascal VOC provider and the provider factory

pub mod batch;
pub mod document;
pub mod factory;
pub mod filter;
pub mod naming;
pub mod pascal_voc;
pub mod provider;

pub use batch::MetadataBatch;
pub use document::ExportDocument;
pub use factory::{create_export_provider, ExportFormat};
pub use filter::AssetStateFilter;
pub use naming::{container_name, export_file_path, EXPORT_FILE_NAME};
pub use pascal_voc::{
    TfPascalVocExportOptions, TfPascalVocJsonExportProvider, TF_PASCAL_VOC_FORMAT_TAG,
};
pub use provider::{ExportContext, ExportProvider, ExportResources};
