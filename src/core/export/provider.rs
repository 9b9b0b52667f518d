//! Export provider contract
//!
//! Providers are built by composition: an [`ExportContext`] holds the project,
//! the format-specific options and the collaborators, and each format
//! implements [`ExportProvider`] on top of it.

use crate::adapters::metadata::AssetMetadataLoader;
use crate::adapters::storage::StorageProvider;
use crate::core::export::naming;
use crate::domain::{ExportError, Project, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Collaborators shared by every export format
#[derive(Clone)]
pub struct ExportResources {
    pub project: Arc<Project>,
    pub storage: Arc<dyn StorageProvider + Send + Sync>,
    pub loader: Arc<dyn AssetMetadataLoader + Send + Sync>,
}

impl ExportResources {
    pub fn new(
        project: Arc<Project>,
        storage: Arc<dyn StorageProvider + Send + Sync>,
        loader: Arc<dyn AssetMetadataLoader + Send + Sync>,
    ) -> Self {
        Self {
            project,
            storage,
            loader,
        }
    }
}

/// Project, options and collaborators of one provider instance
pub struct ExportContext<O> {
    resources: ExportResources,
    options: O,
}

impl<O> ExportContext<O> {
    /// Create a context
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidArgument` if `options` is `None`.
    pub fn new(resources: ExportResources, options: Option<O>) -> Result<Self> {
        let options = options.ok_or_else(|| {
            ExportError::InvalidArgument("Export options are required".to_string())
        })?;
        Ok(Self { resources, options })
    }

    pub fn project(&self) -> &Project {
        &self.resources.project
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    pub fn storage(&self) -> &Arc<dyn StorageProvider + Send + Sync> {
        &self.resources.storage
    }

    pub fn loader(&self) -> &Arc<dyn AssetMetadataLoader + Send + Sync> {
        &self.resources.loader
    }
}

/// An export format
#[async_trait]
pub trait ExportProvider: Send + Sync {
    /// Tag identifying the format in container names, e.g. `TFPascalVoc`
    fn format_tag(&self) -> &'static str;

    /// Project being exported
    fn project(&self) -> &Project;

    /// Storage the artifact is written to
    fn storage(&self) -> &dyn StorageProvider;

    /// Destination container of this export
    fn container_name(&self) -> String {
        naming::container_name(&self.project().name, self.format_tag())
    }

    /// Storage path of the artifact this export writes
    fn export_path(&self) -> String {
        naming::export_file_path(&self.container_name())
    }

    /// Run the export
    ///
    /// Either the complete artifact is written or, on any error, nothing is.
    async fn export(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, AssetMetadata};

    struct NullStorage;

    #[async_trait]
    impl StorageProvider for NullStorage {
        fn provider_type(&self) -> &str {
            "null"
        }
        async fn create_container(&self, _name: &str) -> Result<()> {
            Ok(())
        }
        async fn write_text(&self, _path: &str, _content: &str) -> Result<()> {
            Ok(())
        }
        async fn read_text(&self, path: &str) -> Result<String> {
            Err(crate::domain::StorageError::NotFound(path.to_string()).into())
        }
    }

    struct NullLoader;

    #[async_trait]
    impl AssetMetadataLoader for NullLoader {
        async fn load_metadata(&self, asset: &Asset) -> Result<AssetMetadata> {
            Ok(AssetMetadata::empty(asset.clone(), "test"))
        }
    }

    fn resources() -> ExportResources {
        ExportResources::new(
            Arc::new(Project::new("Demo Project")),
            Arc::new(NullStorage),
            Arc::new(NullLoader),
        )
    }

    #[test]
    fn test_context_requires_options() {
        let result = ExportContext::<u8>::new(resources(), None);
        assert!(matches!(result, Err(ExportError::InvalidArgument(_))));
    }

    #[test]
    fn test_context_accessors() {
        let context = ExportContext::new(resources(), Some(7u8)).unwrap();
        assert_eq!(*context.options(), 7);
        assert_eq!(context.project().name, "Demo Project");
        assert_eq!(context.storage().provider_type(), "null");
    }
}
