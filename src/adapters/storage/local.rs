//! Local file system storage provider

use crate::adapters::storage::traits::StorageProvider;
use crate::domain::errors::StorageError;
use crate::domain::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Storage provider backed by a directory on the local file system
///
/// Containers are sub-directories of `root`. In dry-run mode container
/// creation and writes are logged and skipped; reads still hit the disk.
#[derive(Debug, Clone)]
pub struct LocalFileSystemStorage {
    root: PathBuf,
    dry_run: bool,
}

impl LocalFileSystemStorage {
    /// Create a provider rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Root directory of this provider
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether writes are skipped
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Resolve a relative storage path against the root
    ///
    /// Absolute paths and `..` components are rejected so nothing can be
    /// written outside the root.
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let relative_path = Path::new(relative);
        if relative.trim().is_empty() {
            return Err(StorageError::InvalidPath("path is empty".to_string()).into());
        }

        for component in relative_path.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(StorageError::InvalidPath(relative.to_string()).into());
                }
            }
        }

        Ok(self.root.join(relative_path))
    }
}

#[async_trait]
impl StorageProvider for LocalFileSystemStorage {
    fn provider_type(&self) -> &str {
        "localFileSystem"
    }

    async fn create_container(&self, name: &str) -> Result<()> {
        let dir = self.resolve(name)?;

        if self.dry_run {
            tracing::info!(container = %name, "Dry run: skipping container creation");
            return Ok(());
        }

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::ContainerCreationFailed {
                name: name.to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(container = %name, path = %dir.display(), "Container ready");
        Ok(())
    }

    async fn write_text(&self, path: &str, content: &str) -> Result<()> {
        let file = self.resolve(path)?;

        if self.dry_run {
            tracing::info!(
                path = %path,
                bytes = content.len(),
                "Dry run: skipping file write"
            );
            return Ok(());
        }

        tokio::fs::write(&file, content)
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path, bytes = content.len(), "Wrote file");
        Ok(())
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let file = self.resolve(path)?;

        match tokio::fs::read_to_string(&file).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_string()).into())
            }
            Err(e) => Err(StorageError::ReadFailed {
                path: path.to_string(),
                message: e.to_string(),
            }
            .into()),
        }
    }
}
