//! Storage abstraction traits
//!
//! This module defines the trait that storage backends must implement to
//! receive export artifacts.

use crate::domain::Result;
use async_trait::async_trait;

/// Storage provider trait
///
/// A storage provider groups files into named containers (directories,
/// blob containers, ...). Paths passed to [`write_text`](Self::write_text)
/// and [`read_text`](Self::read_text) are `/`-separated and relative to the
/// provider root, e.g. `My-Project-TFPascalVoc-export/file.json`.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Short name of the backend, used in logs
    fn provider_type(&self) -> &str;

    /// Ensure a container exists, creating it if necessary
    ///
    /// Must be idempotent: creating an existing container succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ContainerCreationFailed` if the container cannot
    /// be created.
    async fn create_container(&self, name: &str) -> Result<()>;

    /// Write a UTF-8 text file, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteFailed` if the write fails.
    async fn write_text(&self, path: &str, content: &str) -> Result<()>;

    /// Read a UTF-8 text file
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the file does not exist and
    /// `StorageError::ReadFailed` for any other failure.
    async fn read_text(&self, path: &str) -> Result<String>;
}
