//! Domain error types
//!
//! This module defines the error hierarchy for asset-export. Collaborator
//! failures (storage, metadata loading) have their own enums and are wrapped
//! by [`ExportError`] without exposing third-party types.

use crate::domain::metadata::RegionType;
use thiserror::Error;

/// Main export error type
///
/// Every fallible operation in the crate returns this error. Nothing is caught
/// or recovered locally: an error aborts the export and surfaces to the caller.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Bad construction input (e.g. missing export options)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unrecognized or unusable state (e.g. unknown asset state filter)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Asset metadata could not be loaded
    #[error("Metadata load failure: {0}")]
    MetadataLoad(#[from] MetadataError),

    /// Storage provider failure
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    /// Mask image generation failure
    #[error("Mask generation failure: {0}")]
    Mask(#[from] MaskError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors outside of a storage provider
    #[error("I/O error: {0}")]
    Io(String),
}

/// Storage provider errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create a container
    #[error("Failed to create container '{name}': {message}")]
    ContainerCreationFailed { name: String, message: String },

    /// Failed to write a file
    #[error("Failed to write '{path}': {message}")]
    WriteFailed { path: String, message: String },

    /// Failed to read a file
    #[error("Failed to read '{path}': {message}")]
    ReadFailed { path: String, message: String },

    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Path escapes the storage root or is otherwise unusable
    #[error("Invalid storage path: {0}")]
    InvalidPath(String),
}

/// Asset metadata loading errors
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The metadata record could not be read
    #[error("Failed to read metadata for asset {asset_id}: {message}")]
    ReadFailed { asset_id: String, message: String },

    /// The metadata record is not valid JSON or has the wrong shape
    #[error("Invalid metadata for asset {asset_id}: {message}")]
    InvalidFormat { asset_id: String, message: String },

    /// The load task did not complete
    #[error("Metadata load for asset {asset_id} aborted: {message}")]
    Aborted { asset_id: String, message: String },
}

/// Mask image generation errors
#[derive(Debug, Error)]
pub enum MaskError {
    /// Only polygon regions can be rasterized
    #[error("Asset {asset}: region {region_id} has unsupported type {region_type:?}")]
    UnsupportedRegionType {
        asset: String,
        region_id: String,
        region_type: RegionType,
    },

    /// A polygon needs at least three points
    #[error("Asset {asset}: polygon {region_id} has {count} point(s), more than 2 required")]
    TooFewPoints {
        asset: String,
        region_id: String,
        count: usize,
    },

    /// Region carries no tag to label it with
    #[error("Asset {asset}: region {region_id} has no tag")]
    MissingTag { asset: String, region_id: String },

    /// Region tag is not defined by the project
    #[error("Asset {asset}: tag '{tag}' is not defined in the project")]
    UnknownTag { asset: String, tag: String },

    /// Asset size is needed for the mask dimensions
    #[error("Asset {asset} has no size")]
    MissingSize { asset: String },

    /// Tag color is not a `#rgb` or `#rrggbb` hex color
    #[error("Tag '{tag}' has invalid color '{color}'")]
    InvalidColor { tag: String, color: String },

    /// More tags than an 8-bit palette can index
    #[error("{count} tags defined, at most 255 fit in a mask palette")]
    TooManyTags { count: usize },

    /// Mask file could not be written
    #[error("Failed to write mask '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

impl MetadataError {
    /// Asset the failed load was issued for
    pub fn asset_id(&self) -> &str {
        match self {
            MetadataError::ReadFailed { asset_id, .. }
            | MetadataError::InvalidFormat { asset_id, .. }
            | MetadataError::Aborted { asset_id, .. } => asset_id,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
