//! Domain models and types for asset-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`AssetId`])
//! - **Project models** ([`Project`], [`Asset`], [`AssetState`])
//! - **Metadata models** ([`AssetMetadata`], [`Region`])
//! - **Error types** ([`ExportError`], [`StorageError`], [`MetadataError`], [`MaskError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use asset_export::domain::{Asset, AssetId, AssetState, Project};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::new("My Project")
//!     .with_asset(Asset::new(AssetId::new("a1")?, "cat.jpg", AssetState::Tagged));
//! assert_eq!(project.assets.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod metadata;
pub mod project;
pub mod result;

pub use errors::{ExportError, MaskError, MetadataError, StorageError};
pub use ids::AssetId;
pub use metadata::{AssetMetadata, BoundingBox, Point, Region, RegionType};
pub use project::{Asset, AssetState, AssetType, Project, Size, Tag};
pub use result::Result;
