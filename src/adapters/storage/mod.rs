//! Storage abstraction layer
//!
//! This module provides a trait-based abstraction for storage backends and
//! the local file system implementation.

pub mod local;
pub mod traits;

pub use local::LocalFileSystemStorage;
pub use traits::StorageProvider;
