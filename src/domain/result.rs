//! Result type alias for asset-export

use super::errors::ExportError;

/// Result type alias for export operations
///
/// # Examples
///
/// ```
/// use asset_export::domain::result::Result;
/// use asset_export::domain::errors::ExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::InvalidArgument("missing options".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;
