//! Result type alias for svcdeps

use super::errors::ExporterError;

/// Result type alias for svcdeps operations
///
/// # Examples
///
/// ```
/// use svcdeps::domain::result::Result;
/// use svcdeps::domain::errors::ExporterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExporterError::Export("disk full".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExporterError>;
