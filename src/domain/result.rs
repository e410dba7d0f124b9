//! Result type alias for catalog ingestion

use super::errors::CatalogError;

/// Result type alias for catalog ingestion operations
///
/// # Examples
///
/// ```
/// use catalog_ingest::domain::result::Result;
/// use catalog_ingest::domain::errors::CatalogError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CatalogError::Configuration("boom".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CatalogError>;
