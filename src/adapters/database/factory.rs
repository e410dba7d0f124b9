//! Catalog store factory
//!
//! Creates the catalog store selected by configuration.

use crate::adapters::database::memory::MemoryCatalogStore;
use crate::adapters::database::traits::CatalogStore;
use crate::adapters::dynamodb::DynamoDbCatalogStore;
use crate::config::IngestConfig;
use crate::domain::{CatalogError, Result};
use aws_config::SdkConfig;
use std::sync::Arc;

/// Create a catalog store based on the configuration
///
/// Dry-run mode yields an empty in-memory store; otherwise a DynamoDB store
/// over the configured tables is built from the shared SDK configuration.
///
/// # Errors
///
/// Returns an error if DynamoDB is selected but no SDK configuration is given
pub fn create_catalog_store(
    config: &IngestConfig,
    sdk_config: Option<&SdkConfig>,
) -> Result<Arc<dyn CatalogStore>> {
    if config.application.dry_run {
        tracing::info!("Dry run enabled, using in-memory catalog store");
        return Ok(Arc::new(MemoryCatalogStore::new()));
    }

    let sdk_config = sdk_config.ok_or_else(|| {
        CatalogError::Configuration("DynamoDB store needs an AWS configuration".to_string())
    })?;

    tracing::info!(
        products_table = %config.dynamodb.products_table,
        stocks_table = %config.dynamodb.stocks_table,
        product_titles_table = %config.dynamodb.product_titles_table,
        "Creating DynamoDB catalog store"
    );
    Ok(Arc::new(DynamoDbCatalogStore::new(
        sdk_config,
        config.dynamodb.clone(),
    )))
}
