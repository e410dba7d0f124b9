//! CLI command implementations

pub mod get;
pub mod init;
pub mod lambda;
pub mod list;
pub mod process;
pub mod validate;

use crate::adapters::aws::load_sdk_config;
use crate::adapters::database::{create_catalog_store, CatalogStore};
use crate::adapters::notification::{create_notifier, NoopNotifier, ProductNotifier};
use crate::config::IngestConfig;
use crate::core::ingest::{BatchConfig, BatchProcessor};
use crate::domain::Result;
use std::sync::Arc;

/// Build the batch processor and its clients from configuration
///
/// Dry runs touch no AWS service: the store is in memory and notifications
/// are disabled.
pub async fn build_processor(config: &IngestConfig) -> Result<BatchProcessor> {
    let batch_config = BatchConfig::from_config(&config.ingest);

    if config.application.dry_run {
        let store = create_catalog_store(config, None)?;
        let notifier: Arc<dyn ProductNotifier> = Arc::new(NoopNotifier);
        return Ok(BatchProcessor::new(store, notifier, batch_config));
    }

    let sdk_config = load_sdk_config(&config.aws).await;
    let store = create_catalog_store(config, Some(&sdk_config))?;
    let notifier = create_notifier(&config.notifications, Some(&sdk_config))?;

    Ok(BatchProcessor::new(store, notifier, batch_config))
}

/// Build only the catalog store, for the read commands
pub async fn build_store(config: &IngestConfig) -> Result<Arc<dyn CatalogStore>> {
    if config.application.dry_run {
        return create_catalog_store(config, None);
    }

    let sdk_config = load_sdk_config(&config.aws).await;
    create_catalog_store(config, Some(&sdk_config))
}
