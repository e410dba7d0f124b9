//! Batch processing for product ingestion
//!
//! Each message in a batch is parsed, validated, written and classified on
//! its own. A failure of one message, whatever its kind, never stops or
//! changes the handling of the others.

use super::outcome::{BatchReport, MessageOutcome, SkipReason};
use super::validate::parse_product;
use crate::adapters::database::{CatalogStore, WriteOutcome};
use crate::adapters::notification::{NoopNotifier, ProductNotifier};
use crate::config::BatchSettings;
use crate::domain::{CreatedProduct, IncomingMessage, ProductEntity, ProductId};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Configuration for batch processing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Messages processed concurrently (at least 1)
    pub max_concurrency: usize,
}

impl BatchConfig {
    /// Create a new batch configuration
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Create from the `[ingest]` configuration section
    pub fn from_config(settings: &BatchSettings) -> Self {
        Self::new(settings.max_concurrency)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Batch processor for product messages
///
/// Holds the injected store and notifier; build one per process and reuse
/// it for every batch.
pub struct BatchProcessor {
    store: Arc<dyn CatalogStore>,
    notifier: Arc<dyn ProductNotifier>,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(
        store: Arc<dyn CatalogStore>,
        notifier: Arc<dyn ProductNotifier>,
        config: BatchConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Create a processor that publishes no notifications
    pub fn without_notifications(store: Arc<dyn CatalogStore>, config: BatchConfig) -> Self {
        Self::new(store, Arc::new(NoopNotifier), config)
    }

    /// Process a batch of messages
    ///
    /// Returns a report whose `failed_message_ids` lists, in batch order, the
    /// messages whose write failed for a reason other than a duplicate title.
    /// Every other message (created, invalid, duplicate) is acknowledged.
    pub async fn process_batch(&self, messages: Vec<IncomingMessage>) -> BatchReport {
        let started = Instant::now();
        let mut report = BatchReport::new();

        if messages.is_empty() {
            tracing::debug!("No messages to process in batch");
            return report;
        }

        tracing::info!(
            batch_size = messages.len(),
            max_concurrency = self.config.max_concurrency,
            backend = self.store.backend_name(),
            "Processing batch of messages"
        );

        let outcomes: Vec<_> = stream::iter(messages)
            .map(|message| async move {
                let outcome = self.process_message(&message).await;
                (message.id, outcome)
            })
            .buffered(self.config.max_concurrency)
            .collect()
            .await;

        for (message_id, outcome) in outcomes {
            report.record(message_id, &outcome);
        }
        report.duration = started.elapsed();

        tracing::info!(
            total = report.total,
            created = report.created,
            skipped_invalid = report.skipped_invalid,
            duplicates_skipped = report.duplicates_skipped,
            failed = report.failed(),
            notification_failures = report.notification_failures,
            duration_ms = report.duration.as_millis() as u64,
            "Batch processed"
        );

        report
    }

    /// Process a single message: parse, validate, write, classify
    #[tracing::instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn process_message(&self, message: &IncomingMessage) -> MessageOutcome {
        let product = match parse_product(&message.body) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(reason = %e, "Skipping invalid message");
                return MessageOutcome::Skipped(SkipReason::Invalid(e));
            }
        };

        let entity = ProductEntity::new(ProductId::generate(), &product);

        match self.store.create_product(&entity).await {
            Ok(WriteOutcome::Written) => {
                tracing::info!(
                    product_id = %entity.id(),
                    title = %entity.title(),
                    "Product created"
                );
                let notified = self.notify(&entity).await;
                MessageOutcome::Created {
                    product_id: entity.id(),
                    notified,
                }
            }
            Ok(WriteOutcome::ConditionFailed) => {
                tracing::info!(
                    title = %entity.title(),
                    "Product title already exists, skipping"
                );
                MessageOutcome::Skipped(SkipReason::Duplicate(entity.title().clone()))
            }
            Err(e) => {
                tracing::error!(
                    title = %entity.title(),
                    error = %e,
                    "Failed to write product, message will be retried"
                );
                MessageOutcome::Retryable(e)
            }
        }
    }

    async fn notify(&self, entity: &ProductEntity) -> bool {
        let created = CreatedProduct::from_entity(entity);
        match self.notifier.product_created(&created).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    product_id = %entity.id(),
                    error = %e,
                    "Failed to publish product created notification"
                );
                false
            }
        }
    }
}
