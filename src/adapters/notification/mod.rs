//! Success notification extension point
//!
//! After a product is written the batch processor hands it to a
//! [`ProductNotifier`]. Publishing is best effort: a failed notification is
//! logged and never turns a written product into a redelivery.

pub mod sns;

use crate::config::NotificationConfig;
use crate::domain::{CatalogError, CreatedProduct, NotificationError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use std::sync::Arc;

pub use sns::SnsNotifier;

/// Receives every newly created product
#[async_trait]
pub trait ProductNotifier: Send + Sync {
    /// Announce a created product
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    async fn product_created(&self, product: &CreatedProduct) -> std::result::Result<(), NotificationError>;
}

/// Notifier that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl ProductNotifier for NoopNotifier {
    async fn product_created(&self, product: &CreatedProduct) -> std::result::Result<(), NotificationError> {
        tracing::trace!(product_id = %product.id, "Notifications disabled, skipping");
        Ok(())
    }
}

/// Create the notifier selected by the configuration
///
/// # Errors
///
/// Returns an error if notifications are enabled without a topic ARN.
pub fn create_notifier(
    config: &NotificationConfig,
    sdk_config: Option<&SdkConfig>,
) -> Result<Arc<dyn ProductNotifier>> {
    if !config.enabled {
        return Ok(Arc::new(NoopNotifier));
    }

    let topic_arn = config.topic_arn.clone().ok_or_else(|| {
        CatalogError::Configuration(
            "notifications.topic_arn is required when notifications are enabled".to_string(),
        )
    })?;
    let sdk_config = sdk_config.ok_or_else(|| {
        CatalogError::Configuration("SNS notifications need an AWS configuration".to_string())
    })?;

    let notifier = SnsNotifier::new(sdk_config, topic_arn);
    tracing::info!(topic_arn = %notifier.topic_arn(), "Created SNS notifier");
    Ok(Arc::new(notifier))
}
