//! Amazon SNS notifier

use super::ProductNotifier;
use crate::domain::{CreatedProduct, NotificationError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::types::MessageAttributeValue;
use serde::Serialize;

/// Subject line of product-created notifications
pub const PRODUCT_CREATED_SUBJECT: &str = "Product created";

/// Event body published for every created product
#[derive(Debug, Serialize)]
pub struct ProductCreatedEvent<'a> {
    /// Event type discriminator
    pub event: &'static str,

    /// The created product
    #[serde(flatten)]
    pub product: &'a CreatedProduct,
}

impl<'a> ProductCreatedEvent<'a> {
    /// Wraps a created product
    pub fn new(product: &'a CreatedProduct) -> Self {
        Self {
            event: "product_created",
            product,
        }
    }
}

/// Publishes product-created events to an SNS topic
///
/// The price is also sent as a numeric `price` message attribute so
/// subscriptions can filter on it.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Create a notifier from a shared SDK configuration
    pub fn new(sdk_config: &SdkConfig, topic_arn: impl Into<String>) -> Self {
        Self::new_from_client(aws_sdk_sns::Client::new(sdk_config), topic_arn)
    }

    /// Create a notifier around an existing client
    pub fn new_from_client(client: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Target topic
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl ProductNotifier for SnsNotifier {
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    async fn product_created(&self, product: &CreatedProduct) -> Result<(), NotificationError> {
        let message = serde_json::to_string(&ProductCreatedEvent::new(product))
            .map_err(|e| NotificationError::Serialization(e.to_string()))?;

        let price = MessageAttributeValue::builder()
            .data_type("Number")
            .string_value(product.price.to_string())
            .build()
            .map_err(|e| NotificationError::Serialization(e.to_string()))?;

        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(PRODUCT_CREATED_SUBJECT)
            .message(message)
            .message_attributes("price", price)
            .send()
            .await
            .map_err(|e| {
                NotificationError::PublishFailed(
                    aws_sdk_sns::error::DisplayErrorContext(&e).to_string(),
                )
            })?;

        tracing::debug!(
            sns_message_id = output.message_id().unwrap_or_default(),
            "Published product created notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductEntity, ProductId};

    #[test]
    fn test_event_body_shape() {
        let product = crate::core::ingest::validate::parse_product(
            r#"{"title":"Dune","price":17.99,"count":3}"#,
        )
        .unwrap();
        let created =
            CreatedProduct::from_entity(&ProductEntity::new(ProductId::generate(), &product));

        let json = serde_json::to_value(ProductCreatedEvent::new(&created)).unwrap();

        assert_eq!(json["event"], "product_created");
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["price"], 17.99);
        assert_eq!(json["count"], 3.0);
        assert_eq!(json["id"], created.id.to_string());
        assert!(json.get("description").is_none());
        assert!(json.get("created_at").is_some());
    }
}
