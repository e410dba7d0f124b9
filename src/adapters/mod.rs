//! External system integrations.
//!
//! - [`database`] - Catalog store abstraction (trait-based) and in-memory store
//! - [`dynamodb`] - Amazon DynamoDB implementation of the catalog store
//! - [`notification`] - Success notification extension point and SNS notifier
//! - [`aws`] - Shared AWS SDK configuration
//!
//! # Design Pattern
//!
//! Adapters isolate the AWS SDKs behind traits so the batch processor can be
//! driven by in-memory implementations in tests and dry runs:
//!
//! ```rust,no_run
//! use catalog_ingest::adapters::aws::load_sdk_config;
//! use catalog_ingest::adapters::dynamodb::DynamoDbCatalogStore;
//! use catalog_ingest::config::{AwsConfig, DynamoDbConfig};
//!
//! # async fn example() {
//! let sdk_config = load_sdk_config(&AwsConfig::default()).await;
//! let store = DynamoDbCatalogStore::new(&sdk_config, DynamoDbConfig::default());
//! # }
//! ```

pub mod aws;
pub mod database;
pub mod dynamodb;
pub mod notification;
