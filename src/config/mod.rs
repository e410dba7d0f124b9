//! Configuration management for catalog ingestion.
//!
//! TOML-based configuration with environment variable substitution,
//! environment overrides, defaults for every setting and validation on load.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use catalog_ingest::config::load_config_or_env;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Uses the file when present, else defaults plus environment variables
//! let config = load_config_or_env("catalog-ingest.toml")?;
//!
//! println!("Products table: {}", config.dynamodb.products_table);
//! println!("Concurrency: {}", config.ingest.max_concurrency);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run mode
//! - [`AwsConfig`] - Region, endpoint override, SDK retry attempts
//! - [`DynamoDbConfig`] - Product, stock and title marker tables
//! - [`BatchSettings`] - Per-batch concurrency
//! - [`NotificationConfig`] - Success notifications
//! - [`LoggingConfig`] - Log output format
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [aws]
//! region = "eu-west-1"
//!
//! [dynamodb]
//! products_table = "products"
//! stocks_table = "stocks"
//! product_titles_table = "product_titles"
//!
//! [notifications]
//! enabled = true
//! topic_arn = "${CREATE_PRODUCT_TOPIC_ARN}"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{config_from_env, load_config, load_config_or_env};
pub use schema::{
    ApplicationConfig, AwsConfig, BatchSettings, DynamoDbConfig, IngestConfig, LogFormat,
    LoggingConfig, NotificationConfig,
};
