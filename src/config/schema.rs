//! Configuration schema types
//!
//! This module defines the configuration structure for catalog ingestion.

use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults so a Lambda deployment can run from
/// environment variables alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Shared AWS client settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// DynamoDB table names
    #[serde(default)]
    pub dynamodb: DynamoDbConfig,

    /// Batch processing settings
    #[serde(default)]
    pub ingest: BatchSettings,

    /// Success notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl IngestConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.aws.validate()?;
        self.dynamodb.validate()?;
        self.ingest.validate()?;
        self.notifications.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (write to an in-memory store instead of DynamoDB)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Shared AWS SDK client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region override; the SDK default chain is used when unset
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint override for local emulators
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Maximum attempts per SDK call, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            max_attempts: default_max_attempts(),
        }
    }
}

impl AwsConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err("aws.region cannot be empty when set".to_string());
            }
        }

        if let Some(endpoint) = &self.endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "aws.endpoint_url must start with http:// or https://, got '{endpoint}'"
                ));
            }
        }

        if self.max_attempts == 0 || self.max_attempts > 10 {
            return Err(format!(
                "aws.max_attempts must be between 1 and 10, got {}",
                self.max_attempts
            ));
        }

        Ok(())
    }
}

/// DynamoDB table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamoDbConfig {
    /// Table holding product records (partition key `id`)
    #[serde(default = "default_products_table")]
    pub products_table: String,

    /// Table holding stock records (partition key `product_id`)
    #[serde(default = "default_stocks_table")]
    pub stocks_table: String,

    /// Table holding title uniqueness markers (partition key `title`)
    #[serde(default = "default_product_titles_table")]
    pub product_titles_table: String,
}

impl Default for DynamoDbConfig {
    fn default() -> Self {
        Self {
            products_table: default_products_table(),
            stocks_table: default_stocks_table(),
            product_titles_table: default_product_titles_table(),
        }
    }
}

impl DynamoDbConfig {
    fn validate(&self) -> Result<(), String> {
        let tables = [
            ("products_table", &self.products_table),
            ("stocks_table", &self.stocks_table),
            ("product_titles_table", &self.product_titles_table),
        ];

        for (key, name) in tables {
            if name.trim().is_empty() {
                return Err(format!("dynamodb.{key} cannot be empty"));
            }
        }

        if self.products_table == self.stocks_table
            || self.products_table == self.product_titles_table
            || self.stocks_table == self.product_titles_table
        {
            return Err("dynamodb table names must be distinct".to_string());
        }

        Ok(())
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Messages processed concurrently within one batch
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

impl BatchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.max_concurrency == 0 || self.max_concurrency > 100 {
            return Err(format!(
                "ingest.max_concurrency must be between 1 and 100, got {}",
                self.max_concurrency
            ));
        }
        Ok(())
    }
}

/// Success notification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Publish a notification for every created product
    #[serde(default)]
    pub enabled: bool,

    /// SNS topic ARN (required when enabled)
    #[serde(default)]
    pub topic_arn: Option<String>,
}

impl NotificationConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        match self.topic_arn.as_deref() {
            Some(arn) if arn.starts_with("arn:") => Ok(()),
            Some(arn) => Err(format!(
                "notifications.topic_arn must be an ARN, got '{arn}'"
            )),
            None => Err(
                "notifications.topic_arn is required when notifications are enabled".to_string(),
            ),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line (CloudWatch friendly)
    #[default]
    Json,
    /// Human-readable output
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Include the event target (module path)
    #[serde(default = "default_true")]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_products_table() -> String {
    "products".to_string()
}

fn default_stocks_table() -> String {
    "stocks".to_string()
}

fn default_product_titles_table() -> String {
    "product_titles".to_string()
}

fn default_max_concurrency() -> usize {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IngestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dynamodb.products_table, "products");
        assert_eq!(config.ingest.max_concurrency, 1);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = IngestConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_empty_table_name() {
        let mut config = IngestConfig::default();
        config.dynamodb.stocks_table = " ".to_string();
        assert!(config.validate().unwrap_err().contains("stocks_table"));
    }

    #[test]
    fn test_table_names_must_be_distinct() {
        let mut config = IngestConfig::default();
        config.dynamodb.stocks_table = "products".to_string();
        assert!(config.validate().unwrap_err().contains("distinct"));
    }

    #[test]
    fn test_max_concurrency_bounds() {
        let mut config = IngestConfig::default();
        config.ingest.max_concurrency = 0;
        assert!(config.validate().is_err());
        config.ingest.max_concurrency = 101;
        assert!(config.validate().is_err());
        config.ingest.max_concurrency = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_notifications_require_topic() {
        let mut config = IngestConfig::default();
        config.notifications.enabled = true;
        assert!(config.validate().unwrap_err().contains("topic_arn"));

        config.notifications.topic_arn = Some("not-an-arn".to_string());
        assert!(config.validate().is_err());

        config.notifications.topic_arn =
            Some("arn:aws:sns:eu-west-1:123456789012:createProductTopic".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_url_scheme() {
        let mut config = IngestConfig::default();
        config.aws.endpoint_url = Some("localhost:4566".to_string());
        assert!(config.validate().is_err());
        config.aws.endpoint_url = Some("http://localhost:4566".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_attempts_bounds() {
        let mut config = IngestConfig::default();
        config.aws.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_deserialize() {
        let config: LoggingConfig = toml::from_str("format = \"pretty\"").unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_target);
    }
}
