//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the catalog-ingest configuration.

use crate::config::load_config_or_env;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        if Path::new(config_path).exists() {
            println!("🔍 Validating configuration file: {config_path}");
        } else {
            println!("🔍 No file at {config_path}, validating defaults and environment");
        }
        println!();

        let config = match load_config_or_env(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  AWS Region: {}",
            config.aws.region.as_deref().unwrap_or("(SDK default)")
        );
        if let Some(endpoint) = &config.aws.endpoint_url {
            println!("  AWS Endpoint: {endpoint}");
        }
        println!("  Max Attempts: {}", config.aws.max_attempts);
        println!("  Products Table: {}", config.dynamodb.products_table);
        println!("  Stocks Table: {}", config.dynamodb.stocks_table);
        println!(
            "  Product Titles Table: {}",
            config.dynamodb.product_titles_table
        );
        println!("  Max Concurrency: {}", config.ingest.max_concurrency);
        if config.notifications.enabled {
            println!(
                "  Notifications: {}",
                config.notifications.topic_arn.as_deref().unwrap_or_default()
            );
        } else {
            println!("  Notifications: disabled");
        }
        println!("  Log Format: {:?}", config.logging.format);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ingest]\nmax_concurrency = 4").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ingest]\nmax_concurrency = 0").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
