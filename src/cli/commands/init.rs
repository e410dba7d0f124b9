//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "catalog-ingest.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing catalog-ingest configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your table names", self.output);
                println!("  2. Set CREATE_PRODUCT_TOPIC_ARN to enable notifications");
                println!("  3. Validate configuration: catalog-ingest validate-config");
                println!("  4. Try a local batch: catalog-ingest process products.json --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every section and its defaults
    fn sample_config() -> String {
        r#"# Catalog Ingest Configuration File
# SQS to DynamoDB product ingestion
#
# Every setting has a default. Environment variables override the file:
#   PRODUCTS_TABLE_NAME, STOCKS_TABLE_NAME, PRODUCT_TITLES_TABLE_NAME,
#   CREATE_PRODUCT_TOPIC_ARN, REGION, or CATALOG_<SECTION>_<KEY>

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Write to an in-memory store instead of DynamoDB
dry_run = false

[aws]
# region = "eu-west-1"

# Endpoint override for local emulators
# endpoint_url = "http://localhost:4566"

# Attempts per AWS call, including the first (1-10)
max_attempts = 3

[dynamodb]
products_table = "products"
stocks_table = "stocks"
product_titles_table = "product_titles"

[ingest]
# Messages processed concurrently within one batch (1-100)
max_concurrency = 1

[notifications]
enabled = false
# topic_arn = "${CREATE_PRODUCT_TOPIC_ARN}"

[logging]
# json | pretty
format = "json"
with_target = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IngestConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: IngestConfig = toml::from_str(&InitArgs::sample_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.dynamodb.product_titles_table, "product_titles");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("catalog-ingest.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[dynamodb]"));
    }
}
