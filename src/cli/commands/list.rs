//! List command implementation

use super::build_store;
use crate::config::IngestConfig;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {}

impl ListArgs {
    /// Print every product with its stock count as a JSON array, by title
    pub async fn execute(&self, config: &IngestConfig) -> anyhow::Result<i32> {
        let store = build_store(config).await?;
        let products = store.list_products().await?;

        tracing::info!(products = products.len(), "Listed products");
        println!("{}", serde_json::to_string_pretty(&products)?);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_dry_run_is_empty() {
        let mut config = IngestConfig::default();
        config.application.dry_run = true;

        assert_eq!(ListArgs::default().execute(&config).await.unwrap(), 0);
    }
}
