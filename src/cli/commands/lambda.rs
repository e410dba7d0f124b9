//! Lambda command implementation
//!
//! Builds the processor once at cold start and hands it to the Lambda runtime.

use super::build_processor;
use crate::config::IngestConfig;
use clap::Args;
use std::sync::Arc;

/// Arguments for the lambda command
#[derive(Args, Debug, Default)]
pub struct LambdaArgs {}

impl LambdaArgs {
    /// Execute the lambda command
    pub async fn execute(&self, config: &IngestConfig) -> anyhow::Result<i32> {
        let processor = build_processor(config).await?;

        tracing::info!(
            products_table = %config.dynamodb.products_table,
            max_concurrency = config.ingest.max_concurrency,
            dry_run = config.application.dry_run,
            "Catalog ingest handler ready"
        );

        crate::lambda::run(Arc::new(processor))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(0)
    }
}
