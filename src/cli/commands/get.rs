//! Get command implementation
//!
//! Prints one product joined with its stock count.

use super::build_store;
use crate::config::IngestConfig;
use crate::domain::ProductId;
use clap::Args;
use std::str::FromStr;

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Product id (UUID v4)
    pub id: String,
}

impl GetArgs {
    /// Execute the get command
    ///
    /// Exit codes: 0 found, 1 not found, 2 malformed id.
    pub async fn execute(&self, config: &IngestConfig) -> anyhow::Result<i32> {
        let id = match ProductId::from_str(&self.id) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        let store = build_store(config).await?;
        match store.get_product(&id).await? {
            Some(product) => {
                println!("{}", serde_json::to_string_pretty(&product)?);
                Ok(0)
            }
            None => {
                tracing::info!(product_id = %id, "Product not found");
                eprintln!("Product not found: {id}");
                Ok(1)
            }
        }
    }
}
