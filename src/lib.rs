// Catalog Ingest - SQS to DynamoDB product ingestion
// Copyright (c) 2025 Catalog Ingest Contributors
// Licensed under the MIT License

//! # Catalog Ingest - SQS to DynamoDB product ingestion
//!
//! Catalog Ingest consumes batches of product-creation messages from an SQS
//! queue (through AWS Lambda) and persists each product to DynamoDB.
//!
//! ## Overview
//!
//! For every message of a batch the library:
//! - **Validates** the JSON body (title, price, count, optional description)
//! - **Writes** a title marker, a product record and a stock record in one
//!   transaction, so titles stay unique
//! - **Classifies** the message as created, skipped or retryable
//! - **Reports** only the retryable messages back to SQS for redelivery
//!
//! Stored products can be read back joined with their stock count through
//! [`adapters::database::CatalogStore::get_product`] and `list_products`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`lambda`] - SQS event handler and Lambda runtime loop
//! - [`core`] - Business logic (validation, batch processing, reporting)
//! - [`adapters`] - External integrations (DynamoDB, SNS, in-memory store)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog_ingest::cli::commands::build_processor;
//! use catalog_ingest::config::load_config_or_env;
//! use catalog_ingest::domain::IncomingMessage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_env("catalog-ingest.toml")?;
//!     let processor = build_processor(&config).await?;
//!
//!     let report = processor
//!         .process_batch(vec![IncomingMessage::new(
//!             "m1",
//!             r#"{"title":"Dune","description":"Novel","price":17.99,"count":3}"#,
//!         )])
//!         .await;
//!
//!     println!("Created {} product(s), retry {:?}", report.created, report.failed_ids());
//!     Ok(())
//! }
//! ```
//!
//! ## Partial Batch Failures
//!
//! Invalid messages and duplicate titles are acknowledged and dropped. Only
//! store failures land in `batchItemFailures`, so the event source mapping
//! must enable `ReportBatchItemFailures`.
//!
//! ## Error Handling
//!
//! The crate uses [`domain::CatalogError`] for all errors:
//!
//! ```rust,no_run
//! use catalog_ingest::domain::CatalogError;
//!
//! fn example() -> Result<(), CatalogError> {
//!     let config = catalog_ingest::config::load_config("catalog-ingest.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod lambda;
pub mod logging;
