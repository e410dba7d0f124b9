//! Core business logic for catalog ingestion.
//!
//! # Modules
//!
//! - [`ingest`] - Batch processing of product messages
//!
//! # Ingestion Workflow
//!
//! For every message of a batch, independently:
//!
//! 1. **Parse**: Decode the body as JSON
//! 2. **Validate**: Check title, price, count and description
//! 3. **Write**: Atomically create title marker, product and stock records
//! 4. **Classify**: Created, skipped (invalid or duplicate) or retryable
//!
//! Only retryable messages are reported back for redelivery.
//!
//! # Example
//!
//! ```rust
//! use catalog_ingest::adapters::database::MemoryCatalogStore;
//! use catalog_ingest::core::ingest::{BatchConfig, BatchProcessor};
//! use catalog_ingest::domain::IncomingMessage;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let store = Arc::new(MemoryCatalogStore::new());
//! let processor = BatchProcessor::without_notifications(store, BatchConfig::default());
//!
//! let report = processor
//!     .process_batch(vec![IncomingMessage::new(
//!         "m1",
//!         r#"{"title":"Dune","price":17.99,"count":3}"#,
//!     )])
//!     .await;
//!
//! assert!(report.failed_message_ids.is_empty());
//! # }
//! ```

pub mod ingest;
