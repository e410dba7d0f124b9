//! Catalog store abstraction layer
//!
//! This module provides a trait-based abstraction over the durable store,
//! with a DynamoDB implementation for deployments and an in-memory one for
//! dry runs and tests.

pub mod factory;
pub mod memory;
pub mod traits;

pub use factory::create_catalog_store;
pub use memory::MemoryCatalogStore;
pub use traits::{CatalogStore, WriteOutcome};
