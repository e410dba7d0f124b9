//! Catalog store abstraction
//!
//! This module defines the trait that durable store adapters must implement
//! to persist and read back products.

use crate::domain::{ProductEntity, ProductId, ProductWithStock, StoreError};
use async_trait::async_trait;

/// Outcome of an atomic product write that reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Marker, product and stock records were all written
    Written,

    /// The title marker already exists; nothing was written
    ConditionFailed,
}

/// Durable store for products
///
/// Implementations must write the three records of a [`ProductEntity`] as a
/// single all-or-nothing group, with the title marker conditioned on no
/// marker for that title existing yet. A failed condition is reported as
/// [`WriteOutcome::ConditionFailed`]; every other failure is an error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Atomically creates the marker, product and stock records
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] for any failure other than the title
    /// condition (connectivity, throttling, rejected requests).
    async fn create_product(&self, entity: &ProductEntity) -> Result<WriteOutcome, StoreError>;

    /// Reads one product joined with its stock
    ///
    /// Returns `Ok(None)` when no product record has this identifier.
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductWithStock>, StoreError>;

    /// Reads every product joined with its stock, ordered by title
    async fn list_products(&self) -> Result<Vec<ProductWithStock>, StoreError>;

    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;
}
