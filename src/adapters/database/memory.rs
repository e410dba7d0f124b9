//! In-memory catalog store
//!
//! Backs dry runs and tests. Enforces the same all-or-nothing, unique-title
//! semantics as the DynamoDB adapter, and can be told to fail writes for
//! chosen titles to simulate an unavailable store.

use crate::adapters::database::traits::{CatalogStore, WriteOutcome};
use crate::domain::{
    ProductEntity, ProductId, ProductRecord, ProductWithStock, StockRecord, StoreError,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Tables {
    titles: HashMap<String, ProductId>,
    products: HashMap<ProductId, ProductRecord>,
    stocks: HashMap<ProductId, StockRecord>,
    failing_titles: HashSet<String>,
    fail_all: bool,
    write_attempts: usize,
}

/// Catalog store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    tables: Mutex<Tables>,
}

impl MemoryCatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write for this (normalized) title fail with a store error
    pub fn fail_on_title(&self, title: impl Into<String>) {
        self.lock().failing_titles.insert(title.into());
    }

    /// Make every write fail (or stop failing) with a store error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().fail_all = unavailable;
    }

    /// Number of stored product records
    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }

    /// Number of stored stock records
    pub fn stock_count(&self) -> usize {
        self.lock().stocks.len()
    }

    /// Number of stored title markers
    pub fn title_count(&self) -> usize {
        self.lock().titles.len()
    }

    /// Number of write attempts seen, including failed ones
    pub fn write_attempts(&self) -> usize {
        self.lock().write_attempts
    }

    /// Looks up a product by its normalized title
    pub fn product_by_title(&self, title: &str) -> Option<ProductRecord> {
        let tables = self.lock();
        tables
            .titles
            .get(title)
            .and_then(|id| tables.products.get(id))
            .cloned()
    }

    /// Looks up the stock record of a product
    pub fn stock_for(&self, id: &ProductId) -> Option<StockRecord> {
        self.lock().stocks.get(id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        // A panic while holding the lock cannot leave a half-written entity,
        // so a poisoned lock is still consistent.
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn create_product(&self, entity: &ProductEntity) -> Result<WriteOutcome, StoreError> {
        let mut tables = self.lock();
        tables.write_attempts += 1;

        let title = entity.title().as_str();
        if tables.fail_all || tables.failing_titles.contains(title) {
            return Err(StoreError::WriteFailed(format!(
                "store unavailable for title '{title}'"
            )));
        }

        if tables.titles.contains_key(title) {
            return Ok(WriteOutcome::ConditionFailed);
        }

        let id = entity.id();
        tables.titles.insert(title.to_string(), id);
        tables.products.insert(id, entity.product.clone());
        tables.stocks.insert(id, entity.stock.clone());

        Ok(WriteOutcome::Written)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductWithStock>, StoreError> {
        let tables = self.lock();
        if tables.fail_all {
            return Err(StoreError::ReadFailed("store unavailable".to_string()));
        }

        Ok(tables
            .products
            .get(id)
            .map(|product| ProductWithStock::join(product.clone(), tables.stocks.get(id))))
    }

    async fn list_products(&self) -> Result<Vec<ProductWithStock>, StoreError> {
        let tables = self.lock();
        if tables.fail_all {
            return Err(StoreError::ReadFailed("store unavailable".to_string()));
        }

        let mut products: Vec<_> = tables
            .products
            .values()
            .map(|product| ProductWithStock::join(product.clone(), tables.stocks.get(&product.id)))
            .collect();
        products.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(products)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
