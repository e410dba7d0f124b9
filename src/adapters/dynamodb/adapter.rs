//! DynamoDB implementation of [`CatalogStore`]
//!
//! Writes go through one transaction per product. Reads fetch the product
//! and stock tables separately and join them by product id.

use super::errors::classify_transact_error;
use crate::adapters::database::{CatalogStore, WriteOutcome};
use crate::config::DynamoDbConfig;
use crate::domain::{
    ProductEntity, ProductId, ProductRecord, ProductWithStock, StockRecord, StoreError,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, Put, TransactWriteItem};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Catalog store backed by three DynamoDB tables
#[derive(Debug, Clone)]
pub struct DynamoDbCatalogStore {
    client: aws_sdk_dynamodb::Client,
    tables: DynamoDbConfig,
}

impl DynamoDbCatalogStore {
    /// Create a store from a shared SDK configuration
    pub fn new(sdk_config: &SdkConfig, tables: DynamoDbConfig) -> Self {
        Self::new_from_client(aws_sdk_dynamodb::Client::new(sdk_config), tables)
    }

    /// Create a store around an existing client
    pub fn new_from_client(client: aws_sdk_dynamodb::Client, tables: DynamoDbConfig) -> Self {
        Self { client, tables }
    }

    /// Builds the three transaction items, title marker first
    fn transact_items(&self, entity: &ProductEntity) -> Result<Vec<TransactWriteItem>, StoreError> {
        let marker = Put::builder()
            .table_name(&self.tables.product_titles_table)
            .set_item(Some(to_item(&entity.marker)?))
            .condition_expression("attribute_not_exists(#title)")
            .expression_attribute_names("#title", "title")
            .build()
            .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;

        let product = Put::builder()
            .table_name(&self.tables.products_table)
            .set_item(Some(to_item(&entity.product)?))
            .build()
            .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;

        let stock = Put::builder()
            .table_name(&self.tables.stocks_table)
            .set_item(Some(to_item(&entity.stock)?))
            .build()
            .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;

        Ok(vec![
            TransactWriteItem::builder().put(marker).build(),
            TransactWriteItem::builder().put(product).build(),
            TransactWriteItem::builder().put(stock).build(),
        ])
    }

    /// Fetches one item by its single-attribute key
    async fn get_item(
        &self,
        table: &str,
        key: &str,
        id: &ProductId,
    ) -> Result<Option<HashMap<String, AttributeValue>>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(key, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::ReadFailed(DisplayErrorContext(&e).to_string()))?;

        Ok(output.item)
    }

    /// Reads every item of a table, following pagination
    async fn scan_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let items: Vec<HashMap<String, AttributeValue>> = self
            .client
            .scan()
            .table_name(table)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(|e| StoreError::ReadFailed(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(table = %table, items = items.len(), "Scanned table");
        serde_dynamo::from_items(items).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl CatalogStore for DynamoDbCatalogStore {
    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id(), title = %entity.title()))]
    async fn create_product(&self, entity: &ProductEntity) -> Result<WriteOutcome, StoreError> {
        let items = self.transact_items(entity)?;

        match self
            .client
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await
        {
            Ok(_) => Ok(WriteOutcome::Written),
            Err(e) => {
                let classified = classify_transact_error(&e);
                if let Err(store_error) = &classified {
                    tracing::debug!(error = %store_error, "TransactWriteItems failed");
                }
                classified
            }
        }
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductWithStock>, StoreError> {
        let Some(item) = self.get_item(&self.tables.products_table, "id", id).await? else {
            return Ok(None);
        };
        let product: ProductRecord = from_item(item)?;

        let stock: Option<StockRecord> = self
            .get_item(&self.tables.stocks_table, "product_id", id)
            .await?
            .map(from_item)
            .transpose()?;

        Ok(Some(ProductWithStock::join(product, stock.as_ref())))
    }

    async fn list_products(&self) -> Result<Vec<ProductWithStock>, StoreError> {
        let products: Vec<ProductRecord> = self.scan_table(&self.tables.products_table).await?;
        let stocks: Vec<StockRecord> = self.scan_table(&self.tables.stocks_table).await?;
        Ok(join_stocks(products, stocks))
    }

    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }
}

/// Joins scanned products with scanned stocks, ordered by title
fn join_stocks(products: Vec<ProductRecord>, stocks: Vec<StockRecord>) -> Vec<ProductWithStock> {
    let stocks: HashMap<ProductId, StockRecord> = stocks
        .into_iter()
        .map(|stock| (stock.product_id, stock))
        .collect();

    let mut joined: Vec<_> = products
        .into_iter()
        .map(|product| {
            let stock = stocks.get(&product.id);
            ProductWithStock::join(product, stock)
        })
        .collect();
    joined.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
    joined
}

fn from_item<T: DeserializeOwned>(item: HashMap<String, AttributeValue>) -> Result<T, StoreError> {
    serde_dynamo::from_item(item).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn to_item<T: Serialize>(record: &T) -> Result<HashMap<String, AttributeValue>, StoreError> {
    serde_dynamo::to_item(record).map_err(|e| StoreError::Serialization(e.to_string()))
}
