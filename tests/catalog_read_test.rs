//! Integration tests for reading products back after ingestion

use catalog_ingest::adapters::database::{CatalogStore, MemoryCatalogStore};
use catalog_ingest::core::ingest::{BatchConfig, BatchProcessor};
use catalog_ingest::domain::{IncomingMessage, ProductId, StoreError};
use std::sync::Arc;

async fn ingest(store: Arc<MemoryCatalogStore>, bodies: &[&str]) {
    let processor = BatchProcessor::without_notifications(store, BatchConfig::new(1));
    let messages = bodies
        .iter()
        .enumerate()
        .map(|(index, body)| IncomingMessage::new(format!("m{index}"), *body))
        .collect();
    let report = processor.process_batch(messages).await;
    assert!(report.is_successful());
}

#[tokio::test]
async fn test_ingested_product_reads_back_with_stock() {
    let store = Arc::new(MemoryCatalogStore::new());
    ingest(
        store.clone(),
        &[r#"{"title":" Dune ","description":"Spice","price":"17.99","count":3}"#],
    )
    .await;

    let id = store.product_by_title("Dune").unwrap().id;
    let product = store.get_product(&id).await.unwrap().unwrap();

    assert_eq!(product.title.as_str(), "Dune");
    assert_eq!(product.price, 17.99);
    assert_eq!(product.count, 3.0);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["description"], "Spice");
}

#[tokio::test]
async fn test_unknown_product_is_none() {
    let store = MemoryCatalogStore::new();
    assert!(store.get_product(&ProductId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_title_and_skips_rejected() {
    let store = Arc::new(MemoryCatalogStore::new());
    ingest(
        store.clone(),
        &[
            r#"{"title":"Solaris","price":9,"count":1}"#,
            r#"{"title":"Anathem","price":12,"count":2}"#,
            r#"{"title":"Anathem","price":13,"count":5}"#,
            r#"{"title":"","price":1,"count":1}"#,
        ],
    )
    .await;

    let products = store.list_products().await.unwrap();
    let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Anathem", "Solaris"]);
    assert_eq!(products[0].count, 2.0);
}

#[tokio::test]
async fn test_reads_fail_when_store_unavailable() {
    let store = MemoryCatalogStore::new();
    store.set_unavailable(true);

    assert!(matches!(
        store.list_products().await,
        Err(StoreError::ReadFailed(_))
    ));
    assert!(matches!(
        store.get_product(&ProductId::generate()).await,
        Err(StoreError::ReadFailed(_))
    ));
}
