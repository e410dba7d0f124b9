//! Integration tests for the SQS Lambda handler
//!
//! Events are built from the JSON documents SQS delivers, so the tests also
//! cover the wire shape of the partial batch response.

use catalog_ingest::adapters::database::MemoryCatalogStore;
use catalog_ingest::core::ingest::{BatchConfig, BatchProcessor};
use catalog_ingest::lambda::handle_sqs_event;
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};
use std::sync::Arc;

fn sqs_event(records: Value) -> LambdaEvent<SqsEvent> {
    let payload: SqsEvent = serde_json::from_value(json!({ "Records": records })).unwrap();
    LambdaEvent::new(payload, Context::default())
}

fn record(id: &str, body: Value) -> Value {
    json!({
        "messageId": id,
        "receiptHandle": format!("handle-{id}"),
        "body": body.to_string(),
        "eventSource": "aws:sqs",
        "eventSourceARN": "arn:aws:sqs:eu-west-1:123456789012:catalogItemsQueue",
        "awsRegion": "eu-west-1",
        "attributes": {},
        "messageAttributes": {}
    })
}

#[tokio::test]
async fn test_handler_reports_only_store_failures() {
    let store = Arc::new(MemoryCatalogStore::new());
    store.fail_on_title("Broken");
    let processor = BatchProcessor::without_notifications(store.clone(), BatchConfig::default());

    let response = handle_sqs_event(
        &processor,
        sqs_event(json!([
            record("m1", json!({"title": "Broken", "price": 10, "count": 5})),
            record("m2", json!({"title": "Dune", "price": 17.99, "count": 3})),
            record("m3", json!({"title": "", "price": 10, "count": 5})),
        ])),
    )
    .await
    .unwrap();

    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(
        wire,
        json!({ "batchItemFailures": [{ "itemIdentifier": "m1" }] })
    );
    assert_eq!(store.product_count(), 1);
}

#[tokio::test]
async fn test_handler_all_success_gives_empty_failures() {
    let store = Arc::new(MemoryCatalogStore::new());
    let processor = BatchProcessor::without_notifications(store.clone(), BatchConfig::new(4));

    let response = handle_sqs_event(
        &processor,
        sqs_event(json!([
            record("m1", json!({"title": "A", "price": 1, "count": 1})),
            record("m2", json!({"title": "A", "price": 1, "count": 1})),
            record("m3", json!({"title": "B", "price": "2.50", "count": "4"})),
        ])),
    )
    .await
    .unwrap();

    assert!(response.batch_item_failures.is_empty());
    assert_eq!(store.product_count(), 2);
}

#[tokio::test]
async fn test_handler_record_without_body_is_skipped() {
    let store = Arc::new(MemoryCatalogStore::new());
    let processor = BatchProcessor::without_notifications(store.clone(), BatchConfig::default());

    let response = handle_sqs_event(&processor, sqs_event(json!([{ "messageId": "m1" }])))
        .await
        .unwrap();

    assert!(response.batch_item_failures.is_empty());
    assert_eq!(store.write_attempts(), 0);
}

#[tokio::test]
async fn test_handler_empty_event() {
    let store = Arc::new(MemoryCatalogStore::new());
    let processor = BatchProcessor::without_notifications(store, BatchConfig::default());

    let response = handle_sqs_event(&processor, sqs_event(json!([])))
        .await
        .unwrap();

    assert!(response.batch_item_failures.is_empty());
}
