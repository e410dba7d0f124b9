//! AWS Lambda entrypoint for SQS-triggered ingestion
//!
//! Translates SQS events into incoming messages and the batch report back
//! into a partial batch response, so SQS only redelivers the messages listed
//! in `batchItemFailures`. The event source mapping must enable
//! `ReportBatchItemFailures`.

use crate::core::ingest::{BatchProcessor, BatchReport};
use crate::domain::IncomingMessage;
use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::sync::Arc;

/// Converts SQS records to incoming messages, keeping batch order
///
/// A record without a body gets an empty body, which fails parsing and is
/// dropped. A record without a message id gets an empty id; if such a record
/// must be retried, the empty identifier makes SQS retry the whole batch.
pub fn messages_from_event(event: SqsEvent) -> Vec<IncomingMessage> {
    event
        .records
        .into_iter()
        .map(|record| {
            if record.message_id.is_none() {
                tracing::warn!("SQS record has no message id");
            }
            IncomingMessage::new(
                record.message_id.unwrap_or_default(),
                record.body.unwrap_or_default(),
            )
        })
        .collect()
}

/// Builds the partial batch response listing the messages to redeliver
pub fn batch_response(report: &BatchReport) -> SqsBatchResponse {
    SqsBatchResponse {
        batch_item_failures: report
            .failed_message_ids
            .iter()
            .map(|id| BatchItemFailure {
                item_identifier: id.as_str().to_string(),
            })
            .collect(),
    }
}

/// Handles one SQS invocation
#[tracing::instrument(skip(processor, event), fields(request_id = %event.context.request_id))]
pub async fn handle_sqs_event(
    processor: &BatchProcessor,
    event: LambdaEvent<SqsEvent>,
) -> Result<SqsBatchResponse, Error> {
    let messages = messages_from_event(event.payload);
    tracing::debug!(records = messages.len(), "Received SQS event");

    let report = processor.process_batch(messages).await;
    Ok(batch_response(&report))
}

/// Runs the Lambda runtime loop until the execution environment shuts down
pub async fn run(processor: Arc<BatchProcessor>) -> Result<(), Error> {
    tracing::info!("Starting Lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let processor = processor.clone();
        async move { handle_sqs_event(&processor, event).await }
    }))
    .await
}
