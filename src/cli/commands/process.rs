//! Process command implementation
//!
//! Replays a local file through the batch processor. The file holds either
//! an SQS event (as delivered to the Lambda) or a JSON array of products.

use super::build_processor;
use crate::config::IngestConfig;
use crate::domain::{CatalogError, IncomingMessage, Result, ValidationError};
use crate::lambda::messages_from_event;
use aws_lambda_events::event::sqs::SqsEvent;
use clap::Args;
use serde_json::Value;
use std::fs;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// SQS event JSON or JSON array of product objects
    pub file: String,

    /// Write to an in-memory store instead of DynamoDB
    #[arg(long)]
    pub dry_run: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config: &IngestConfig) -> anyhow::Result<i32> {
        let mut config = config.clone();
        if self.dry_run {
            config.application.dry_run = true;
        }

        let contents = fs::read_to_string(&self.file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", self.file, e))?;
        let messages = messages_from_document(&contents)?;

        tracing::info!(file = %self.file, messages = messages.len(), "Processing local batch");

        if config.application.dry_run {
            println!("🧪 DRY RUN MODE - nothing is written to DynamoDB");
        }
        println!("📦 Processing {} message(s) from {}", messages.len(), self.file);
        println!();

        let processor = build_processor(&config).await?;
        let report = processor.process_batch(messages).await;

        println!("Batch Summary:");
        println!("  Total: {}", report.total);
        println!("  Created: {}", report.created);
        println!("  Skipped (invalid): {}", report.skipped_invalid);
        println!("  Skipped (duplicate): {}", report.duplicates_skipped);
        println!("  Failed: {}", report.failed());
        if report.notification_failures > 0 {
            println!("  Notification failures: {}", report.notification_failures);
        }
        println!("  Duration: {} ms", report.duration.as_millis());
        println!();

        if report.is_successful() {
            println!("✅ No messages need redelivery");
            Ok(0)
        } else {
            println!("⚠️  Messages to redeliver:");
            for id in report.failed_ids() {
                println!("   - {id}");
            }
            Ok(1)
        }
    }
}

/// Turns a local document into messages, keeping document order
///
/// An object with `Records` is read as an SQS event. An array is read as one
/// message per element with ids `item-1`, `item-2`, ...; string elements are
/// taken as the raw body, other elements are serialized back to JSON.
pub fn messages_from_document(contents: &str) -> Result<Vec<IncomingMessage>> {
    let document: Value = serde_json::from_str(contents)?;

    if document.get("Records").is_some() {
        let event: SqsEvent = serde_json::from_value(document)?;
        return Ok(messages_from_event(event));
    }

    match document {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let body = match item {
                    Value::String(raw) => raw,
                    other => other.to_string(),
                };
                IncomingMessage::new(format!("item-{}", index + 1), body)
            })
            .collect()),
        _ => Err(CatalogError::Validation(ValidationError::MalformedJson(
            "expected an SQS event or a JSON array of products".to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_document_from_sqs_event() {
        let messages = messages_from_document(
            r#"{"Records":[{"messageId":"m1","body":"{\"title\":\"A\",\"price\":1,\"count\":1}"}]}"#,
        )
        .unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_str(), "m1");
    }

    #[test]
    fn test_document_from_array() {
        let messages = messages_from_document(
            r#"[{"title":"A","price":1,"count":1}, "not json", {"title":"B"}]"#,
        )
        .unwrap();

        let ids: Vec<_> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["item-1", "item-2", "item-3"]);
        assert_eq!(messages[1].body, "not json");
        assert!(messages[0].body.contains("\"title\":\"A\""));
    }

    #[test]
    fn test_document_rejects_other_shapes() {
        assert!(messages_from_document(r#"{"title":"A"}"#).is_err());
        assert!(messages_from_document("not json").is_err());
    }

    #[tokio::test]
    async fn test_process_dry_run_exit_codes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"A","price":10,"count":5}}, {{"title":"A","price":10,"count":5}}, {{"title":""}}]"#
        )
        .unwrap();

        let args = ProcessArgs {
            file: file.path().to_string_lossy().to_string(),
            dry_run: true,
        };
        let code = args.execute(&IngestConfig::default()).await.unwrap();
        assert_eq!(code, 0);
    }
}
