//! Per-message outcomes and the batch report they fold into

use crate::domain::{MessageId, ProductId, ProductTitle, StoreError, ValidationError};
use std::fmt;
use std::time::Duration;

/// Why a message was dropped without being retried
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Payload or fields are invalid; redelivery can never succeed
    Invalid(ValidationError),

    /// A product with this title already exists
    Duplicate(ProductTitle),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Invalid(e) => write!(f, "invalid message: {e}"),
            SkipReason::Duplicate(title) => write!(f, "duplicate title '{title}'"),
        }
    }
}

/// Verdict for a single message
#[derive(Debug)]
pub enum MessageOutcome {
    /// The product was written
    Created {
        /// Identifier of the new product
        product_id: ProductId,
        /// Whether the success notification was published
        notified: bool,
    },

    /// Terminal, acknowledged without a write
    Skipped(SkipReason),

    /// The write failed in a way redelivery may fix
    Retryable(StoreError),
}

/// Result of processing one batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of messages in the batch
    pub total: usize,

    /// Number of products created
    pub created: usize,

    /// Number of messages dropped as invalid
    pub skipped_invalid: usize,

    /// Number of messages dropped as duplicates
    pub duplicates_skipped: usize,

    /// Number of created products whose notification failed
    pub notification_failures: usize,

    /// Messages to redeliver, in batch order
    pub failed_message_ids: Vec<MessageId>,

    /// Wall-clock time spent on the batch
    pub duration: Duration,
}

impl BatchReport {
    /// Create a new empty batch report
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one message outcome into the report
    pub fn record(&mut self, message_id: MessageId, outcome: &MessageOutcome) {
        self.total += 1;
        match outcome {
            MessageOutcome::Created { notified, .. } => {
                self.created += 1;
                if !notified {
                    self.notification_failures += 1;
                }
            }
            MessageOutcome::Skipped(SkipReason::Invalid(_)) => self.skipped_invalid += 1,
            MessageOutcome::Skipped(SkipReason::Duplicate(_)) => self.duplicates_skipped += 1,
            MessageOutcome::Retryable(_) => self.failed_message_ids.push(message_id),
        }
    }

    /// Number of messages to redeliver
    pub fn failed(&self) -> usize {
        self.failed_message_ids.len()
    }

    /// Failed identifiers as plain strings
    pub fn failed_ids(&self) -> Vec<String> {
        self.failed_message_ids
            .iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    /// True when no message needs redelivery
    pub fn is_successful(&self) -> bool {
        self.failed_message_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(notified: bool) -> MessageOutcome {
        MessageOutcome::Created {
            product_id: ProductId::generate(),
            notified,
        }
    }

    #[test]
    fn test_record_counts_each_outcome() {
        let mut report = BatchReport::new();

        report.record("m1".into(), &created(true));
        report.record("m2".into(), &created(false));
        report.record(
            "m3".into(),
            &MessageOutcome::Skipped(SkipReason::Invalid(ValidationError::EmptyTitle)),
        );
        report.record(
            "m4".into(),
            &MessageOutcome::Skipped(SkipReason::Duplicate(ProductTitle::new("A").unwrap())),
        );
        report.record(
            "m5".into(),
            &MessageOutcome::Retryable(StoreError::Throttled("slow down".to_string())),
        );

        assert_eq!(report.total, 5);
        assert_eq!(report.created, 2);
        assert_eq!(report.notification_failures, 1);
        assert_eq!(report.skipped_invalid, 1);
        assert_eq!(report.duplicates_skipped, 1);
        assert_eq!(report.failed_ids(), vec!["m5".to_string()]);
        assert!(!report.is_successful());
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::Duplicate(ProductTitle::new("Dune").unwrap());
        assert_eq!(reason.to_string(), "duplicate title 'Dune'");
    }
}
