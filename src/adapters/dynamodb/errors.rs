//! Classification of DynamoDB transaction failures

use crate::adapters::database::WriteOutcome;
use crate::domain::StoreError;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::transact_write_items::TransactWriteItemsError;

/// Cancellation reason code DynamoDB reports for a failed condition expression
pub const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailed";

/// Position of the title marker put inside the transaction
pub const MARKER_ITEM_INDEX: usize = 0;

/// Maps a failed `TransactWriteItems` call to a write outcome or store error
///
/// A cancelled transaction whose only failure is the title marker's
/// condition means the title already exists; anything else is an error.
/// Errors that never reached the service are connection failures.
pub fn classify_transact_error(err: &SdkError<TransactWriteItemsError>) -> Result<WriteOutcome, StoreError> {
    match err.as_service_error() {
        Some(service_error) => classify_service_error(service_error),
        None => Err(StoreError::ConnectionFailed(
            DisplayErrorContext(err).to_string(),
        )),
    }
}

/// Maps an error returned by the DynamoDB service itself
pub fn classify_service_error(err: &TransactWriteItemsError) -> Result<WriteOutcome, StoreError> {
    match err {
        TransactWriteItemsError::TransactionCanceledException(cancelled) => {
            let codes: Vec<Option<&str>> = cancelled
                .cancellation_reasons()
                .iter()
                .map(|reason| reason.code())
                .collect();

            if is_title_conflict(&codes) {
                Ok(WriteOutcome::ConditionFailed)
            } else {
                Err(StoreError::TransactionCancelled(describe_reasons(&codes)))
            }
        }
        TransactWriteItemsError::ProvisionedThroughputExceededException(e) => {
            Err(StoreError::Throttled(e.to_string()))
        }
        TransactWriteItemsError::RequestLimitExceeded(e) => {
            Err(StoreError::Throttled(e.to_string()))
        }
        TransactWriteItemsError::ResourceNotFoundException(e) => {
            Err(StoreError::InvalidRequest(e.to_string()))
        }
        other => Err(StoreError::WriteFailed(other.to_string())),
    }
}

/// True when the marker's condition failed and no other item was at fault
///
/// DynamoDB reports one reason per transaction item, `None` or `"None"` for
/// items that did not cause the cancellation.
pub fn is_title_conflict(codes: &[Option<&str>]) -> bool {
    let marker_failed = codes
        .get(MARKER_ITEM_INDEX)
        .copied()
        .flatten()
        .is_some_and(|code| code == CONDITIONAL_CHECK_FAILED);

    let others_clean = codes
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != MARKER_ITEM_INDEX)
        .all(|(_, code)| matches!(code, None | Some("None")));

    marker_failed && others_clean
}

fn describe_reasons(codes: &[Option<&str>]) -> String {
    if codes.is_empty() {
        return "no cancellation reasons reported".to_string();
    }

    codes
        .iter()
        .map(|code| code.unwrap_or("None"))
        .collect::<Vec<_>>()
        .join(", ")
}
