//! Domain error types
//!
//! This module defines the error hierarchy for catalog ingestion.
//! All errors are domain-specific and don't expose AWS SDK types.

use thiserror::Error;

/// Main catalog ingestion error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Durable store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Message validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Durable store errors
///
/// Anything the store reports other than a failed uniqueness condition ends
/// up here. Every write error is treated as retryable by the batch processor.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// The transaction was cancelled for a reason other than the title condition
    #[error("Transaction cancelled: {0}")]
    TransactionCancelled(String),

    /// Throttling or capacity exceeded
    #[error("Request throttled: {0}")]
    Throttled(String),

    /// The store rejected the request itself
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to encode a record for the store
    #[error("Failed to serialize record: {0}")]
    Serialization(String),

    /// Failed to write the records
    #[error("Failed to write records: {0}")]
    WriteFailed(String),

    /// Failed to read records
    #[error("Failed to read records: {0}")]
    ReadFailed(String),
}

/// Notification publishing errors
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Publish call failed
    #[error("Failed to publish notification: {0}")]
    PublishFailed(String),

    /// Failed to encode the event
    #[error("Failed to serialize notification: {0}")]
    Serialization(String),
}

/// Reasons a message is rejected during parsing or field validation
///
/// These are terminal: no redelivery can fix malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Body is not valid JSON
    #[error("malformed JSON payload: {0}")]
    MalformedJson(String),

    /// Body is valid JSON but not an object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required field is absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Title is present but not a string
    #[error("field 'title' must be a string")]
    TitleNotString,

    /// Title is blank after trimming
    #[error("field 'title' must not be empty")]
    EmptyTitle,

    /// A numeric field could not be converted to a finite number
    #[error("field '{field}' is not a finite number")]
    NotANumber {
        /// Field name
        field: &'static str,
    },

    /// A numeric field is zero or negative
    #[error("field '{field}' must be greater than zero, got {value}")]
    NotPositive {
        /// Field name
        field: &'static str,
        /// Coerced value
        value: f64,
    },

    /// Description is present but not a string
    #[error("field 'description' must be a string")]
    DescriptionNotString,
}

// Conversion from std::io::Error
impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Configuration(format!("TOML parse error: {err}"))
    }
}
