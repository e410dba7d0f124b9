//! Batch ingestion: validation, atomic writes and partial-failure reporting
//!
//! - [`validate`] - Parsing and field validation of message bodies
//! - [`outcome`] - Per-message verdicts and the batch report
//! - [`batch`] - The batch processor tying them to the store

pub mod batch;
pub mod outcome;
pub mod validate;

pub use batch::{BatchConfig, BatchProcessor};
pub use outcome::{BatchReport, MessageOutcome, SkipReason};
pub use validate::{parse_product, validate_product};
