//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - JSON-formatted logs for CloudWatch
//! - Pretty logs for local runs
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use catalog_ingest::logging::init_logging;
//! use catalog_ingest::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level};
