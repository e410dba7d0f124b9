//! Amazon DynamoDB adapter
//!
//! Persists products with one `TransactWriteItems` call per product:
//! a conditional put of the title marker, then the product and stock puts.

pub mod adapter;
pub mod errors;

pub use adapter::DynamoDbCatalogStore;
