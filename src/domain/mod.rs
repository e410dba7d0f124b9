//! Domain models and types for catalog ingestion.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ProductId`], [`MessageId`], [`ProductTitle`])
//! - **Domain models** ([`IncomingMessage`], [`NewProduct`], [`ProductEntity`], [`ProductWithStock`])
//! - **Error types** ([`CatalogError`], [`StoreError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Queue message identifiers and product identifiers are distinct types, so a
//! message id can never be written as a product key:
//!
//! ```rust
//! use catalog_ingest::domain::{MessageId, ProductId};
//!
//! let message_id = MessageId::new("059f36b4-87a3-44ab-83d2-661975830a7d");
//! let product_id = ProductId::generate();
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: ProductId = message_id;
//! ```

pub mod errors;
pub mod ids;
pub mod product;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CatalogError, NotificationError, StoreError, ValidationError};
pub use ids::{MessageId, ProductId, ProductTitle};
pub use product::{
    CreatedProduct, IncomingMessage, NewProduct, ProductEntity, ProductRecord, ProductWithStock,
    StockRecord, TitleMarker,
};
pub use result::Result;
