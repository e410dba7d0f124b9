//! Product domain models
//!
//! Covers the life of one ingestion message: the raw [`IncomingMessage`], the
//! validated [`NewProduct`], and the [`ProductEntity`] triple written to the
//! store in a single atomic group.

use super::ids::{MessageId, ProductId, ProductTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message of an inbound batch
///
/// The body is untrusted text; the identifier is only ever used for failure
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Delivery-platform identifier
    pub id: MessageId,

    /// Raw message body, expected to be a JSON product object
    pub body: String,
}

impl IncomingMessage {
    /// Creates a new incoming message
    pub fn new(id: impl Into<MessageId>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// A product that passed validation
///
/// Immutable once produced: the title is trimmed and the numeric fields are
/// finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    title: ProductTitle,
    description: Option<String>,
    price: f64,
    count: f64,
}

impl NewProduct {
    /// Creates a validated product from already checked parts
    pub(crate) fn new(
        title: ProductTitle,
        description: Option<String>,
        price: f64,
        count: f64,
    ) -> Self {
        Self {
            title,
            description,
            price,
            count,
        }
    }

    /// Normalized title
    pub fn title(&self) -> &ProductTitle {
        &self.title
    }

    /// Optional description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Price, always `> 0`
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock count, always `> 0`
    pub fn count(&self) -> f64 {
        self.count
    }
}

/// Uniqueness marker keyed by normalized title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMarker {
    /// Normalized title (partition key)
    pub title: ProductTitle,
}

/// Primary product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product identifier (partition key)
    pub id: ProductId,

    /// Normalized title
    pub title: ProductTitle,

    /// Optional description, omitted from the item when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price
    pub price: f64,
}

/// Stock (quantity) record keyed by the product identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product identifier (partition key)
    pub product_id: ProductId,

    /// Units in stock
    pub count: f64,
}

/// The three records that make up one persisted product
///
/// Written as one atomic group: all three exist or none do.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntity {
    /// Uniqueness marker, conditioned on the title not existing yet
    pub marker: TitleMarker,

    /// Primary product record
    pub product: ProductRecord,

    /// Associated stock record
    pub stock: StockRecord,
}

impl ProductEntity {
    /// Builds the record triple for a validated product under a new identifier
    pub fn new(id: ProductId, product: &NewProduct) -> Self {
        Self {
            marker: TitleMarker {
                title: product.title().clone(),
            },
            product: ProductRecord {
                id,
                title: product.title().clone(),
                description: product.description().map(str::to_string),
                price: product.price(),
            },
            stock: StockRecord {
                product_id: id,
                count: product.count(),
            },
        }
    }

    /// Product identifier shared by the product and stock records
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Normalized title
    pub fn title(&self) -> &ProductTitle {
        &self.marker.title
    }
}

/// A product that was just written, handed to the success notifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedProduct {
    /// New product identifier
    pub id: ProductId,

    /// Normalized title
    pub title: ProductTitle,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price
    pub price: f64,

    /// Units in stock
    pub count: f64,

    /// When the write was acknowledged by the store
    pub created_at: DateTime<Utc>,
}

impl CreatedProduct {
    /// Captures a written entity, timestamped now
    pub fn from_entity(entity: &ProductEntity) -> Self {
        Self {
            id: entity.product.id,
            title: entity.product.title.clone(),
            description: entity.product.description.clone(),
            price: entity.product.price,
            count: entity.stock.count,
            created_at: Utc::now(),
        }
    }
}

/// A stored product joined with its stock
///
/// A product without a stock record reads as zero units in stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductWithStock {
    /// Product identifier
    pub id: ProductId,

    /// Normalized title
    pub title: ProductTitle,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price
    pub price: f64,

    /// Units in stock
    pub count: f64,
}

impl ProductWithStock {
    /// Joins a product record with its stock record, if any
    pub fn join(product: ProductRecord, stock: Option<&StockRecord>) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            count: stock.map_or(0.0, |s| s.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct::new(
            ProductTitle::new("Dune").unwrap(),
            Some("Desert planet".to_string()),
            17.99,
            4.0,
        )
    }

    #[test]
    fn test_entity_shares_product_id() {
        let id = ProductId::generate();
        let entity = ProductEntity::new(id, &sample());

        assert_eq!(entity.id(), id);
        assert_eq!(entity.stock.product_id, id);
        assert_eq!(entity.title().as_str(), "Dune");
        assert_eq!(entity.product.price, 17.99);
        assert_eq!(entity.stock.count, 4.0);
    }

    #[test]
    fn test_product_record_omits_missing_description() {
        let product = NewProduct::new(ProductTitle::new("Dune").unwrap(), None, 1.0, 1.0);
        let entity = ProductEntity::new(ProductId::generate(), &product);
        let json = serde_json::to_value(&entity.product).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["title"], "Dune");
    }

    #[test]
    fn test_join_without_stock_counts_zero() {
        let entity = ProductEntity::new(ProductId::generate(), &sample());

        let joined = ProductWithStock::join(entity.product.clone(), Some(&entity.stock));
        assert_eq!(joined.count, 4.0);
        assert_eq!(joined.id, entity.id());

        let orphan = ProductWithStock::join(entity.product, None);
        assert_eq!(orphan.count, 0.0);
        assert_eq!(orphan.description.as_deref(), Some("Desert planet"));
    }

    #[test]
    fn test_created_product_from_entity() {
        let entity = ProductEntity::new(ProductId::generate(), &sample());
        let created = CreatedProduct::from_entity(&entity);

        assert_eq!(created.id, entity.id());
        assert_eq!(created.count, 4.0);
        assert_eq!(created.description.as_deref(), Some("Desert planet"));
    }
}
