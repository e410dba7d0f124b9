//! Domain identifier types with validation
//!
//! Newtype wrappers that keep product identifiers, queue message identifiers
//! and normalized titles from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Product identifier newtype wrapper
///
/// Generated once per successfully validated message; keys both the product
/// record and its stock record. Only version 4 UUIDs are accepted when
/// parsing.
///
/// # Examples
///
/// ```
/// use catalog_ingest::domain::ids::ProductId;
/// use std::str::FromStr;
///
/// let id = ProductId::from_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();
/// assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random (v4) product identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::parse_str(s.trim()).map_err(|e| format!("Invalid product ID '{s}': {e}"))?;
        if uuid.get_version_num() != 4 {
            return Err(format!("Invalid product ID '{s}': expected a UUID v4"));
        }
        Ok(Self(uuid))
    }
}

/// Queue message identifier
///
/// Assigned by the delivery platform and used only to report which messages
/// should be redelivered. It carries no business meaning, so any string
/// (including an empty one) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a message identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the message ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Trims surrounding whitespace, including the byte order mark U+FEFF
pub(crate) fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Normalized product title
///
/// The title is trimmed of surrounding whitespace and must not be empty.
/// This is the key of the uniqueness marker, so two titles that differ only
/// in surrounding whitespace collide. Case is preserved and significant.
///
/// # Examples
///
/// ```
/// use catalog_ingest::domain::ids::ProductTitle;
///
/// let title = ProductTitle::new("  Dune ").unwrap();
/// assert_eq!(title.as_str(), "Dune");
/// assert!(ProductTitle::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductTitle(String);

impl ProductTitle {
    /// Creates a normalized title
    ///
    /// # Returns
    ///
    /// Returns `Err` if the title is empty after trimming
    pub fn new(title: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = trim_text(title.as_ref());
        if trimmed.is_empty() {
            return Err("Product title cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductTitle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_generate_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_product_id_from_str_invalid() {
        assert!(ProductId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_product_id_roundtrip_display() {
        let id = ProductId::generate();
        let parsed = ProductId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_product_id_requires_v4() {
        // Version 1 (time-based) UUID
        assert!(ProductId::from_str("c232ab00-9414-11ec-b3c8-9f6bdeced846").is_err());
        assert!(ProductId::from_str(" 7c9e6679-7425-40de-944b-e07fc1f90ae7 ").is_ok());
    }

    #[test]
    fn test_message_id_accepts_empty() {
        let id = MessageId::new("");
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn test_product_title_trims() {
        let title = ProductTitle::new("\t The Hobbit \n").unwrap();
        assert_eq!(title.as_str(), "The Hobbit");
    }

    #[test]
    fn test_product_title_rejects_blank() {
        assert!(ProductTitle::new("").is_err());
        assert!(ProductTitle::new(" \t\n").is_err());
    }

    #[test]
    fn test_product_title_strips_byte_order_mark() {
        assert!(ProductTitle::new("\u{feff}").is_err());
        assert!(ProductTitle::new("\u{feff} \u{feff}").is_err());

        let title = ProductTitle::new("\u{feff}Dune\u{feff}").unwrap();
        assert_eq!(title.as_str(), "Dune");
    }

    #[test]
    fn test_product_title_case_sensitive() {
        let a = ProductTitle::new("Dune").unwrap();
        let b = ProductTitle::new("dune").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_product_title_serializes_as_string() {
        let title = ProductTitle::new("Dune").unwrap();
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"Dune\"");
    }
}
