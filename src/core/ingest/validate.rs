//! Message parsing and field validation
//!
//! Turns an untrusted message body into a [`NewProduct`] or the terminal
//! [`ValidationError`] explaining why the message is dropped.

use crate::domain::ids::trim_text;
use crate::domain::{NewProduct, ProductTitle, ValidationError};
use serde_json::{Map, Value};

/// Parses a raw message body and validates it as a product
///
/// # Errors
///
/// Returns [`ValidationError::MalformedJson`] when the body is not JSON and
/// the field-level variants when the object does not describe a product.
pub fn parse_product(body: &str) -> Result<NewProduct, ValidationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
    validate_product(&value)
}

/// Validates an already parsed JSON value as a product
///
/// Rules:
/// - `title` must be a string that is non-empty after trimming
/// - `price` and `count` are coerced to numbers (JSON numbers or numeric
///   strings) and must be finite and greater than zero
/// - `description`, when present and not null, must be a string
pub fn validate_product(value: &Value) -> Result<NewProduct, ValidationError> {
    let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let title = match object.get("title") {
        None => return Err(ValidationError::MissingField("title")),
        Some(Value::String(raw)) => {
            ProductTitle::new(raw).map_err(|_| ValidationError::EmptyTitle)?
        }
        Some(_) => return Err(ValidationError::TitleNotString),
    };

    let price = positive_number(object, "price")?;
    let count = positive_number(object, "count")?;

    let description = match object.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => return Err(ValidationError::DescriptionNotString),
    };

    Ok(NewProduct::new(title, description, price, count))
}

fn positive_number(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ValidationError> {
    let raw = object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?;

    let value = coerce_number(raw).ok_or(ValidationError::NotANumber { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}

/// Numeric conversion for producer payloads
///
/// Accepts JSON numbers and strings holding a decimal number (surrounding
/// whitespace ignored). Booleans, null, arrays and objects are not numbers.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = trim_text(s);
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_valid_product() {
        let product = parse_product(
            r#"{"title":"  Dune  ","price":17.99,"count":3,"description":"Spice"}"#,
        )
        .unwrap();

        assert_eq!(product.title().as_str(), "Dune");
        assert_eq!(product.price(), 17.99);
        assert_eq!(product.count(), 3.0);
        assert_eq!(product.description(), Some("Spice"));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let product = validate_product(&json!({"title": "A", "price": " 10.5 ", "count": "2"}))
            .unwrap();

        assert_eq!(product.price(), 10.5);
        assert_eq!(product.count(), 2.0);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let product = parse_product(
            "{\"title\":\"\u{feff} Dune \u{feff}\",\"price\":\"\u{feff}10\",\"count\":1}",
        )
        .unwrap();

        assert_eq!(product.title().as_str(), "Dune");
        assert_eq!(product.price(), 10.0);

        let err = parse_product("{\"title\":\"\u{feff}\",\"price\":1,\"count\":1}").unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn test_null_description_is_absent() {
        let product =
            validate_product(&json!({"title": "A", "price": 1, "count": 1, "description": null}))
                .unwrap();
        assert_eq!(product.description(), None);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_product("invalid-json").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedJson(_)));
    }

    #[test_case(json!("just a string") ; "string payload")]
    #[test_case(json!([1, 2, 3]) ; "array payload")]
    #[test_case(json!(null) ; "null payload")]
    fn test_non_object_payload(value: Value) {
        assert_eq!(
            validate_product(&value).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test_case(json!({"price": 1, "count": 1}), ValidationError::MissingField("title") ; "missing title")]
    #[test_case(json!({"title": 42, "price": 1, "count": 1}), ValidationError::TitleNotString ; "numeric title")]
    #[test_case(json!({"title": "", "price": 1, "count": 1}), ValidationError::EmptyTitle ; "empty title")]
    #[test_case(json!({"title": "   ", "price": 1, "count": 1}), ValidationError::EmptyTitle ; "blank title")]
    #[test_case(json!({"title": "\u{feff}", "price": 1, "count": 1}), ValidationError::EmptyTitle ; "byte order mark title")]
    #[test_case(json!({"title": "A", "count": 1}), ValidationError::MissingField("price") ; "missing price")]
    #[test_case(json!({"title": "A", "price": "ten", "count": 1}), ValidationError::NotANumber { field: "price" } ; "non numeric price")]
    #[test_case(json!({"title": "A", "price": "", "count": 1}), ValidationError::NotANumber { field: "price" } ; "empty price string")]
    #[test_case(json!({"title": "A", "price": true, "count": 1}), ValidationError::NotANumber { field: "price" } ; "boolean price")]
    #[test_case(json!({"title": "A", "price": "inf", "count": 1}), ValidationError::NotANumber { field: "price" } ; "infinite price")]
    #[test_case(json!({"title": "A", "price": -1, "count": 1}), ValidationError::NotPositive { field: "price", value: -1.0 } ; "negative price")]
    #[test_case(json!({"title": "A", "price": 0, "count": 1}), ValidationError::NotPositive { field: "price", value: 0.0 } ; "zero price")]
    #[test_case(json!({"title": "A", "price": 1}), ValidationError::MissingField("count") ; "missing count")]
    #[test_case(json!({"title": "A", "price": 1, "count": null}), ValidationError::NotANumber { field: "count" } ; "null count")]
    #[test_case(json!({"title": "A", "price": 1, "count": 0}), ValidationError::NotPositive { field: "count", value: 0.0 } ; "zero count")]
    #[test_case(json!({"title": "A", "price": 1, "count": 1, "description": 7}), ValidationError::DescriptionNotString ; "numeric description")]
    fn test_invalid_fields(value: Value, expected: ValidationError) {
        assert_eq!(validate_product(&value).unwrap_err(), expected);
    }
}
