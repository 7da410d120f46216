// web_app/api/payload.rs - Shape validation for catalog payloads
//
// The catalog is loosely typed: listings come back either as a bare array
// or wrapped in `{ "products": [...] }`, and categories as strings or as
// objects. Everything is checked here before it reaches the state machine.

use serde::Deserialize;
use serde_json::Value;

use crate::web_app::error::{StorefrontError, StorefrontResult};
use crate::web_app::model::{Product, ProductId};

/// Field holding the array in wrapped listing responses
const PRODUCTS_FIELD: &str = "products";

/// Decode a listing payload into products.
pub fn decode_products(value: Value) -> StorefrontResult<Vec<Product>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(PRODUCTS_FIELD) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(StorefrontError::malformed(format!(
                    "'{}' is {}, expected an array",
                    PRODUCTS_FIELD,
                    kind_of(&other)
                )))
            }
            None => {
                return Err(StorefrontError::malformed(format!(
                    "object without a '{}' array",
                    PRODUCTS_FIELD
                )))
            }
        },
        other => {
            return Err(StorefrontError::malformed(format!(
                "expected an array of products, got {}",
                kind_of(&other)
            )))
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value::<Product>(item).map_err(StorefrontError::from))
        .collect()
}

/// Decode a single-product payload.
///
/// `null` and `{}` mean the catalog has nothing for `id`.
pub fn decode_product(value: Value, id: ProductId) -> StorefrontResult<Product> {
    match value {
        Value::Null => Err(StorefrontError::NotFound { id }),
        Value::Object(ref map) if map.is_empty() => Err(StorefrontError::NotFound { id }),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(StorefrontError::malformed(format!(
            "expected a product object, got {}",
            kind_of(&other)
        ))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Key(String),
    Described {
        slug: Option<String>,
        name: Option<String>,
    },
}

/// Decode the category list; entries without a usable key are skipped.
pub fn decode_categories(value: Value) -> StorefrontResult<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(StorefrontError::malformed(format!(
                "expected an array of categories, got {}",
                kind_of(&other)
            )))
        }
    };

    let mut categories = Vec::with_capacity(items.len());
    for item in items {
        let key = match serde_json::from_value::<CategoryEntry>(item) {
            Ok(CategoryEntry::Key(key)) => Some(key),
            Ok(CategoryEntry::Described { slug, name }) => slug.or(name),
            Err(e) => {
                tracing::debug!("Skipping unrecognised category entry: {}", e);
                None
            }
        };
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            categories.push(key);
        }
    }
    Ok(categories)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json(id: u64) -> Value {
        json!({ "id": id, "title": format!("Item {}", id), "price": 10 })
    }

    #[test]
    fn test_bare_array() {
        let products = decode_products(json!([product_json(1), product_json(2)])).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, 2);
    }

    #[test]
    fn test_wrapped_array() {
        let products =
            decode_products(json!({ "products": [product_json(3)], "total": 1 })).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 3);
    }

    #[test]
    fn test_wrong_shapes_are_malformed() {
        for value in [json!("nope"), json!(42), json!(null), json!({ "items": [] })] {
            let err = decode_products(value).unwrap_err();
            assert!(matches!(err, StorefrontError::MalformedResponse { .. }));
        }
    }

    #[test]
    fn test_bad_item_is_malformed() {
        let err = decode_products(json!([product_json(1), { "id": "x" }])).unwrap_err();
        assert!(matches!(err, StorefrontError::MalformedResponse { .. }));
    }

    #[test]
    fn test_single_product_not_found() {
        assert_eq!(
            decode_product(json!(null), 5).unwrap_err(),
            StorefrontError::NotFound { id: 5 }
        );
        assert_eq!(
            decode_product(json!({}), 5).unwrap_err(),
            StorefrontError::NotFound { id: 5 }
        );
        assert_eq!(decode_product(product_json(5), 5).unwrap().id, 5);
    }

    #[test]
    fn test_categories_strings_and_objects() {
        let categories = decode_categories(json!([
            "beauty",
            { "slug": "fragrances", "name": "Fragrances" },
            { "name": "Furniture" },
            { "url": "no key" },
            ""
        ]))
        .unwrap();
        assert_eq!(categories, vec!["beauty", "fragrances", "Furniture"]);
    }
}
