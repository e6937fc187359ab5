//! # Query Keys
//!
//! A key is the operation name plus the canonical JSON form of its
//! parameters. Object keys are sorted recursively before serializing, so two
//! structurally equal parameter values always produce the same key regardless
//! of field order or serde map ordering.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    operation: &'static str,
    params: String,
}

impl QueryKey {
    /// Key for `operation` called with `params`.
    pub fn new<P: Serialize + ?Sized>(operation: &'static str, params: &P) -> Result<Self> {
        let value = serde_json::to_value(params)
            .map_err(|e| ApiError::Cache(format!("Unserializable query params: {}", e)))?;
        Ok(Self::from_value(operation, value))
    }

    /// Key for `operation` called with an already-built JSON value.
    pub fn from_value(operation: &'static str, params: Value) -> Self {
        Self {
            operation,
            params: canonicalize(params).to_string(),
        }
    }

    /// Key for an operation that takes no parameters.
    pub fn operation_only(operation: &'static str) -> Self {
        Self::from_value(operation, Value::Null)
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Canonical JSON of the parameters (`null` when absent).
    pub fn params(&self) -> &str {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[\"{}\",{}]", self.operation, self.params)
    }
}

/// Rebuild `value` with every object's keys in sorted order.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::ListParams;

    #[test]
    fn test_equal_params_give_equal_keys() {
        let a = QueryKey::new("getCategories", &ListParams::new(1, 10)).unwrap();
        let b = QueryKey::new("getCategories", &ListParams::new(1, 10)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let a = QueryKey::from_value("getProducts", json!({ "page": 2, "limit": 5 }));
        let b = QueryKey::from_value("getProducts", json!({ "limit": 5, "page": 2 }));
        assert_eq!(a, b);
        assert_eq!(a.params(), r#"{"limit":5,"page":2}"#);
    }

    #[test]
    fn test_nested_objects_are_sorted() {
        let a = QueryKey::from_value("op", json!({ "filter": { "b": 1, "a": [{ "z": 0, "y": 1 }] } }));
        let b = QueryKey::from_value("op", json!({ "filter": { "a": [{ "y": 1, "z": 0 }], "b": 1 } }));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_params_give_different_keys() {
        let page_one = QueryKey::new("getCategories", &ListParams::new(1, 10)).unwrap();
        let page_two = QueryKey::new("getCategories", &ListParams::new(2, 10)).unwrap();
        let no_params = QueryKey::new("getCategories", &Option::<ListParams>::None).unwrap();
        assert_ne!(page_one, page_two);
        assert_ne!(page_one, no_params);
    }

    #[test]
    fn test_same_params_different_operation_differ() {
        let categories = QueryKey::new("getCategories", &ListParams::page(1)).unwrap();
        let products = QueryKey::new("getProducts", &ListParams::page(1)).unwrap();
        assert_ne!(categories, products);
    }

    #[test]
    fn test_display_matches_array_form() {
        let key = QueryKey::from_value("getProduct", json!("p-1"));
        assert_eq!(key.to_string(), r#"["getProduct","p-1"]"#);
        assert_eq!(QueryKey::operation_only("getCategories").to_string(), r#"["getCategories",null]"#);
    }
}
