//! Normalization of variable backend response shapes.
//!
//! Two list endpoints legitimately answer with either a bare JSON array or a
//! paginated envelope (`{"data": [...], "total": ...}`) depending on query
//! parameters. Callers get one canonical shape and never special-case it.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Canonicalizes a response into an ordered sequence of values.
///
/// - `null` → empty
/// - array → its elements, unchanged
/// - object with an array `data` field → the inner elements
/// - anything else → empty, with a warning so backend shape drift stays
///   observable without crashing callers
#[must_use]
pub fn normalize(value: &Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.clone(),
        Value::Object(fields) => match fields.get("data") {
            Some(Value::Array(items)) => items.clone(),
            Some(other) => {
                tracing::warn!("unexpected list response: data is {}", shape_of(other));
                Vec::new()
            }
            None => {
                tracing::warn!("unexpected list response: object without data array");
                Vec::new()
            }
        },
        other => {
            tracing::warn!("unexpected list response shape: {}", shape_of(other));
            Vec::new()
        }
    }
}

/// Normalizes and deserializes each element into `T`.
///
/// Malformed elements are skipped with a warning rather than failing the
/// whole list; a backend that grows a field must not blank the screen.
#[must_use]
pub fn normalize_as<T: DeserializeOwned>(value: Value) -> Vec<T> {
    normalize(&value)
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("skipping malformed record: {err}");
                None
            }
        })
        .collect()
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_is_empty() {
        assert_eq!(normalize(&Value::Null), Vec::<Value>::new());
    }

    #[test]
    fn bare_array_passes_through() {
        assert_eq!(normalize(&json!([1, 2])), vec![json!(1), json!(2)]);
    }

    #[test]
    fn envelope_unwraps_data() {
        assert_eq!(
            normalize(&json!({"data": [1, 2], "total": 5})),
            vec![json!(1), json!(2)]
        );
    }

    #[test]
    fn wrong_shapes_degrade_to_empty() {
        assert_eq!(normalize(&json!("anything")), Vec::<Value>::new());
        assert_eq!(normalize(&json!(42)), Vec::<Value>::new());
        assert_eq!(normalize(&json!({"data": "x"})), Vec::<Value>::new());
        assert_eq!(normalize(&json!({"total": 5})), Vec::<Value>::new());
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let once = normalize(&json!({"data": [1, 2]}));
        let twice = normalize(&Value::Array(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn typed_normalization_skips_malformed_records() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Row {
            id: u32,
        }
        let rows: Vec<Row> = normalize_as(json!([{"id": 1}, {"id": "nope"}, {"id": 3}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 3 }]);
    }
}
