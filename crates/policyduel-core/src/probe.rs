//! Safe, total accessors for loosely-shaped JSON documents.
//!
//! Model output is probed the way a human reads it: "is there a policyRule
//! in here, does it have an effect". Every helper returns an absence signal
//! on a type mismatch instead of failing, so quality scoring never has an
//! error path of its own.

use serde_json::{Map, Value};

/// Look up `key` and require the result to be an object.
pub fn get_object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key).and_then(Value::as_object)
}

/// Look up `key` and require the result to be a string.
pub fn get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Python-style truthiness for JSON values.
///
/// Null, `false`, zero, the empty string, the empty array, and the empty
/// object are falsy; everything else is truthy. The completeness checks use
/// this to mirror "exists and is non-empty".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_object_on_non_object_value() {
        let doc = json!({"a": "not a map"});
        assert!(get_object(&doc, "a").is_none());
        assert!(get_object(&doc, "missing").is_none());
        // Probing a scalar at the top level is also just absence.
        assert!(get_object(&json!(42), "a").is_none());
    }

    #[test]
    fn test_get_object_success() {
        let doc = json!({"a": {"b": 1}});
        let map = get_object(&doc, "a").unwrap();
        assert!(map.contains_key("b"));
    }

    #[test]
    fn test_get_str() {
        let doc = json!({"effect": "deny", "count": 3});
        assert_eq!(get_str(&doc, "effect"), Some("deny"));
        assert_eq!(get_str(&doc, "count"), None);
    }

    #[test]
    fn test_truthiness_falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_truthiness_truthy_values() {
        for v in [json!(true), json!(1), json!("x"), json!([0]), json!({"k": null})] {
            assert!(is_truthy(&v), "{v} should be truthy");
        }
    }
}
