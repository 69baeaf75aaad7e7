//! `serde_json` values as containers.
//!
//! A JSON array is a sequence, a JSON object is an insertion-ordered
//! mapping (the `preserve_order` feature of `serde_json` is always on), and
//! every other JSON value is a non-container with no keys.

use serde_json::{Map, Value};

use super::accessor::Length;
use super::container::Container;
use super::key::Key;

impl Container for Value {
    type Item = Self;

    fn key_sequence(&self) -> Vec<Key> {
        match self {
            Self::Array(elements) => elements.key_sequence(),
            Self::Object(entries) => entries.key_sequence(),
            _ => Vec::new(),
        }
    }

    fn value_at(&self, key: &Key) -> Option<&Self> {
        match self {
            Self::Array(elements) => elements.value_at(key),
            Self::Object(entries) => entries.value_at(key),
            _ => None,
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }
}

impl Container for Map<String, Value> {
    type Item = Value;

    fn key_sequence(&self) -> Vec<Key> {
        self.keys().map(Key::from).collect()
    }

    fn value_at(&self, key: &Key) -> Option<&Value> {
        self.get(&*key.as_name())
    }
}

/// Strings and arrays have a length; an object only has one when it carries
/// a non-negative integer `"length"` entry.
impl Length for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Self::String(text) => text.length(),
            Self::Array(elements) => Some(elements.len()),
            Self::Object(entries) => entries
                .get("length")
                .and_then(Self::as_u64)
                .and_then(|length| usize::try_from(length).ok()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_keys_keep_insertion_order() {
        let value = json!({"zeta": 1, "alpha": 2, "mid": 3});
        assert_eq!(
            value.key_sequence(),
            vec![Key::from("zeta"), Key::from("alpha"), Key::from("mid")]
        );
    }

    #[test]
    fn test_scalars_are_not_containers() {
        for scalar in [json!(null), json!(1), json!("text"), json!(true)] {
            assert!(!scalar.is_container());
            assert!(scalar.key_sequence().is_empty());
            assert_eq!(scalar.value_at(&Key::Index(0)), None);
        }
    }

    #[test]
    fn test_length_of_json_values() {
        assert_eq!(json!("héllo").length(), Some(5));
        assert_eq!(json!([1, 2, 3]).length(), Some(3));
        assert_eq!(json!({"length": 7}).length(), Some(7));
        assert_eq!(json!({"size": 7}).length(), None);
        assert_eq!(json!(42).length(), None);
    }
}
