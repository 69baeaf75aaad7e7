#![cfg(all(feature = "serde", feature = "collection"))]

//! Integration tests for serde support of keys and grouped results.

use lambdash::collection::{Counts, Groups, count_by, group_by, pairs};
use lambdash::traverse::Key;
use rstest::rstest;

// =============================================================================
// Key
// =============================================================================

#[rstest]
#[case(Key::Index(3), "3")]
#[case(Key::from("name"), "\"name\"")]
fn test_key_serializes_untagged(#[case] key: Key, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&key).unwrap(), expected);
}

#[rstest]
#[case(Key::Index(0))]
#[case(Key::from("0"))]
#[case(Key::from("user"))]
fn test_key_json_roundtrip(#[case] key: Key) {
    let json = serde_json::to_string(&key).unwrap();
    let restored: Key = serde_json::from_str(&json).unwrap();
    assert_eq!(key, restored);
}

#[rstest]
fn test_pairs_serialize_as_arrays() {
    let letters = vec!['a', 'b'];
    let json = serde_json::to_string(&pairs(&letters)).unwrap();
    assert_eq!(json, r#"[[0,"a"],[1,"b"]]"#);
}

// =============================================================================
// Grouped results
// =============================================================================

#[rstest]
fn test_groups_serialize_in_first_appearance_order() {
    let words = vec!["pear", "fig", "plum", "kiwi"];
    let groups = group_by(&words, |word| word.len().to_string());
    let json = serde_json::to_string(&groups).unwrap();
    assert_eq!(json, r#"{"4":["pear","plum","kiwi"],"3":["fig"]}"#);
}

#[rstest]
fn test_counts_json_roundtrip() {
    let counts = count_by(&vec!["x", "y", "x"], |letter| (*letter).to_string());
    let json = serde_json::to_string(&counts).unwrap();
    let restored: Counts<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(counts, restored);
}

#[rstest]
fn test_groups_deserialize() {
    let groups: Groups<String, i32> = serde_json::from_str(r#"{"odd":[1,3],"even":[2]}"#).unwrap();
    assert_eq!(groups["odd"], vec![1, 3]);
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["odd", "even"]);
}
