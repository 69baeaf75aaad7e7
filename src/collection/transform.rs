//! Operations that build a new sequence from a container.
//!
//! Every result is a fresh `Vec` in traversal order, whether the input was a
//! sequence or a mapping. The input is never modified.

use crate::curry::negate;
use crate::error::TraversalError;
use crate::traverse::{Container, Key, each, entries, get, try_each};

use super::truthy::Truthy;

/// Builds a sequence of `mapper(value, key)` for every entry.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::map;
/// use indexmap::IndexMap;
///
/// assert_eq!(map(&vec![1, 2, 3], |value, _key| value * 2), vec![2, 4, 6]);
///
/// let mut prices = IndexMap::new();
/// prices.insert("tea".to_string(), 3);
/// prices.insert("cake".to_string(), 5);
/// let labels = map(&prices, |price, item| format!("{item}: {price}"));
/// assert_eq!(labels, vec!["tea: 3", "cake: 5"]);
/// ```
pub fn map<C, F, U>(container: &C, mut mapper: F) -> Vec<U>
where
    C: Container + ?Sized,
    F: FnMut(&C::Item, &Key) -> U,
{
    let mut mapped = Vec::new();
    each(container, |value, key| mapped.push(mapper(value, key)));
    mapped
}

/// Returns every value for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::filter;
///
/// let evens = filter(&vec![1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<C, P>(container: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    each(container, |value, _key| {
        if predicate(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Returns every value for which `predicate` does not hold.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::reject;
///
/// let odds = reject(&vec![1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3]);
/// ```
pub fn reject<C, P>(container: &C, predicate: P) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(container, negate(predicate))
}

/// Returns the truthy values, dropping the falsy ones (see [`Truthy`]).
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::compact;
/// use serde_json::json;
///
/// let mixed = json!([0, 1, false, 2, "", 3, null]);
/// assert_eq!(compact(&mixed), vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn compact<C>(container: &C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone + Truthy,
{
    filter(container, |value| value.is_truthy())
}

/// Returns all values, discarding the keys.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::values;
/// use serde_json::json;
///
/// let point = json!({"x": 1, "y": 2});
/// assert_eq!(values(&point), vec![json!(1), json!(2)]);
/// ```
pub fn values<C>(container: &C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
{
    map(container, |value, _key| value.clone())
}

/// Returns `(key, value)` pairs in traversal order.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::pairs;
/// use lambdash::traverse::Key;
///
/// assert_eq!(
///     pairs(&vec!['a', 'b']),
///     vec![(Key::Index(0), 'a'), (Key::Index(1), 'b')]
/// );
/// ```
pub fn pairs<C>(container: &C) -> Vec<(Key, C::Item)>
where
    C: Container + ?Sized,
    C::Item: Clone,
{
    map(container, |value, key| (key.clone(), value.clone()))
}

/// Extracts the value under `key` from every element ("column extraction").
///
/// Elements without that key, or that are not containers, yield `None`.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::pluck;
/// use serde_json::json;
///
/// let users = json!([{"name": "Ada"}, {"name": "Grace"}, {"age": 3}]);
/// assert_eq!(
///     pluck(&users, "name"),
///     vec![Some(json!("Ada")), Some(json!("Grace")), None]
/// );
/// ```
pub fn pluck<C, K>(container: &C, key: K) -> Vec<Option<<C::Item as Container>::Item>>
where
    C: Container + ?Sized,
    C::Item: Container,
    <C::Item as Container>::Item: Clone,
    K: Into<Key>,
{
    let key = key.into();
    map(container, |element, _position| get(element, &key).cloned())
}

/// Returns the values after the first `count` positions.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::rest;
///
/// assert_eq!(rest(&vec![1, 2, 3, 4], 1), vec![2, 3, 4]);
/// assert_eq!(rest(&vec![1, 2], 5), Vec::<i32>::new());
/// ```
pub fn rest<C>(container: &C, count: usize) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
{
    entries(container)
        .skip(count)
        .map(|(_position, _key, value)| value.clone())
        .collect()
}

/// Like [`map`], but stops at the first `Err` returned by `mapper`.
///
/// # Errors
///
/// Returns a [`TraversalError`] naming the key at which `mapper` failed.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::try_map;
///
/// let parsed = try_map(&vec!["1", "2"], |text, _key| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed = try_map(&vec!["1", "x", "3"], |text, _key| text.parse::<i32>());
/// assert_eq!(failed.unwrap_err().position(), 1);
/// ```
pub fn try_map<C, F, U, E>(container: &C, mut mapper: F) -> Result<Vec<U>, TraversalError<E>>
where
    C: Container + ?Sized,
    F: FnMut(&C::Item, &Key) -> Result<U, E>,
{
    let mut mapped = Vec::new();
    try_each(container, |value, key| {
        mapper(value, key).map(|output| mapped.push(output))
    })?;
    Ok(mapped)
}

/// Like [`filter`], but stops at the first `Err` returned by `predicate`.
///
/// # Errors
///
/// Returns a [`TraversalError`] naming the key at which `predicate` failed.
pub fn try_filter<C, P, E>(
    container: &C,
    mut predicate: P,
) -> Result<Vec<C::Item>, TraversalError<E>>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    try_each(container, |value, _key| {
        predicate(value).map(|keep| {
            if keep {
                kept.push(value.clone());
            }
        })
    })?;
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn inventory() -> IndexMap<String, u32> {
        let mut inventory = IndexMap::new();
        inventory.insert("apples".to_string(), 0);
        inventory.insert("pears".to_string(), 4);
        inventory.insert("plums".to_string(), 2);
        inventory
    }

    #[test]
    fn test_filter_mapping_returns_sequence_in_insertion_order() {
        assert_eq!(filter(&inventory(), |count| *count > 0), vec![4, 2]);
    }

    #[test]
    fn test_compact_mapping() {
        assert_eq!(compact(&inventory()), vec![4, 2]);
    }

    #[test]
    fn test_pairs_on_mapping() {
        let pairs = pairs(&inventory());
        assert_eq!(pairs[1], (Key::from("pears"), 4));
    }

    #[test]
    fn test_rest_on_mapping_skips_by_position() {
        assert_eq!(rest(&inventory(), 2), vec![2]);
    }

    #[test]
    fn test_pluck_from_sequence_of_sequences() {
        let rows = vec![vec![1, 2], vec![3], vec![]];
        assert_eq!(pluck(&rows, 1_usize), vec![Some(2), None, None]);
    }

    #[test]
    fn test_try_filter_stops_at_first_failure() {
        let mut calls = 0;
        let result = try_filter(&vec![1, 2, 3], |value| {
            calls += 1;
            if *value == 2 { Err("two") } else { Ok(true) }
        });
        assert_eq!(result.map_err(|error| error.into_source()), Err("two"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_map_on_absent_container_is_empty() {
        let absent: Option<Vec<i32>> = None;
        assert!(map(&absent, |value, _key| *value).is_empty());
    }
}
