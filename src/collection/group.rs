//! Grouping and counting by a derived key.
//!
//! Results are [`IndexMap`]s, so groups appear in the order their key was
//! first produced. The hasher is chosen at compile time:
//!
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature (without `fxhash`): `ahash::RandomState`
//! - otherwise: `std::hash::RandomState`

use std::hash::Hash;

use indexmap::IndexMap;

use crate::traverse::Container;

use super::fold::fold;

/// The `BuildHasher` used by [`Groups`] and [`Counts`].
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by [`Groups`] and [`Counts`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// The `BuildHasher` used by [`Groups`] and [`Counts`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::hash::RandomState;

/// Values bucketed by key, buckets in first-appearance order.
pub type Groups<K, T> = IndexMap<K, Vec<T>, HashBuilder>;

/// Occurrence counts by key, keys in first-appearance order.
pub type Counts<K> = IndexMap<K, usize, HashBuilder>;

/// Buckets every value under `grouper(value)`.
///
/// Within a bucket, values keep their traversal order.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::group_by;
///
/// let groups = group_by(&vec![1, 2, 3, 4, 5], |value| {
///     if value % 2 == 0 { "even" } else { "odd" }
/// });
///
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["odd", "even"]);
/// assert_eq!(groups["odd"], vec![1, 3, 5]);
/// assert_eq!(groups["even"], vec![2, 4]);
/// ```
pub fn group_by<C, K, F>(container: &C, mut grouper: F) -> Groups<K, C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> K,
{
    fold(container, Groups::default(), |groups, value| {
        push(groups, grouper(value), value.clone())
    })
}

/// Counts the values producing each `counter(value)`.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::count_by;
/// use lambdash::curry::identity;
///
/// let counts = count_by(&vec!["a", "b", "a", "c", "b", "a"], |letter| identity(*letter));
///
/// assert_eq!(counts["a"], 3);
/// assert_eq!(counts["b"], 2);
/// assert_eq!(counts["c"], 1);
/// ```
pub fn count_by<C, K, F>(container: &C, mut counter: F) -> Counts<K>
where
    C: Container + ?Sized,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> K,
{
    fold(container, Counts::default(), |counts, value| {
        increment(counts, counter(value))
    })
}

fn push<K, T>(mut groups: Groups<K, T>, key: K, value: T) -> Groups<K, T>
where
    K: Hash + Eq,
{
    groups.entry(key).or_default().push(value);
    groups
}

fn increment<K>(mut counts: Counts<K>, key: K) -> Counts<K>
where
    K: Hash + Eq,
{
    *counts.entry(key).or_insert(0) += 1;
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "json")]
    #[test]
    fn test_group_by_over_mapping_values() {
        use serde_json::json;

        let ages = json!({"ann": 31, "bob": 17, "cy": 45, "dee": 12});
        let groups = group_by(&ages, |age| age.as_u64() >= Some(18));
        assert_eq!(groups[&true], vec![json!(31), json!(45)]);
        assert_eq!(groups[&false], vec![json!(17), json!(12)]);
    }

    #[test]
    fn test_count_by_key_order_is_first_appearance() {
        let counts = count_by(&vec![3, 1, 3, 2, 1], |value| *value);
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_grouping_absent_container_is_empty() {
        let absent: Option<Vec<i32>> = None;
        assert!(group_by(&absent, |value| *value).is_empty());
        assert!(count_by(&absent, |value| *value).is_empty());
    }
}
