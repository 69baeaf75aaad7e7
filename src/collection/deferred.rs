//! Data-last forms of the collection operations.
//!
//! Each function here takes the *second* argument of the operation of the
//! same name (the transformer, predicate or key) and returns a reusable
//! function awaiting the container. This is the partial application of a
//! [`CurryReversed`](crate::curry::CurryReversed) wrapper, written out per
//! operation so that the returned function accepts containers of any
//! lifetime.
//!
//! The configured function must be `Fn`, since the returned function can be
//! applied any number of times.
//!
//! # Examples
//!
//! ```rust
//! use lambdash::collection::deferred;
//! use serde_json::json;
//!
//! let names = deferred::pluck("name");
//!
//! let staff = json!([{"name": "Ada"}, {"name": "Grace"}]);
//! let guests = json!({"first": {"name": "Alan"}});
//!
//! assert_eq!(names(&staff), vec![Some(json!("Ada")), Some(json!("Grace"))]);
//! assert_eq!(names(&guests), vec![Some(json!("Alan"))]);
//! ```
//!
//! Unary operations (`values`, `pairs`, `compact`, `head`) and
//! [`traverse::length`](crate::traverse::length) are already functions of
//! the container alone and need no deferred form.

use std::hash::Hash;

use crate::traverse::{self, Container, Key};

use super::group::{Counts, Groups};
use super::{fold as fold_module, group, search, transform};

/// Deferred [`traverse::get`]: a projector for the value under `key`.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::deferred;
///
/// let second = deferred::get(1_usize);
/// assert_eq!(second(&vec!['a', 'b']), Some(&'b'));
/// assert_eq!(second(&vec!['a']), None);
/// ```
pub fn get<C, K>(key: K) -> impl Fn(&C) -> Option<&C::Item>
where
    C: Container + ?Sized,
    K: Into<Key>,
{
    let key = key.into();
    move |container: &C| traverse::get(container, &key)
}

/// Deferred [`traverse::each`].
pub fn each<C, F>(iterate: F) -> impl Fn(&C) -> &C
where
    C: Container + ?Sized,
    F: Fn(&C::Item, &Key),
{
    move |container: &C| traverse::each(container, &iterate)
}

/// Deferred [`map`](super::map).
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::deferred;
///
/// let double = deferred::map(|value: &i32, _key| value * 2);
/// assert_eq!(double(&vec![1, 2]), vec![2, 4]);
/// assert_eq!(double(&vec![5]), vec![10]);
/// ```
pub fn map<C, F, U>(mapper: F) -> impl Fn(&C) -> Vec<U>
where
    C: Container + ?Sized,
    F: Fn(&C::Item, &Key) -> U,
{
    move |container: &C| transform::map(container, &mapper)
}

/// Deferred [`filter`](super::filter).
pub fn filter<C, P>(predicate: P) -> impl Fn(&C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| transform::filter(container, &predicate)
}

/// Deferred [`reject`](super::reject).
pub fn reject<C, P>(predicate: P) -> impl Fn(&C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| transform::reject(container, &predicate)
}

/// Deferred [`pluck`](super::pluck).
pub fn pluck<C, K>(key: K) -> impl Fn(&C) -> Vec<Option<<C::Item as Container>::Item>>
where
    C: Container + ?Sized,
    C::Item: Container,
    <C::Item as Container>::Item: Clone,
    K: Into<Key>,
{
    let key = key.into();
    move |container: &C| transform::pluck(container, &key)
}

/// Deferred [`rest`](super::rest).
pub fn rest<C>(count: usize) -> impl Fn(&C) -> Vec<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
{
    move |container: &C| transform::rest(container, count)
}

/// Deferred [`reduce`](super::reduce).
pub fn reduce<C, F>(reducer: F) -> impl Fn(&C) -> Option<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    F: Fn(C::Item, &C::Item) -> C::Item,
{
    move |container: &C| fold_module::reduce(container, &reducer)
}

/// Deferred [`fold`](super::fold). The seed is cloned for every application.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::deferred;
///
/// let sum = deferred::fold(0, |memo, value: &i32| memo + value);
/// assert_eq!(sum(&vec![1, 2, 3]), 6);
/// assert_eq!(sum(&Vec::new()), 0);
/// ```
pub fn fold<C, M, F>(memo: M, reducer: F) -> impl Fn(&C) -> M
where
    C: Container + ?Sized,
    M: Clone,
    F: Fn(M, &C::Item) -> M,
{
    move |container: &C| fold_module::fold(container, memo.clone(), &reducer)
}

/// Deferred [`find`](super::find).
pub fn find<C, P>(predicate: P) -> impl Fn(&C) -> Option<&C::Item>
where
    C: Container + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| search::find(container, &predicate)
}

/// Deferred [`find_index`](super::find_index).
pub fn find_index<C, P>(predicate: P) -> impl Fn(&C) -> Option<usize>
where
    C: Container + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| search::find_index(container, &predicate)
}

/// Deferred [`some`](super::some).
pub fn some<C, P>(predicate: P) -> impl Fn(&C) -> bool
where
    C: Container + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| search::some(container, &predicate)
}

/// Deferred [`every`](super::every).
pub fn every<C, P>(predicate: P) -> impl Fn(&C) -> bool
where
    C: Container + ?Sized,
    P: Fn(&C::Item) -> bool,
{
    move |container: &C| search::every(container, &predicate)
}

/// Deferred [`group_by`](super::group_by).
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::deferred;
///
/// let by_length = deferred::group_by(|word: &&str| word.len());
/// let groups = by_length(&vec!["a", "bb", "c"]);
/// assert_eq!(groups[&1_usize], vec!["a", "c"]);
/// ```
pub fn group_by<C, K, F>(grouper: F) -> impl Fn(&C) -> Groups<K, C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    K: Hash + Eq,
    F: Fn(&C::Item) -> K,
{
    move |container: &C| group::group_by(container, &grouper)
}

/// Deferred [`count_by`](super::count_by).
pub fn count_by<C, K, F>(counter: F) -> impl Fn(&C) -> Counts<K>
where
    C: Container + ?Sized,
    K: Hash + Eq,
    F: Fn(&C::Item) -> K,
{
    move |container: &C| group::count_by(container, &counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_deferred_find_borrows_from_each_container() {
        let first_even = find(|value: &i32| value % 2 == 0);
        let left = vec![1, 2];
        let right = vec![4, 5];
        assert_eq!(first_even(&left), Some(&2));
        assert_eq!(first_even(&right), Some(&4));
    }

    #[test]
    fn test_deferred_each_returns_input() {
        let noop = each(|_value: &u8, _key: &Key| {});
        let bytes = vec![1_u8];
        assert!(std::ptr::eq(noop(&bytes), &bytes));
    }

    #[test]
    fn test_deferred_quantifiers_on_mapping() {
        let mut mapping = IndexMap::new();
        mapping.insert("a".to_string(), 1);
        mapping.insert("b".to_string(), -1);

        let any_negative = some(|value: &i32| *value < 0);
        let all_negative = every(|value: &i32| *value < 0);
        let where_negative = find_index(|value: &i32| *value < 0);

        assert!(any_negative(&mapping));
        assert!(!all_negative(&mapping));
        assert_eq!(where_negative(&mapping), Some(1));
    }

    #[test]
    fn test_deferred_reduce_reject_and_rest() {
        let product = reduce(|memo: i32, value: &i32| memo * value);
        let drop_small = reject(|value: &i32| *value < 3);
        let tail = rest(1);

        let numbers = vec![2, 3, 4];
        assert_eq!(product(&numbers), Some(24));
        assert_eq!(drop_small(&numbers), vec![3, 4]);
        assert_eq!(tail(&numbers), vec![3, 4]);
    }

    #[test]
    fn test_deferred_count_by_and_get() {
        let parity = count_by(|value: &i32| value % 2);
        let counts = parity(&vec![1, 2, 3]);
        assert_eq!(counts[&1_i32], 2);

        let name = get("name");
        let mut person = IndexMap::new();
        person.insert("name".to_string(), "Ada");
        assert_eq!(name(&person), Some(&"Ada"));
    }
}
