//! Searching: the first match, its position, and quantifiers.
//!
//! These stop at the first decisive entry instead of visiting the rest.

use crate::curry::{identity, negate};
use crate::traverse::{Container, entries};

use super::truthy::Truthy;

/// Returns the first value for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::find;
///
/// let numbers = vec![1, 4, 6, 7];
/// assert_eq!(find(&numbers, |value| value % 2 == 0), Some(&4));
/// assert_eq!(find(&numbers, |value| *value > 10), None);
/// ```
pub fn find<C, P>(container: &C, mut predicate: P) -> Option<&C::Item>
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    entries(container)
        .map(|(_position, _key, value)| value)
        .find(|value| predicate(value))
}

/// Returns the position of the first value for which `predicate` holds.
///
/// The position counts entries in traversal order, so it is meaningful for
/// mappings too. `None` means no value matched.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::find_index;
/// use serde_json::json;
///
/// assert_eq!(find_index(&vec![1, 2, 3], |value| *value == 2), Some(1));
/// assert_eq!(find_index(&vec![1, 2, 3], |value| *value == 5), None);
///
/// let scores = json!({"ann": 3, "bob": 9});
/// assert_eq!(find_index(&scores, |score| score.as_i64() > Some(5)), Some(1));
/// ```
pub fn find_index<C, P>(container: &C, mut predicate: P) -> Option<usize>
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    entries(container)
        .find(|(_position, _key, value)| predicate(value))
        .map(|(position, _key, _value)| position)
}

/// Returns `true` when `predicate` holds for at least one value.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::some;
///
/// assert!(some(&vec![1, 2, 3], |value| *value == 3));
/// assert!(!some(&vec![1, 2, 3], |value| *value == 5));
/// assert!(!some(&Vec::<i32>::new(), |_value| true));
/// ```
pub fn some<C, P>(container: &C, predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    find_index(container, predicate).is_some()
}

/// Returns `true` when `predicate` holds for every value.
///
/// An empty container satisfies every predicate.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::every;
///
/// assert!(every(&vec![2, 4], |value| value % 2 == 0));
/// assert!(!every(&vec![2, 5], |value| value % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_value| false));
/// ```
pub fn every<C, P>(container: &C, predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    find_index(container, negate(predicate)).is_none()
}

/// Returns `true` when at least one value is truthy.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::some_truthy;
///
/// assert!(some_truthy(&vec![0, 0, 3]));
/// assert!(!some_truthy(&vec!["", ""]));
/// ```
pub fn some_truthy<C>(container: &C) -> bool
where
    C: Container + ?Sized,
    C::Item: Truthy,
{
    some(container, |value| identity(value).is_truthy())
}

/// Returns `true` when every value is truthy.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::every_truthy;
///
/// assert!(every_truthy(&vec![1, 2]));
/// assert!(!every_truthy(&vec![Some(1), None]));
/// ```
pub fn every_truthy<C>(container: &C) -> bool
where
    C: Container + ?Sized,
    C::Item: Truthy,
{
    every(container, |value| identity(value).is_truthy())
}

/// Returns the first value in traversal order.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::head;
/// use serde_json::json;
///
/// assert_eq!(head(&vec![3, 2, 1]), Some(&3));
/// assert_eq!(head(&json!({"first": 1, "second": 2})), Some(&json!(1)));
/// assert_eq!(head(&json!("not a container")), None);
/// ```
pub fn head<C>(container: &C) -> Option<&C::Item>
where
    C: Container + ?Sized,
{
    find(container, |_value| true)
}
