//! Uniform traversal over sequences and keyed mappings.
//!
//! Every collection operation in this crate is written against the
//! [`Container`] trait and visits entries through one primitive, so sequences
//! and mappings share one iteration order and one rule for what counts as a
//! container.
//!
//! # Overview
//!
//! - [`Key`]: A sequence index or a mapping entry name
//! - [`Container`]: Ordered keys plus lookup by key
//! - [`is_container`] / [`keys`]: Key enumeration, empty for non-containers
//! - [`each`] / [`try_each`]: Visit every `(value, key)` pair in key order
//! - [`get`] / [`length`]: Access that never fails
//!
//! # Traversal Order
//!
//! - Sequences: ascending index
//! - `IndexMap` and JSON objects: insertion order
//! - `BTreeMap`: ascending key
//!
//! # Examples
//!
//! ```rust
//! use lambdash::traverse::{each, keys, Key};
//! use serde_json::json;
//!
//! let user = json!({"name": "Ada", "born": 1815});
//! assert_eq!(keys(&user), vec![Key::from("name"), Key::from("born")]);
//!
//! let mut seen = Vec::new();
//! each(&user, |value, key| seen.push(format!("{key}={value}")));
//! assert_eq!(seen, vec!["name=\"Ada\"", "born=1815"]);
//!
//! // Scalars are traversed as empty containers.
//! assert!(keys(&json!(42)).is_empty());
//! ```

mod accessor;
mod container;
#[cfg(feature = "json")]
mod json;
mod key;

use crate::error::TraversalError;

pub use accessor::{Length, get, length};
pub use container::Container;
pub use key::Key;

/// Returns `true` when `value` is a real container rather than a stand-in
/// for "no container" (an absent `Option`, a JSON scalar or `null`).
#[inline]
pub fn is_container<C>(value: &C) -> bool
where
    C: Container + ?Sized,
{
    value.is_container()
}

/// Returns the keys of `container` in traversal order.
///
/// Non-containers have no keys.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::{keys, Key};
///
/// assert_eq!(keys(&["x", "y"]), vec![Key::Index(0), Key::Index(1)]);
/// assert!(keys(&None::<Vec<u8>>).is_empty());
/// ```
pub fn keys<C>(container: &C) -> Vec<Key>
where
    C: Container + ?Sized,
{
    if is_container(container) {
        container.key_sequence()
    } else {
        Vec::new()
    }
}

/// Calls `iterate(value, key)` for every entry in traversal order and returns
/// the container unchanged.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::each;
///
/// let mut total = 0;
/// let numbers = vec![1, 2, 3];
/// let returned = each(&numbers, |value, _key| total += value);
///
/// assert_eq!(total, 6);
/// assert!(std::ptr::eq(returned, &numbers));
/// ```
pub fn each<C, F>(container: &C, mut iterate: F) -> &C
where
    C: Container + ?Sized,
    F: FnMut(&C::Item, &Key),
{
    for (_position, key, value) in entries(container) {
        iterate(value, &key);
    }
    container
}

/// Like [`each`], but stops at the first `Err` returned by `iterate`.
///
/// # Errors
///
/// Returns a [`TraversalError`] naming the key at which `iterate` failed.
/// Entries after that key are not visited.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::{try_each, Key};
///
/// let numbers = vec![1, -2, 3];
/// let mut visited = Vec::new();
/// let result = try_each(&numbers, |value: &i32, _key| {
///     visited.push(*value);
///     if *value < 0 { Err("negative") } else { Ok(()) }
/// });
///
/// let error = result.unwrap_err();
/// assert_eq!(error.key(), &Key::Index(1));
/// assert_eq!(visited, vec![1, -2]);
/// ```
pub fn try_each<C, E, F>(container: &C, mut iterate: F) -> Result<&C, TraversalError<E>>
where
    C: Container + ?Sized,
    F: FnMut(&C::Item, &Key) -> Result<(), E>,
{
    for (position, key, value) in entries(container) {
        if let Err(error) = iterate(value, &key) {
            return Err(abort(key, position, error));
        }
    }
    Ok(container)
}

/// The traversal loop shared by every operation: `(position, key, value)`
/// triples in key order. Keys are enumerated up front, once per traversal.
pub(crate) fn entries<C>(container: &C) -> impl Iterator<Item = (usize, Key, &C::Item)>
where
    C: Container + ?Sized,
{
    keys(container)
        .into_iter()
        .enumerate()
        .filter_map(move |(position, key)| {
            container
                .value_at(&key)
                .map(|value| (position, key, value))
        })
}

/// Builds the error for a caller function that failed at `key`.
pub(crate) fn abort<E>(key: Key, position: usize, error: E) -> TraversalError<E> {
    tracing::debug!(
        key = %key,
        position,
        "traversal aborted by caller function"
    );
    TraversalError::new(key, position, error)
}
