//! Safe keyed access and length projection.
//!
//! Neither [`get`] nor [`length`] can fail: a missing container, a missing
//! key or a value without a length all produce `None`.

use std::collections::{BTreeMap, VecDeque};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::container::Container;
use super::key::Key;

/// Returns the value stored under `key`, or `None` when either the container
/// or the key is absent.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::get;
/// use indexmap::IndexMap;
///
/// let mut user = IndexMap::new();
/// user.insert("name".to_string(), "Ada");
///
/// assert_eq!(get(&user, "name"), Some(&"Ada"));
/// assert_eq!(get(&user, "email"), None);
///
/// let nobody: Option<IndexMap<String, &str>> = None;
/// assert_eq!(get(&nobody, "name"), None);
/// ```
#[inline]
pub fn get<C, K>(container: &C, key: K) -> Option<&C::Item>
where
    C: Container + ?Sized,
    K: Into<Key>,
{
    container.value_at(&key.into())
}

/// Values that may expose a length.
///
/// Sequences and strings always have one. Keyed mappings do not: their
/// entry count is `keys(&mapping).len()`.
pub trait Length {
    /// Returns the length, or `None` when the value has no notion of one.
    fn length(&self) -> Option<usize>;
}

/// Returns the length of `value`, or `None` when it has none.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::length;
///
/// assert_eq!(length(&vec![1, 2, 3]), Some(3));
/// assert_eq!(length("naïve"), Some(5));
/// assert_eq!(length(&None::<Vec<i32>>), None);
/// ```
#[inline]
pub fn length<T>(value: &T) -> Option<usize>
where
    T: Length + ?Sized,
{
    value.length()
}

impl Length for str {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl Length for String {
    fn length(&self) -> Option<usize> {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<V, S> Length for IndexMap<String, V, S> {
    fn length(&self) -> Option<usize> {
        None
    }
}

impl<V> Length for BTreeMap<String, V> {
    fn length(&self) -> Option<usize> {
        None
    }
}

impl<T> Length for Option<T>
where
    T: Length,
{
    fn length(&self) -> Option<usize> {
        self.as_ref().and_then(T::length)
    }
}

impl<T> Length for &T
where
    T: Length + ?Sized,
{
    fn length(&self) -> Option<usize> {
        (**self).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_index_and_numeric_name() {
        let values = vec!["a", "b", "c"];
        assert_eq!(get(&values, 1_usize), Some(&"b"));
        assert_eq!(get(&values, "2"), Some(&"c"));
        assert_eq!(get(&values, 3_usize), None);
    }

    #[test]
    fn test_get_on_absent_container() {
        let absent: Option<Vec<i32>> = None;
        assert_eq!(get(&absent, 0_usize), None);
    }

    #[test]
    fn test_mapping_has_no_length() {
        let mut mapping = IndexMap::new();
        mapping.insert("a".to_string(), 1);
        assert_eq!(length(&mapping), None);
    }

    #[test]
    fn test_length_of_strings_counts_characters() {
        assert_eq!(length(""), Some(0));
        assert_eq!(length(&"日本".to_string()), Some(2));
    }
}
