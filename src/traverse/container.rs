//! The `Container` abstraction: anything with ordered keys and values.

use std::collections::{BTreeMap, VecDeque};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::key::Key;

/// An ordered key-value source.
///
/// A container enumerates its keys in a canonical, stable order and returns
/// the value stored under a key. Sequences enumerate `Key::Index(0..len)`;
/// mappings enumerate `Key::Name`s in their own iteration order (insertion
/// order for [`IndexMap`], ascending for [`BTreeMap`]).
///
/// Unordered maps such as `std::collections::HashMap` are not
/// containers: their iteration order is not stable.
///
/// A value that [`is_container`](Container::is_container) reports `false` for
/// (an absent `Option`, a JSON scalar) has no keys and is traversed as empty.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::{Container, Key};
/// use indexmap::IndexMap;
///
/// let sequence = vec!["a", "b"];
/// assert_eq!(sequence.key_sequence(), vec![Key::Index(0), Key::Index(1)]);
/// assert_eq!(sequence.value_at(&Key::from("1")), Some(&"b"));
///
/// let mut mapping = IndexMap::new();
/// mapping.insert("z".to_string(), 1);
/// mapping.insert("a".to_string(), 2);
/// assert_eq!(mapping.key_sequence(), vec![Key::from("z"), Key::from("a")]);
/// ```
pub trait Container {
    /// The type of the values stored in the container.
    type Item;

    /// Returns the keys in traversal order.
    fn key_sequence(&self) -> Vec<Key>;

    /// Returns the value stored under `key`, if any.
    fn value_at(&self, key: &Key) -> Option<&Self::Item>;

    /// Returns `false` for values that stand for "no container at all".
    fn is_container(&self) -> bool {
        true
    }
}

fn index_keys(length: usize) -> Vec<Key> {
    (0..length).map(Key::Index).collect()
}

impl<T> Container for [T] {
    type Item = T;

    fn key_sequence(&self) -> Vec<Key> {
        index_keys(self.len())
    }

    fn value_at(&self, key: &Key) -> Option<&T> {
        key.as_index().and_then(|index| self.get(index))
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;

    fn key_sequence(&self) -> Vec<Key> {
        index_keys(N)
    }

    fn value_at(&self, key: &Key) -> Option<&T> {
        self.as_slice().value_at(key)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn key_sequence(&self) -> Vec<Key> {
        index_keys(self.len())
    }

    fn value_at(&self, key: &Key) -> Option<&T> {
        self.as_slice().value_at(key)
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn key_sequence(&self) -> Vec<Key> {
        index_keys(self.len())
    }

    fn value_at(&self, key: &Key) -> Option<&T> {
        key.as_index().and_then(|index| self.get(index))
    }
}

impl<V, S> Container for IndexMap<String, V, S>
where
    S: BuildHasher,
{
    type Item = V;

    fn key_sequence(&self) -> Vec<Key> {
        IndexMap::keys(self).map(Key::from).collect()
    }

    fn value_at(&self, key: &Key) -> Option<&V> {
        IndexMap::get(self, key.as_name().as_ref())
    }
}

impl<V> Container for BTreeMap<String, V> {
    type Item = V;

    fn key_sequence(&self) -> Vec<Key> {
        BTreeMap::keys(self).map(Key::from).collect()
    }

    fn value_at(&self, key: &Key) -> Option<&V> {
        BTreeMap::get(self, key.as_name().as_ref())
    }
}

impl<C> Container for Option<C>
where
    C: Container,
{
    type Item = C::Item;

    fn key_sequence(&self) -> Vec<Key> {
        self.as_ref().map_or_else(Vec::new, C::key_sequence)
    }

    fn value_at(&self, key: &Key) -> Option<&C::Item> {
        self.as_ref().and_then(|container| container.value_at(key))
    }

    fn is_container(&self) -> bool {
        self.as_ref().is_some_and(C::is_container)
    }
}

impl<C> Container for &C
where
    C: Container + ?Sized,
{
    type Item = C::Item;

    fn key_sequence(&self) -> Vec<Key> {
        (**self).key_sequence()
    }

    fn value_at(&self, key: &Key) -> Option<&C::Item> {
        (**self).value_at(key)
    }

    fn is_container(&self) -> bool {
        (**self).is_container()
    }
}

impl<C> Container for Box<C>
where
    C: Container + ?Sized,
{
    type Item = C::Item;

    fn key_sequence(&self) -> Vec<Key> {
        (**self).key_sequence()
    }

    fn value_at(&self, key: &Key) -> Option<&C::Item> {
        (**self).value_at(key)
    }

    fn is_container(&self) -> bool {
        (**self).is_container()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_rejects_out_of_range_and_foreign_names() {
        let values = [10, 20, 30];
        assert_eq!(values.value_at(&Key::Index(3)), None);
        assert_eq!(values.value_at(&Key::from("length")), None);
        assert_eq!(values.value_at(&Key::from("2")), Some(&30));
    }

    #[test]
    fn test_mapping_accepts_index_keys_by_name() {
        let mut mapping = IndexMap::new();
        mapping.insert("0".to_string(), "zero");
        assert_eq!(mapping.value_at(&Key::Index(0)), Some(&"zero"));
    }

    #[test]
    fn test_btreemap_keys_ascend() {
        let mapping: BTreeMap<String, i32> = [("b".to_string(), 2), ("a".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(mapping.key_sequence(), vec![Key::from("a"), Key::from("b")]);
    }

    #[test]
    fn test_absent_option_is_not_a_container() {
        let absent: Option<Vec<i32>> = None;
        assert!(!absent.is_container());
        assert!(absent.key_sequence().is_empty());
        assert!(Some(vec![1]).is_container());
    }

    #[test]
    fn test_deque_keys_follow_front_to_back() {
        let mut deque = VecDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(deque.value_at(&Key::Index(0)), Some(&1));
        assert_eq!(deque.key_sequence().len(), 2);
    }
}
