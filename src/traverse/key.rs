//! Keys shared by sequences and mappings.

use std::borrow::Cow;
use std::fmt;

/// A position in a sequence or an entry name in a mapping.
///
/// Both kinds render as strings through [`Display`](fmt::Display): index `2`
/// renders as `"2"`. Lookups are tolerant of the other kind: a sequence
/// accepts `Name("2")`, and a mapping accepts `Index(2)` as the name `"2"`.
///
/// # Examples
///
/// ```rust
/// use lambdash::traverse::Key;
///
/// assert_eq!(Key::from(3_usize).to_string(), "3");
/// assert_eq!(Key::from("3").as_index(), Some(3));
/// assert_eq!(Key::from("03").as_index(), None);
/// assert_eq!(Key::from(3_usize).as_name(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Key {
    /// A 0-based position in an ordered sequence.
    Index(usize),
    /// The name of an entry in a keyed mapping.
    Name(String),
}

impl Key {
    /// Returns the key as a sequence index.
    ///
    /// A `Name` only counts as an index when it is the canonical decimal form
    /// of one: `"7"` does, `"07"`, `"+7"` and `"seven"` do not.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => parse_canonical_index(name),
        }
    }

    /// Returns the key as a mapping entry name.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Self::Index(index) => Cow::Owned(index.to_string()),
            Self::Name(name) => Cow::Borrowed(name),
        }
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let is_digits = !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_digit());
    let has_leading_zero = name.len() > 1 && name.starts_with('0');
    if is_digits && !has_leading_zero {
        name.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

static_assertions::assert_impl_all!(Key: Send, Sync, Clone, std::hash::Hash);
