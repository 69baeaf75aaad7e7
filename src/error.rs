//! Error types for fallible traversal.
//!
//! Malformed input never produces an error: a value that is not a container
//! is traversed as an empty one. The only failure surfaced by this crate is a
//! caller-supplied function returning `Err` during a `try_*` operation, which
//! stops the traversal at that key.

use std::error::Error;
use std::fmt;

use crate::traverse::Key;

/// A fallible traversal stopped because the caller's function failed.
///
/// Carries the key and the 0-based position at which the failure happened,
/// together with the caller's own error.
///
/// # Examples
///
/// ```rust
/// use lambdash::error::TraversalError;
/// use lambdash::traverse::Key;
///
/// let error = TraversalError::new(Key::Index(2), 2, "negative value");
/// assert_eq!(
///     format!("{}", error),
///     "traversal aborted at key `2` (position 2): negative value"
/// );
/// assert_eq!(error.into_source(), "negative value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalError<E> {
    key: Key,
    position: usize,
    source: E,
}

impl<E> TraversalError<E> {
    /// Creates an error for a failure at `key`, the `position`-th visited entry.
    pub const fn new(key: Key, position: usize, source: E) -> Self {
        Self {
            key,
            position,
            source,
        }
    }

    /// The key whose value the caller's function failed on.
    pub const fn key(&self) -> &Key {
        &self.key
    }

    /// The 0-based position of that key in traversal order.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The caller's error.
    pub const fn source_error(&self) -> &E {
        &self.source
    }

    /// Discards the location and returns the caller's error.
    pub fn into_source(self) -> E {
        self.source
    }
}

impl<E: fmt::Display> fmt::Display for TraversalError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "traversal aborted at key `{}` (position {}): {}",
            self.key, self.position, self.source
        )
    }
}

impl<E> Error for TraversalError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
