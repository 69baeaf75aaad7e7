//! Collection operations over any [`Container`](crate::traverse::Container).
//!
//! Every operation here is written once, against the traversal core, so it
//! behaves the same on a `Vec`, an `IndexMap`, a JSON array or a JSON
//! object. Results are always freshly built; inputs are only borrowed.
//!
//! # Overview
//!
//! | Operation | Result |
//! |---|---|
//! | [`map`] | `mapper(value, key)` for every entry |
//! | [`filter`] / [`reject`] | values passing / failing a predicate |
//! | [`compact`] | the [`Truthy`] values |
//! | [`values`] / [`pairs`] | values / `(key, value)` pairs |
//! | [`pluck`] | the value under one key of every element |
//! | [`rest`] | values after the first `n` |
//! | [`reduce`] / [`fold`] | unseeded / seeded fold |
//! | [`find`] / [`find_index`] | first match / its position |
//! | [`some`] / [`every`] | existential / universal quantifier |
//! | [`group_by`] / [`count_by`] | buckets / counts by derived key |
//! | [`head`] | first value |
//!
//! Fallible callers use [`try_map`], [`try_filter`] and [`try_fold`], which
//! stop at the first error.
//!
//! # Calling Conventions
//!
//! Operations taking a function come in two forms:
//!
//! - immediate: `map(&container, mapper)`
//! - deferred, data last: `deferred::map(mapper)(&container)`
//!
//! # Neutral Results
//!
//! A non-container (an absent `Option`, a JSON scalar) behaves as an empty
//! container:
//!
//! ```rust
//! use lambdash::collection::*;
//! use serde_json::json;
//!
//! let scalar = json!(42);
//!
//! assert!(map(&scalar, |value, _key| value.clone()).is_empty());
//! assert!(filter(&scalar, |_value| true).is_empty());
//! assert!(group_by(&scalar, |value| value.to_string()).is_empty());
//! assert_eq!(find(&scalar, |_value| true), None);
//! assert_eq!(find_index(&scalar, |_value| true), None);
//! assert_eq!(head(&scalar), None);
//! assert!(!some(&scalar, |_value| true));
//! assert!(every(&scalar, |_value| false));
//! ```
//!
//! # Laws
//!
//! - **Length Preservation**: `map(c, f).len() == values(c).len()`
//! - **Filter Idempotence**: `filter(filter(c, p), p) == filter(c, p)`
//! - **Partition**: `filter(c, p).len() + reject(c, p).len() == values(c).len()`
//! - **Count Agreement**: `count_by(c, k)[key] == group_by(c, k)[key].len()`

pub mod deferred;
mod fold;
mod group;
mod search;
mod transform;
mod truthy;

pub use fold::{fold, reduce, try_fold};
pub use group::{Counts, Groups, HashBuilder, count_by, group_by};
pub use search::{every, every_truthy, find, find_index, head, some, some_truthy};
pub use transform::{
    compact, filter, map, pairs, pluck, reject, rest, try_filter, try_map, values,
};
pub use truthy::Truthy;
