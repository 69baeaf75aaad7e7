//! # lambdash
//!
//! Curried, data-last combinators that treat ordered sequences and keyed
//! mappings as one kind of container.
//!
//! ## Overview
//!
//! - **Currying**: [`Curry`](curry::Curry) and
//!   [`CurryReversed`](curry::CurryReversed) with explicit full and partial
//!   application
//! - **Traversal**: one key-ordered iteration primitive over every
//!   [`Container`](traverse::Container), tolerant of absent containers
//! - **Collection operations**: `map`, `filter`, `reduce`, `group_by`,
//!   `count_by`, `find`, ... written once against the traversal core
//! - **Composition**: `pipe!`, `go!` and runtime [`Pipeline`](compose::Pipeline)s
//!
//! ## Feature Flags
//!
//! - `curry`: Currying primitives and small combinators
//! - `traverse`: The `Container` abstraction, `keys`, `each`, `get`, `length`
//! - `collection`: Derived collection operations and their deferred forms
//! - `compose`: Left-to-right composition
//! - `json`: `serde_json::Value` as a container
//! - `serde`: Serialization of keys and grouped results
//! - `fxhash` / `ahash`: Faster hashers for grouped results
//! - `full`: Every module plus `serde`
//!
//! ## Example
//!
//! ```rust
//! use lambdash::prelude::*;
//! use lambdash::go;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! let total = go!(
//!     numbers,
//!     |numbers: Vec<i32>| filter(&numbers, |value| value % 2 == 0),
//!     |evens: Vec<i32>| map(&evens, |value, _key| value * 10),
//!     |tens: Vec<i32>| fold(&tens, 0, |sum, value| sum + value),
//! );
//! assert_eq!(total, 120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use lambdash::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "traverse")]
    pub use crate::traverse::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "traverse")]
    pub use crate::error::TraversalError;
}

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "traverse")]
pub mod traverse;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "traverse")]
pub mod error;
