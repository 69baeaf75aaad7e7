//! Currying primitives.
//!
//! This module turns a two-argument function into a value that can be
//! applied in two ways: all at once, or one argument now and the other
//! later.
//!
//! # Overview
//!
//! - [`Curry`]: `call(a, b) = f(a, b)`, `partial(a)(b) = f(a, b)`
//! - [`CurryReversed`]: `call(a, b) = f(a, b)`, `partial(b)(a) = f(a, b)`
//!
//! The reversed form fixes the *second* argument first. Every collection
//! operation takes `(data, function)`, so reversing the partial application
//! lets a caller configure the function (or key) first and apply it to many
//! containers afterwards:
//!
//! ```
//! use lambdash::curry::curry_reversed;
//!
//! fn repeat(text: String, times: usize) -> String { text.repeat(times) }
//!
//! let twice = curry_reversed(repeat).partial(2);
//! assert_eq!(twice("ab".to_string()), "abab");
//! assert_eq!(twice("xy".to_string()), "xyxy");
//! ```
//!
//! # Arity
//!
//! Each calling convention is its own method, so the number of arguments is
//! checked by the compiler. Calling a wrapper with no arguments or with three
//! arguments does not compile:
//!
//! ```compile_fail
//! use lambdash::curry::curry;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let _ = curry(add).call(1);
//! ```
//!
//! ```compile_fail
//! use lambdash::curry::curry;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let _ = curry(add).call(1, 2, 3);
//! ```
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`negate`]: Inverts a predicate
//!
//! # Laws
//!
//! - **Curry Equivalence**: `curry(f).partial(a)(b) == f(a, b) == curry(f).call(a, b)`
//! - **Reversed Equivalence**: `curry_reversed(f).partial(b)(a) == f(a, b)`
//! - **Double Negation**: `negate(negate(p))(x) == p(x)`

mod curried;
mod utils;

pub use curried::{Curry, CurryReversed, curry, curry_reversed};
pub use utils::{flip, identity, negate};
