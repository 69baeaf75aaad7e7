//! Left-to-right composition.
//!
//! # Overview
//!
//! - [`pipe!`]: builds a function chaining the given functions left to right
//! - [`go!`]: pushes a value through the given functions immediately
//! - [`try_pipe!`] / [`try_go!`]: the same for `Result`-returning functions,
//!   stopping at the first `Err`
//! - [`Pipeline`] / [`TryPipeline`]: chains whose stages are collected at
//!   runtime
//!
//! Both macros accept any callable expression: closures, function items,
//! [`Curry`](crate::curry::Curry) partials and the data-last forms from
//! [`collection::deferred`](crate::collection::deferred).
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use lambdash::{go, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(f, g)(x) = g(f(x))
//! let add_one_then_double = pipe!(add_one, double);
//! assert_eq!(add_one_then_double(3), 8);
//!
//! // go!(x, f, g) = g(f(x))
//! assert_eq!(go!(3, add_one, double), 8);
//! ```
//!
//! ## With Partial Application
//!
//! ```
//! use lambdash::curry::curry;
//! use lambdash::go;
//!
//! let add = curry(|a: i32, b: i32| a + b);
//! let multiply = curry(|a: i32, b: i32| a * b);
//!
//! assert_eq!(go!(4, add.partial(1), multiply.partial(10)), 50);
//! ```
//!
//! # Mathematical Background
//!
//! Piping is function composition read left to right:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! # Laws
//!
//! - **Agreement**: `go!(x, f, g) == pipe!(f, g)(x)`
//! - **Associativity**: `pipe!(pipe!(f, g), h) == pipe!(f, pipe!(g, h))`
//! - **Identity**: `pipe!(identity, f) == f == pipe!(f, identity)`

mod go_macro;
mod pipe_macro;
mod pipeline;

pub use pipeline::{Pipeline, TryPipeline};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::go;
pub use crate::pipe;
pub use crate::try_go;
pub use crate::try_pipe;
