//! The `go!` and `try_go!` macros for immediate left-to-right application.

/// Pushes a value through a series of functions from left to right.
///
/// `go!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `pipe!(f, g, h)(x)`.
///
/// # Syntax
///
/// - `go!(x)` - Returns `x` unchanged
/// - `go!(x, f)` - Returns `f(x)`
/// - `go!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use lambdash::go;
///
/// assert_eq!(go!(3, |x: i32| x + 1, |x: i32| x * 2), 8);
/// ```
///
/// ## Data-last collection steps
///
/// ```
/// use lambdash::go;
/// use lambdash::collection::{deferred, reduce};
/// use lambdash::traverse::Key;
///
/// let total = go!(
///     vec![1, 2, 3, 4, 5],
///     |numbers: Vec<i32>| deferred::filter(|value: &i32| value % 2 == 1)(&numbers),
///     |odds: Vec<i32>| deferred::map(|value: &i32, _key: &Key| value * value)(&odds),
///     |squares: Vec<i32>| reduce(&squares, |memo, value| memo + value),
/// );
/// assert_eq!(total, Some(35));
/// ```
#[macro_export]
macro_rules! go {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::go!($function($value), $($remaining_functions),+)
    };
}

/// Pushes a value through `Result`-returning functions from left to right.
///
/// Evaluates to the first `Err`, or to `Ok` of the last function's output.
/// Functions after a failing one are not called.
///
/// # Examples
///
/// ```
/// use lambdash::try_go;
///
/// fn non_empty(text: &str) -> Result<&str, &'static str> {
///     if text.is_empty() { Err("empty") } else { Ok(text) }
/// }
///
/// fn shout(text: &str) -> Result<String, &'static str> {
///     Ok(text.to_uppercase())
/// }
///
/// assert_eq!(try_go!("hi", non_empty, shout), Ok("HI".to_string()));
/// assert_eq!(try_go!("", non_empty, shout), Err("empty"));
/// ```
#[macro_export]
macro_rules! try_go {
    ($value:expr, $($function:expr),+ $(,)?) => {{
        let result = ::core::result::Result::Ok($value);
        $(
            let result = result.and_then($function);
        )+
        result
    }};
}
