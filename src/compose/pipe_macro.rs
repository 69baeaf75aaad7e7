//! The `pipe!` and `try_pipe!` macros for building left-to-right chains.

/// Builds a function applying the given functions from left to right.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`. Each function receives
/// exactly the previous result.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Chains any number of functions
///
/// # Type Requirements
///
/// The output type of each function must match the input type of the next.
/// The result implements [`Fn`] when every function does.
///
/// # Examples
///
/// ```
/// use lambdash::pipe;
///
/// let add_one_then_double = pipe!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(add_one_then_double(3), 8);
/// assert_eq!(add_one_then_double(0), 2);
/// ```
///
/// ## Over collections
///
/// ```
/// use lambdash::pipe;
/// use lambdash::collection::{count_by, pluck};
/// use serde_json::{json, Value};
///
/// let roles_histogram = pipe!(
///     |users: &Value| pluck(users, "role"),
///     |roles: Vec<Option<Value>>| {
///         count_by(&roles, |role| role.as_ref().and_then(Value::as_str).map(str::to_owned))
///     },
/// );
///
/// let users = json!([{"role": "admin"}, {"role": "dev"}, {"role": "dev"}]);
/// let counts = roles_histogram(&users);
/// assert_eq!(counts[&Some("dev".to_string())], 2);
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // pipe!(f, g, ...)(x) = pipe!(g, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Builds a function chaining `Result`-returning functions from left to right.
///
/// The chain stops at the first `Err`: later functions are not called and
/// the error is returned as-is.
///
/// # Examples
///
/// ```
/// use lambdash::try_pipe;
///
/// let parse_then_halve = try_pipe!(
///     |text: &str| text.parse::<i32>().map_err(|error| error.to_string()),
///     |number: i32| {
///         if number % 2 == 0 { Ok(number / 2) } else { Err(format!("{number} is odd")) }
///     },
/// );
///
/// assert_eq!(parse_then_halve("10"), Ok(5));
/// assert_eq!(parse_then_halve("7"), Err("7 is odd".to_string()));
/// assert!(parse_then_halve("ten").is_err());
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::try_pipe!($($remaining_functions),+);
        move |input| first(input).and_then(&remaining)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_single() {
        let double = |x: i32| x * 2;
        let piped = pipe!(double);
        assert_eq!(piped(5), 10);
    }

    #[test]
    fn test_pipe_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let piped = pipe!(square, double, add_one);
        assert_eq!(piped(3), 19);
    }

    #[test]
    fn test_try_pipe_skips_stages_after_error() {
        let reached = std::cell::Cell::new(false);
        let fail = |_x: i32| Err::<i32, &str>("stop");
        let record = |x: i32| {
            reached.set(true);
            Ok(x)
        };
        let piped = try_pipe!(fail, record);
        assert_eq!(piped(1), Err("stop"));
        assert!(!reached.get());
    }
}
