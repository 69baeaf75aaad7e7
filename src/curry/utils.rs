//! Small combinators shared by the collection operations.
//!
//! - [`identity`]: The identity function (I combinator), the default
//!   transformer of `values` and the default predicate of `compact`
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`negate`]: Inverts a predicate, used by `reject` and `every`

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use lambdash::curry::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns `g` with `g(b, a) = f(a, b)`.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use lambdash::curry::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Returns a predicate that holds exactly when `predicate` does not.
///
/// # Examples
///
/// ```
/// use lambdash::curry::negate;
///
/// let mut is_odd = negate(|value: &i32| value % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}
