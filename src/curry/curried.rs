//! Curried wrappers with explicit full and partial application.
//!
//! The two calling conventions are two methods:
//!
//! - `call(a, b)` applies the wrapped function immediately
//! - `partial(..)` supplies one argument and returns a closure awaiting the other
//!
//! The wrapped function is held in an `Rc` so that partial applications
//! outlive the wrapper and can be produced any number of times.

use std::fmt;
use std::rc::Rc;

use super::utils::flip;

/// A binary function that can be applied fully or one argument at a time.
///
/// `partial(first)` returns a closure `g` with `g(second) = f(first, second)`.
///
/// # Examples
///
/// ```
/// use lambdash::curry::curry;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let curried = curry(subtract);
/// assert_eq!(curried.call(10, 3), 7);
///
/// let from_ten = curried.partial(10);
/// assert_eq!(from_ten(3), 7);
/// assert_eq!(from_ten(4), 6);
/// ```
pub struct Curry<F> {
    function: Rc<F>,
}

impl<F> Curry<F> {
    /// Wraps a binary function.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the wrapped function to both arguments immediately.
    #[inline]
    pub fn call<A, B, C>(&self, first: A, second: B) -> C
    where
        F: Fn(A, B) -> C,
    {
        (self.function)(first, second)
    }

    /// Supplies the first argument and returns a function awaiting the second.
    ///
    /// The returned closure is reusable: `first` is cloned for each call.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdash::curry::curry;
    ///
    /// let greet = curry(|greeting: String, name: &str| format!("{greeting}, {name}"));
    /// let hello = greet.partial("Hello".to_string());
    ///
    /// assert_eq!(hello("Ada"), "Hello, Ada");
    /// assert_eq!(hello("Grace"), "Hello, Grace");
    /// ```
    pub fn partial<A, B, C>(&self, first: A) -> impl Fn(B) -> C + use<F, A, B, C>
    where
        F: Fn(A, B) -> C,
        A: Clone,
    {
        let function = Rc::clone(&self.function);
        move |second| function(first.clone(), second)
    }
}

impl<F> Clone for Curry<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<F> fmt::Debug for Curry<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Curry(<function>)")
    }
}

/// A binary function whose partial application fixes the *second* argument.
///
/// `partial(second)` returns a closure `g` with `g(first) = f(first, second)`.
/// This is the data-last convention: configure the function or key, then
/// supply the data.
///
/// # Examples
///
/// ```
/// use lambdash::curry::curry_reversed;
///
/// fn starts_with(text: &str, prefix: &str) -> bool { text.starts_with(prefix) }
///
/// let curried = curry_reversed(starts_with);
/// assert!(curried.call("lambda", "lam"));
///
/// let is_http = curried.partial("http");
/// assert!(is_http("https://example.com"));
/// assert!(!is_http("ftp://example.com"));
/// ```
pub struct CurryReversed<F> {
    function: Rc<F>,
}

impl<F> CurryReversed<F> {
    /// Wraps a binary function.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the wrapped function to both arguments immediately, in order.
    #[inline]
    pub fn call<A, B, C>(&self, first: A, second: B) -> C
    where
        F: Fn(A, B) -> C,
    {
        (self.function)(first, second)
    }

    /// Supplies the second argument and returns a function awaiting the first.
    pub fn partial<A, B, C>(&self, second: B) -> impl Fn(A) -> C + use<F, A, B, C>
    where
        F: Fn(A, B) -> C,
        B: Clone,
    {
        let function = Rc::clone(&self.function);
        let flipped = flip(move |first: A, second: B| function(first, second));
        Curry::new(flipped).partial(second)
    }
}

impl<F> Clone for CurryReversed<F> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<F> fmt::Debug for CurryReversed<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("CurryReversed(<function>)")
    }
}

/// Wraps `function` so it can be applied as `call(a, b)` or `partial(a)(b)`.
#[inline]
pub fn curry<F>(function: F) -> Curry<F> {
    Curry::new(function)
}

/// Wraps `function` so it can be applied as `call(a, b)` or `partial(b)(a)`.
#[inline]
pub fn curry_reversed<F>(function: F) -> CurryReversed<F> {
    CurryReversed::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_curry_call_and_partial_agree() {
        let curried = curry(subtract);
        assert_eq!(curried.call(10, 4), 6);
        assert_eq!(curried.partial(10)(4), 6);
    }

    #[test]
    fn test_curry_reversed_partial_fixes_second_argument() {
        let curried = curry_reversed(subtract);
        let minus_four = curried.partial(4);
        assert_eq!(minus_four(10), 6);
        assert_eq!(minus_four(4), 0);
    }

    #[test]
    fn test_partial_outlives_wrapper() {
        let minus_one = {
            let curried = curry_reversed(subtract);
            curried.partial(1)
        };
        assert_eq!(minus_one(1), 0);
    }

    #[test]
    fn test_clone_shares_function() {
        let curried = curry(subtract);
        let cloned = curried.clone();
        assert_eq!(curried.call(3, 1), cloned.call(3, 1));
        assert_eq!(format!("{cloned:?}"), "Curry(<function>)");
    }
}
