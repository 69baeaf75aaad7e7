//! Integration tests for the curried wrappers and small combinators.

#![cfg(feature = "curry")]

use lambdash::curry::{Curry, CurryReversed, curry, curry_reversed, flip, identity, negate};
use rstest::rstest;

fn subtract(minuend: i32, subtrahend: i32) -> i32 {
    minuend - subtrahend
}

fn concat(first: &str, second: &str) -> String {
    format!("{first}{second}")
}

// =============================================================================
// Curry
// =============================================================================

#[rstest]
#[case(10, 3, 7)]
#[case(0, 5, -5)]
#[case(-4, -4, 0)]
fn test_curry_call_and_partial_agree(#[case] first: i32, #[case] second: i32, #[case] expected: i32) {
    let curried = curry(subtract);
    assert_eq!(curried.call(first, second), expected);
    assert_eq!(curried.partial(first)(second), expected);
}

#[rstest]
fn test_curry_partial_is_reusable() {
    let curried = curry(subtract);
    let from_hundred = curried.partial(100);

    assert_eq!(from_hundred(1), 99);
    assert_eq!(from_hundred(50), 50);
    assert_eq!(from_hundred(100), 0);
}

#[rstest]
fn test_curry_partial_outlives_wrapper() {
    let hello = {
        let curried = Curry::new(concat);
        curried.partial("Hello, ")
    };
    assert_eq!(hello("World"), "Hello, World");
}

#[rstest]
fn test_curry_with_owned_first_argument() {
    let repeat = curry(|word: String, times: usize| word.repeat(times));
    let echo = repeat.partial("ab".to_string());
    assert_eq!(echo(3), "ababab");
    assert_eq!(echo(0), "");
}

#[rstest]
fn test_curry_clone_shares_function() {
    let curried = curry(subtract);
    let cloned = curried.clone();
    assert_eq!(curried.call(5, 2), cloned.call(5, 2));
}

#[rstest]
fn test_curry_debug_hides_function() {
    assert_eq!(format!("{:?}", curry(subtract)), "Curry(<function>)");
    assert_eq!(
        format!("{:?}", curry_reversed(subtract)),
        "CurryReversed(<function>)"
    );
}

// =============================================================================
// CurryReversed
// =============================================================================

#[rstest]
#[case(10, 3, 7)]
#[case(3, 10, -7)]
fn test_curry_reversed_partial_fixes_second(
    #[case] first: i32,
    #[case] second: i32,
    #[case] expected: i32,
) {
    let curried = CurryReversed::new(subtract);
    assert_eq!(curried.call(first, second), expected);
    assert_eq!(curried.partial(second)(first), expected);
}

#[rstest]
fn test_curry_reversed_data_last() {
    let suffix = curry_reversed(concat);
    let exclaim = suffix.partial("!");
    assert_eq!(exclaim("hi"), "hi!");
    assert_eq!(exclaim("bye"), "bye!");
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(0)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn test_identity_returns_input(#[case] value: i64) {
    assert_eq!(identity(value), value);
}

#[rstest]
fn test_flip_swaps_arguments() {
    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), 7);

    let restored = flip(flipped);
    assert_eq!(restored(10, 3), 7);
}

#[rstest]
#[case(2, false)]
#[case(3, true)]
fn test_negate_inverts_predicate(#[case] value: i32, #[case] expected: bool) {
    let mut is_odd = negate(|number: &i32| number % 2 == 0);
    assert_eq!(is_odd(&value), expected);
}

#[rstest]
fn test_negate_unsized_input() {
    let mut is_non_empty = negate(|text: &str| text.is_empty());
    assert!(is_non_empty("x"));
    assert!(!is_non_empty(""));
}
