//! Folding a container into a single value.

use crate::error::TraversalError;
use crate::traverse::{Container, abort, entries};

/// Folds the values into `memo` in traversal order: `memo = reducer(memo, value)`.
///
/// This is the seeded form of `reduce(list, fn, memo)`.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::fold;
///
/// assert_eq!(fold(&vec![1, 2, 3, 4], 0, |memo, value| memo + value), 10);
///
/// let sentence = fold(&["a", "b"], String::new(), |mut memo, word| {
///     memo.push_str(word);
///     memo
/// });
/// assert_eq!(sentence, "ab");
/// ```
pub fn fold<C, M, F>(container: &C, memo: M, mut reducer: F) -> M
where
    C: Container + ?Sized,
    F: FnMut(M, &C::Item) -> M,
{
    entries(container).fold(memo, |memo, (_position, _key, value)| reducer(memo, value))
}

/// Folds the values using the first one as the seed.
///
/// Returns `None` for an empty container.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::reduce;
///
/// assert_eq!(reduce(&vec![1, 2, 3, 4], |memo, value| memo + value), Some(10));
/// assert_eq!(reduce(&vec![7], |memo, value| memo * value), Some(7));
/// assert_eq!(reduce(&Vec::<i32>::new(), |memo, value| memo + value), None);
/// ```
pub fn reduce<C, F>(container: &C, mut reducer: F) -> Option<C::Item>
where
    C: Container + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    fold(container, None, |memo, value| match memo {
        None => Some(value.clone()),
        Some(memo) => Some(reducer(memo, value)),
    })
}

/// Like [`fold`], but stops at the first `Err` returned by `reducer`.
///
/// # Errors
///
/// Returns a [`TraversalError`] naming the key at which `reducer` failed.
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::try_fold;
///
/// let checked_sum = |memo: u8, value: &u8| memo.checked_add(*value).ok_or("overflow");
///
/// assert_eq!(try_fold(&vec![100_u8, 100], 0, checked_sum), Ok(200));
///
/// let error = try_fold(&vec![100_u8, 100, 100], 0, checked_sum).unwrap_err();
/// assert_eq!(error.position(), 2);
/// ```
pub fn try_fold<C, M, E, F>(container: &C, memo: M, mut reducer: F) -> Result<M, TraversalError<E>>
where
    C: Container + ?Sized,
    F: FnMut(M, &C::Item) -> Result<M, E>,
{
    let mut memo = memo;
    for (position, key, value) in entries(container) {
        memo = match reducer(memo, value) {
            Ok(next) => next,
            Err(error) => return Err(abort(key, position, error)),
        };
    }
    Ok(memo)
}
