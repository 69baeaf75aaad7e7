//! An explicit truthiness rule for `compact`, `some_truthy` and `every_truthy`.
//!
//! The falsy set is fixed and small:
//!
//! | Type | Falsy values |
//! |---|---|
//! | `bool` | `false` |
//! | integers | `0` |
//! | `f32`, `f64` | `0.0`, `-0.0`, `NaN` |
//! | `str`, `String` | `""` |
//! | `Option<T>` | `None`, and `Some(v)` when `v` is falsy |
//! | `serde_json::Value` | `null`, `false`, `0`, `""` |
//!
//! Everything else is truthy, including empty sequences and mappings.

use std::collections::{BTreeMap, VecDeque};

use indexmap::IndexMap;

/// Values with an explicit notion of being "empty-like".
///
/// # Examples
///
/// ```rust
/// use lambdash::collection::Truthy;
///
/// assert!(!0_i32.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(Vec::<i32>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns `false` for the falsy values of the type.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Truthy for $integer {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T>
where
    T: Truthy,
{
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(T::is_truthy)
    }
}

impl<T> Truthy for &T
where
    T: Truthy + ?Sized,
{
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for VecDeque<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<V, S> Truthy for IndexMap<String, V, S> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<V> Truthy for BTreeMap<String, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

#[cfg(feature = "json")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|value| value.is_truthy()),
            Self::String(text) => text.is_truthy(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    #[case(f64::INFINITY, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_option_looks_through_some() {
        assert!(!Some(0_i32).is_truthy());
        assert!(Some(1_i32).is_truthy());
        assert!(!Some("").is_truthy());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_falsy_set() {
        use serde_json::json;

        let falsy = [json!(null), json!(false), json!(0), json!(0.0), json!("")];
        assert!(falsy.iter().all(|value| !value.is_truthy()));

        let truthy = [json!(true), json!(-1), json!("0"), json!([]), json!({})];
        assert!(truthy.iter().all(|value| value.is_truthy()));
    }
}
