//! Element types accepted by [`Vector2D`](crate::Vector2D).
//!
//! Any signed integer or floating-point primitive qualifies. The bound is
//! resolved at compile time; there is no runtime dispatch over element kinds.

use std::fmt::{Debug, Display};

use num_traits::{Num, Signed};

/// Numeric element of a 2D vector.
///
/// Arithmetic comes from `num_traits::Num`, negation and `abs` from
/// `num_traits::Signed`. The two conversions route operations that need
/// transcendental math (`sqrt`, `atan2`, `sin`/`cos`) through `f64`;
/// rounding stays in the element type.
///
/// # Examples
/// ```
/// use vec2d::Scalar;
///
/// assert_eq!(7_i32.as_f64(), 7.0);
/// assert_eq!(i32::from_f64(11.18), 11);
/// assert_eq!(f32::from_f64(0.5), 0.5_f32);
/// ```
pub trait Scalar: Num + Signed + PartialOrd + Copy + Debug + Display + 'static {
    /// Widens the value to `f64`.
    ///
    /// Lossless for every supported type except `i64`, `i128` and `isize`
    /// magnitudes above 2^53.
    fn as_f64(self) -> f64;

    /// Narrows an `f64` back to the element type with `as` semantics.
    ///
    /// Integer targets truncate toward zero and saturate at their bounds;
    /// NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Largest integral value not greater than `self`. Identity for integers.
    fn floor(self) -> Self;

    /// Smallest integral value not less than `self`. Identity for integers.
    fn ceil(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn floor(self) -> Self {
                    self
                }

                #[inline]
                fn ceil(self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn floor(self) -> Self {
                    <$t>::floor(self)
                }

                #[inline]
                fn ceil(self) -> Self {
                    <$t>::ceil(self)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);
