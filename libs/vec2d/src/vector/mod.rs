//! The `Vector2D` value type and its operations.
//!
//! Component-wise arithmetic is exposed through the `std::ops` operators in
//! [`ops`]; everything else is an inherent method here. Fallible variants
//! live in [`checked`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

pub mod checked;
pub mod ops;

/// Immutable 2D vector over a signed integer or floating-point element.
///
/// Equality is exact and component-wise. See
/// [`approx_eq`](Vector2D::approx_eq) for tolerance-based comparison.
///
/// # Examples
/// ```
/// use vec2d::Vector2D;
///
/// let v = Vector2D::new(0.0, 10.0);
/// assert_eq!(v.normalize(), Vector2D::new(0.0, 1.0));
/// assert_eq!(v.perpendicular(), Vector2D::new(-10.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Vector2D<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T> Vector2D<T> {
    /// Creates a vector from two coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2D<T> {
    /// Creates a zero vector.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::<i32>::zero(), Vector2D::new(0, 0));
    /// ```
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Creates a unit vector along the X axis.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Creates a unit vector along the Y axis.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Multiplies both components by `k`.
    #[inline]
    pub fn mul_scalar(self, k: T) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Divides both components by `k`.
    ///
    /// Follows the element type on a zero divisor: integers panic, floats
    /// produce infinities or NaN.
    #[inline]
    pub fn div_scalar(self, k: T) -> Self {
        Self::new(self.x / k, self.y / k)
    }

    /// Dot product, `x1*x2 + y1*y2`.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes `x1*x2 - y1*y2`.
    ///
    /// This is not the geometric 2D cross product; existing callers depend on
    /// this exact formula. Use [`perp_dot`](Vector2D::perp_dot) for
    /// `x1*y2 - y1*x2`.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::new(10, 5).cross(Vector2D::new(5, 5)), 25);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x * other.x - self.y * other.y
    }

    /// Conventional 2D cross product, `x1*y2 - y1*x2`.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length, computed in the element type.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// Squares are summed in `f64`, so integer components cannot overflow
    /// here; the root is truncated back for integer elements.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::new(10, 5).length(), 11);
    /// assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> T {
        let (x, y) = (self.x.as_f64(), self.y.as_f64());
        T::from_f64((x * x + y * y).sqrt())
    }

    /// Divides the vector by its own length.
    ///
    /// The zero vector is not guarded: floats yield NaN components and
    /// integers panic on the division. See
    /// [`try_normalize`](Vector2D::try_normalize).
    pub fn normalize(self) -> Self {
        self.div_scalar(self.length())
    }

    /// Rotates 90 degrees counter-clockwise, `{-y, x}`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle from the positive X axis in radians, `atan2(y, x)`.
    pub fn angle(self) -> f64 {
        self.y.as_f64().atan2(self.x.as_f64())
    }

    /// Rotates counter-clockwise by `radians`.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// let v = Vector2D::new(5.0_f64, 0.0).rotate(std::f64::consts::FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-12);
    /// assert!((v.y - 5.0).abs() < 1e-12);
    /// ```
    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x.as_f64(), self.y.as_f64());
        Self::new(
            T::from_f64(x * cos - y * sin),
            T::from_f64(x * sin + y * cos),
        )
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(min_scalar(self.x, other.x), min_scalar(self.y, other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(max_scalar(self.x, other.x), max_scalar(self.y, other.y))
    }

    /// Component-wise floor.
    ///
    /// Integer elements are returned unchanged, without an `f64` round trip,
    /// so `i64`/`i128` values beyond 2^53 stay exact.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::new(2.3, 4.6).floor(), Vector2D::new(2.0, 4.0));
    /// let big = Vector2D::new(i64::MAX - 1, 0);
    /// assert_eq!(big.floor(), big);
    /// ```
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Component-wise ceiling. Integer elements are returned unchanged.
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    /// Component-wise absolute value.
    ///
    /// The minimum value of an integer element has no positive counterpart
    /// and overflows: a panic in debug builds, wrapping in release builds.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Converts each component to another element type through `f64`.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::new(2.7, -2.7).cast::<i32>(), Vector2D::new(2, -2));
    /// ```
    pub fn cast<U: Scalar>(self) -> Vector2D<U> {
        Vector2D::new(U::from_f64(self.x.as_f64()), U::from_f64(self.y.as_f64()))
    }
}

// An unordered pair (NaN involved) yields the NaN operand instead of
// discarding it the way `f64::min` does. Of two equal zeros, min picks -0.0
// and max picks +0.0.
fn min_scalar<T: Scalar>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        Some(Ordering::Equal) if b.as_f64().is_sign_negative() => b,
        Some(_) => a,
        None => unordered(a, b),
    }
}

fn max_scalar<T: Scalar>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        Some(Ordering::Equal) if a.as_f64().is_sign_negative() => b,
        Some(_) => a,
        None => unordered(a, b),
    }
}

#[allow(clippy::eq_op)]
fn unordered<T: Scalar>(a: T, b: T) -> T {
    if a != a {
        a
    } else {
        b
    }
}

impl<T: fmt::Display> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {})", self.x, self.y)
    }
}
