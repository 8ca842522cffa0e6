//! Fallible counterparts of the division-based operations.
//!
//! These report zero divisors and zero-length normalization as
//! [`VectorError`] instead of panicking (integers) or returning NaN (floats).

use super::Vector2D;
use crate::error::{VectorError, VectorResult};
use crate::scalar::Scalar;

impl<T: Scalar> Vector2D<T> {
    /// Divides both components by `k`, rejecting a zero divisor.
    ///
    /// # Examples
    /// ```
    /// use vec2d::Vector2D;
    /// assert_eq!(Vector2D::new(100, 100).checked_div_scalar(2).unwrap(), Vector2D::new(50, 50));
    /// assert!(Vector2D::new(1, 1).checked_div_scalar(0).is_err());
    /// ```
    pub fn checked_div_scalar(self, k: T) -> VectorResult<Self> {
        if k.is_zero() {
            log::debug!("rejected {self} / 0 in div_scalar");
            return Err(VectorError::ZeroDivisor {
                operation: "div_scalar",
            });
        }
        Ok(self.div_scalar(k))
    }

    /// Component-wise division, rejecting a divisor with any zero component.
    pub fn checked_div(self, other: Self) -> VectorResult<Self> {
        if other.x.is_zero() || other.y.is_zero() {
            log::debug!("rejected {self} / {other} in div");
            return Err(VectorError::ZeroDivisor { operation: "div" });
        }
        Ok(self / other)
    }

    /// Normalizes the vector, rejecting the zero vector.
    ///
    /// # Examples
    /// ```
    /// use vec2d::{Vector2D, VectorError};
    /// assert_eq!(Vector2D::new(0, 10).try_normalize(), Ok(Vector2D::new(0, 1)));
    /// assert_eq!(Vector2D::new(0.0, 0.0).try_normalize(), Err(VectorError::ZeroLength));
    /// ```
    pub fn try_normalize(self) -> VectorResult<Self> {
        let length = self.length();
        if length.is_zero() {
            log::debug!("rejected normalization of zero-length {self}");
            return Err(VectorError::ZeroLength);
        }
        Ok(self.div_scalar(length))
    }
}
