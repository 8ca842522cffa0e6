//! Tolerance-based comparison, layered on top of exact `==`.
//!
//! [`Vector2D::approx_eq`] compares in `f64` with the tolerances of a
//! [`CompareConfig`]. The `approx` trait impls let tests use
//! `assert_relative_eq!` and friends directly on vectors.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::config::CompareConfig;
use crate::scalar::Scalar;
use crate::vector::Vector2D;

impl<T: Scalar> Vector2D<T> {
    /// Returns true when both components are within the configured absolute
    /// or relative tolerance.
    ///
    /// # Examples
    /// ```
    /// use vec2d::{CompareConfig, Vector2D};
    ///
    /// let a = Vector2D::new(0.1 + 0.2, 1.0);
    /// let b = Vector2D::new(0.3, 1.0);
    /// assert_ne!(a, b);
    /// assert!(a.approx_eq(b, &CompareConfig::default()));
    /// ```
    pub fn approx_eq(self, other: Self, cfg: &CompareConfig) -> bool {
        cfg.scalars_close(self.x.as_f64(), other.x.as_f64())
            && cfg.scalars_close(self.y.as_f64(), other.y.as_f64())
    }
}

impl<T> AbsDiffEq for Vector2D<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T> RelativeEq for Vector2D<T>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Vector2D<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
