//! Centralized tolerance values shared across the vec2d workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance used by approximate vector comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Relative tolerance, scaled by the larger magnitude of the two compared
/// values.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON_TOLERANCE, RELATIVE_TOLERANCE};
/// assert!(RELATIVE_TOLERANCE <= EPSILON_TOLERANCE);
/// ```
pub const RELATIVE_TOLERANCE: f64 = 1.0e-12;

/// Tolerance for recovering an angle after a rotate/atan2 round trip.
///
/// A few ulps of `f64` around values in `[-PI, PI]`.
///
/// # Examples
/// ```
/// use config::constants::ANGLE_TOLERANCE;
/// let theta = std::f64::consts::FRAC_PI_4;
/// let recovered = (5.0 * theta.sin()).atan2(5.0 * theta.cos());
/// assert!((recovered - theta).abs() < ANGLE_TOLERANCE);
/// ```
pub const ANGLE_TOLERANCE: f64 = 1.0e-14;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of comparison settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute tolerance for approximate comparisons.
    pub tolerance: f64,
    /// Relative tolerance for approximate comparisons of large magnitudes.
    pub max_relative: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.0).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64, max_relative: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !max_relative.is_finite() || max_relative < 0.0 {
            return Err(ConfigError::InvalidRelativeTolerance(max_relative));
        }
        Ok(Self {
            tolerance,
            max_relative,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_relative: RELATIVE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the absolute tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the relative tolerance is negative or not finite.
    InvalidRelativeTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidRelativeTolerance(value) => {
                write!(f, "max_relative must be non-negative and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within an absolute `tolerance` or
/// within `max_relative` times the larger magnitude.
///
/// Non-finite values only match when they are identical.
///
/// # Example
///
/// ```rust
/// use config::constants::{approx_equal, EPSILON_TOLERANCE, RELATIVE_TOLERANCE};
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11, EPSILON_TOLERANCE, RELATIVE_TOLERANCE));
/// assert!(!approx_equal(1.0, 1.1, EPSILON_TOLERANCE, RELATIVE_TOLERANCE));
/// assert!(approx_equal(1.0e9, 1.0e9 + 1.0, EPSILON_TOLERANCE, 1.0e-6));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64, tolerance: f64, max_relative: f64) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let diff = (a - b).abs();
    diff <= tolerance || diff <= max_relative * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests;
