//! Comparison settings building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so vector code stays
//! decoupled from literal tolerances.

use ::config::constants::{approx_equal, GlobalConfig, EPSILON_TOLERANCE, RELATIVE_TOLERANCE};

use crate::error::VectorResult;

/// Tolerances for [`Vector2D::approx_eq`](crate::Vector2D::approx_eq).
///
/// # Examples
/// ```
/// use vec2d::CompareConfig;
/// let cfg = CompareConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    /// Absolute tolerance per component.
    pub tolerance: f64,
    /// Relative tolerance per component, scaled by the larger magnitude.
    pub max_relative: f64,
}

impl CompareConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use vec2d::CompareConfig;
    /// let cfg = CompareConfig::new(1.0e-6, 0.0).unwrap();
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// assert!(CompareConfig::new(-1.0, 0.0).is_err());
    /// ```
    pub fn new(tolerance: f64, max_relative: f64) -> VectorResult<Self> {
        let cfg = GlobalConfig::new(tolerance, max_relative)?;
        Ok(Self::from(cfg))
    }

    /// Absolute-only comparison.
    pub fn absolute(tolerance: f64) -> VectorResult<Self> {
        Self::new(tolerance, 0.0)
    }

    /// Returns true when `a` and `b` are within tolerance of each other.
    pub(crate) fn scalars_close(&self, a: f64, b: f64) -> bool {
        approx_equal(a, b, self.tolerance, self.max_relative)
    }
}

impl From<GlobalConfig> for CompareConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            max_relative: cfg.max_relative,
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_relative: RELATIVE_TOLERANCE,
        }
    }
}
