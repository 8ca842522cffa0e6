//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.max_relative >= 0.0);
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
    assert_eq!(cfg.max_relative, RELATIVE_TOLERANCE);
}

#[test]
fn tolerances_are_ordered() {
    assert!(ANGLE_TOLERANCE < EPSILON_TOLERANCE);
    assert!(RELATIVE_TOLERANCE <= EPSILON_TOLERANCE);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(-1.0e-9, 0.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-9)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, -1.0).unwrap_err(),
        ConfigError::InvalidRelativeTolerance(-1.0)
    );
    assert!(GlobalConfig::new(f64::INFINITY, 0.0).is_err());
    assert!(GlobalConfig::new(1.0e-9, f64::NAN).is_err());
}

#[test]
fn new_accepts_valid_inputs() {
    let cfg = GlobalConfig::new(1.0e-3, 1.0e-6).unwrap();
    assert_eq!(cfg.tolerance, 1.0e-3);
    assert_eq!(cfg.max_relative, 1.0e-6);
}

#[test]
fn error_display_names_field() {
    assert!(ConfigError::InvalidTolerance(0.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidRelativeTolerance(-1.0)
        .to_string()
        .contains("max_relative"));
}

#[test]
fn approx_equal_respects_absolute_tolerance() {
    assert!(approx_equal(2.0, 2.0 + EPSILON_TOLERANCE / 2.0, EPSILON_TOLERANCE, 0.0));
    assert!(!approx_equal(2.0, 2.0 + EPSILON_TOLERANCE * 10.0, EPSILON_TOLERANCE, 0.0));
}

#[test]
fn approx_equal_scales_relative_tolerance() {
    assert!(approx_equal(1.0e9, 1.0e9 + 1.0, EPSILON_TOLERANCE, 1.0e-6));
    assert!(!approx_equal(1.0, 1.001, EPSILON_TOLERANCE, 1.0e-6));
}

#[test]
fn approx_equal_non_finite() {
    assert!(approx_equal(f64::INFINITY, f64::INFINITY, EPSILON_TOLERANCE, 1.0));
    assert!(!approx_equal(f64::INFINITY, 1.0, EPSILON_TOLERANCE, 1.0));
    assert!(!approx_equal(f64::NAN, f64::NAN, EPSILON_TOLERANCE, 1.0));
}
