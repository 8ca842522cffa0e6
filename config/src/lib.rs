//! # Config Crate
//!
//! Centralized numeric constants for the vec2d workspace.
//! Tolerances used by approximate comparisons live here so that the vector
//! crate never scatters literal epsilons.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, GlobalConfig, EPSILON_TOLERANCE, RELATIVE_TOLERANCE};
//!
//! assert!(approx_equal(1.0, 1.0 + EPSILON_TOLERANCE / 10.0, EPSILON_TOLERANCE, RELATIVE_TOLERANCE));
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All tolerances defined once, used everywhere
//! - **Validated**: Runtime overrides go through `GlobalConfig::new`

pub mod constants;
