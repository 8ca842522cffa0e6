//! # vec2d
//!
//! Generic two-dimensional vector value type for geometry, physics and
//! graphics code.
//!
//! `Vector2D<T>` is an immutable pair of coordinates over any signed integer
//! or floating-point element type. Every operation returns a new value.
//!
//! ## Usage
//!
//! ```rust
//! use vec2d::Vector2D;
//!
//! let a = Vector2D::new(10, 5);
//! let b = Vector2D::new(5, 5);
//!
//! assert_eq!(a + b, Vector2D::new(15, 10));
//! assert_eq!(a.dot(b), 75);
//! assert_eq!(a.length(), 11);
//! assert_eq!(a.to_string(), "vec(10, 5)");
//! ```
//!
//! ## Numeric Hazards
//!
//! Core operations never return errors. Integer division by zero panics
//! and float division by zero yields infinities or NaN, exactly like the
//! element type. Operations that round-trip through `f64` (`length`,
//! `normalize`, `rotate`, `cast`) truncate for integer elements.
//! Use [`Vector2D::checked_div_scalar`], [`Vector2D::checked_div`] and
//! [`Vector2D::try_normalize`] when inputs are untrusted.

pub mod compare;
pub mod config;
pub mod error;
pub mod interop;
pub mod scalar;
pub mod vector;

pub use crate::config::CompareConfig;
pub use error::{VectorError, VectorResult};
pub use scalar::Scalar;
pub use vector::Vector2D;
