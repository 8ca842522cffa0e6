//! # Error Types
//!
//! Errors reported by the checked vector operations. The unchecked core
//! operations never produce these; they keep the element type's native
//! behavior instead.
//!
//! ## Error Policy
//!
//! - Checked operations reject bad input explicitly instead of producing
//!   NaN or panicking
//! - Errors include the name of the rejecting operation

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during checked vector operations.
///
/// ## Example
///
/// ```rust
/// use vec2d::{Vector2D, VectorError};
///
/// match Vector2D::new(4, 2).checked_div_scalar(0) {
///     Ok(v) => println!("quotient: {v}"),
///     Err(VectorError::ZeroDivisor { operation }) => eprintln!("{operation} by zero"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A divisor, or a component of a divisor vector, was zero.
    #[error("Division by zero in '{operation}'")]
    ZeroDivisor {
        /// Name of the rejecting operation.
        operation: &'static str,
    },

    /// Normalization of a vector whose length is zero.
    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    /// Invalid comparison tolerances.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
