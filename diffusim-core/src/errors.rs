//! Error types for simulation geometry.
//!
//! The math in this crate has exactly one failure mode worth modelling:
//! an input the operation is not defined for (a zero-length direction, a
//! NaN component, an index off the end of a vector). [`SimError::Math`]
//! carries the operation name, a [`MathErrorKind`] classification, and a
//! human-readable message.
//!
//! # Usage
//!
//! Fallible functions return [`SimResult<T>`], which is
//! `Result<T, SimError>`. Use the constructor method for consistent error
//! creation:
//!
//! ```
//! use diffusim_core::{SimError, MathErrorKind};
//!
//! fn safe_invert(x: f64) -> Result<f64, SimError> {
//!     if x == 0.0 {
//!         return Err(SimError::math(
//!             "safe_invert",
//!             MathErrorKind::InvalidInput,
//!             "input is zero",
//!         ));
//!     }
//!     Ok(1.0 / x)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`SimError::Math`] to distinguish between numerical failure
/// modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation (e.g. zero-length direction).
    InvalidInput,
    /// Input contains NaN or infinity.
    NotFinite,
    /// Value outside the valid domain (e.g. component index > 2).
    OutOfRange,
}

/// Error type for simulation geometry calculations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Numerical computation failure.
    #[error("math error in {operation} ({kind:?}): {message}")]
    Math {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// Creates a [`Math`](Self::Math) error with the given kind.
    pub fn math(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::Math {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] of this error.
    pub fn kind(&self) -> MathErrorKind {
        match self {
            Self::Math { kind, .. } => *kind,
        }
    }
}
