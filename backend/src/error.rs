//! Error types for the randomness core
//!
//! Every fallible operation returns [`RandomError`]. Errors are raised at the
//! call that detects them and are never retried internally. A call that
//! fails leaves the random stream exactly where it was.

use thiserror::Error;

/// Errors that can occur while seeding or drawing values
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    /// Seed is not an integer (or a non-empty sequence of integers)
    /// representable in 32 bits
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Explicit `max` below `min`
    #[error("Invalid range: max {max} is less than min {min}")]
    InvertedBounds { min: f64, max: f64 },

    /// Integer range with no values in it
    #[error("Invalid range: span of [{min}, {max}] is empty")]
    EmptySpan { min: i64, max: i64 },

    /// Precision is zero, negative or not finite
    #[error("Invalid precision {precision}: must be a positive finite number")]
    InvalidPrecision { precision: f64 },

    /// `min` or `max` is NaN or infinite
    #[error("Invalid range: bound {value} is not finite")]
    NonFiniteBound { value: f64 },

    /// More than 2^53 grid points between `min` and `max`
    #[error("Invalid precision {precision}: range {range} has too many steps")]
    PrecisionTooFine { precision: f64, range: f64 },

    /// Pick requested from an empty sequence or map
    #[error("Cannot pick an element from an empty sequence")]
    EmptyInput,

    /// Checkpoint replay did not reproduce the recorded state
    #[error("Checkpoint state hash mismatch: expected {expected}, replayed {actual}")]
    CheckpointMismatch { expected: String, actual: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RandomError {
    /// True for the bounds/precision family of errors
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            RandomError::InvertedBounds { .. }
                | RandomError::EmptySpan { .. }
                | RandomError::InvalidPrecision { .. }
                | RandomError::NonFiniteBound { .. }
                | RandomError::PrecisionTooFine { .. }
        )
    }
}
