//! Error handling logic

use thiserror::Error;

/// Failures raised by the Grover simulation.
///
/// Every variant is raised synchronously at the point of detection. None of
/// them is retryable: they indicate either bad caller input or a defect in a
/// state transformation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroverError {
    /// The marked index does not address an entry of the search space.
    #[error("Invalid Index: target {index} is outside the search space of size {size}")]
    InvalidIndex {
        /// Offending index as supplied by the caller.
        index: i64,
        /// Size N = 2^n of the search space.
        size: usize,
    },

    /// Negative or zero counts, or a register width the dense model rejects.
    #[error("Invalid Configuration: {message}")]
    InvalidConfiguration {
        /// InvalidConfiguration failure message
        message: String,
    },

    /// Squared magnitudes no longer sum to one. Indicates an implementation bug.
    #[error("Unnormalized State: Sum(|a_i|^2) = {norm_sqr} (Deviation > {tolerance})")]
    UnnormalizedState {
        /// Measured total squared magnitude.
        norm_sqr: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },

    /// An engine transition was requested from the wrong phase.
    #[error("Invalid Operation: {message}")]
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GroverError>;
