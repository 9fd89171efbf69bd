// src/validation/mod.rs

//! Provides functions to validate an `AmplitudeVector` before it is evolved
//! further or sampled.

use crate::core::{AmplitudeVector, GroverError, NORM_TOLERANCE, Result};
use tracing::warn;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// A non-finite total (a NaN or infinite amplitude) always fails.
///
/// # Arguments
/// * `state` - The `AmplitudeVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GroverError::UnnormalizedState)` otherwise.
pub fn check_normalization(state: &AmplitudeVector, tolerance: Option<f64>) -> Result<()> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if !norm_sqr.is_finite() || (norm_sqr - 1.0).abs() > tolerance {
        warn!(
            norm_sqr,
            tolerance,
            dim = state.dim(),
            "state vector failed normalization check"
        );
        return Err(GroverError::UnnormalizedState {
            norm_sqr,
            tolerance,
        });
    }
    Ok(())
}

/// Checks that a normalization tolerance is usable.
pub fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(GroverError::InvalidConfiguration {
            message: format!(
                "Normalization tolerance must be a positive finite number, got {}",
                tolerance
            ),
        })
    }
}
