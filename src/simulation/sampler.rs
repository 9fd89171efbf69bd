// src/simulation/sampler.rs

//! Born-rule sampling of a final amplitude vector.

use crate::core::{AmplitudeVector, GroverError, NORM_TOLERANCE, Result};
use crate::simulation::MeasurementOutcome;
use crate::validation::check_normalization;
use rand::{Rng, RngExt};

/// Draws one basis-state index with probability |a_i|^2.
///
/// The state must be normalized within `tolerance` (defaults to
/// `NORM_TOLERANCE`). An unnormalized state is reported, never renormalized.
/// The state is only read.
pub fn draw_index<R: Rng + ?Sized>(
    state: &AmplitudeVector,
    tolerance: Option<f64>,
    rng: &mut R,
) -> Result<usize> {
    check_normalization(state, tolerance)?;

    let p_sample: f64 = rng.random::<f64>(); // Sample in [0, 1)
    let mut cumulative = 0.0;
    let mut last_possible = None;

    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        let probability = amplitude.norm_sqr();
        if probability <= 0.0 {
            continue;
        }
        cumulative += probability;
        last_possible = Some(index);
        if p_sample < cumulative {
            return Ok(index);
        }
    }

    // Rounding can leave the cumulative sum a hair under p_sample; the
    // remaining mass belongs to the last reachable outcome.
    match last_possible {
        Some(index) => Ok(index),
        None => Err(GroverError::UnnormalizedState {
            norm_sqr: cumulative,
            tolerance: tolerance.unwrap_or(NORM_TOLERANCE),
        }),
    }
}

/// Measures `state` once and reports whether the draw hit `target`.
///
/// # Errors
/// * `InvalidIndex` if `target` is outside the state's index range.
/// * `UnnormalizedState` if the probabilities do not sum to 1 within tolerance.
pub fn measure<R: Rng + ?Sized>(
    state: &AmplitudeVector,
    target: usize,
    tolerance: Option<f64>,
    rng: &mut R,
) -> Result<MeasurementOutcome> {
    if target >= state.dim() {
        return Err(GroverError::InvalidIndex {
            index: i64::try_from(target).unwrap_or(i64::MAX),
            size: state.dim(),
        });
    }
    let index = draw_index(state, tolerance, rng)?;
    Ok(MeasurementOutcome {
        marked: index == target,
        index,
    })
}
