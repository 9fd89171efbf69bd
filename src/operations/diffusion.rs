// src/operations/diffusion.rs

//! Inversion about the average.

use crate::core::AmplitudeVector;

/// Reflects every amplitude about the mean amplitude: `a -> 2·mean - a`.
///
/// After the oracle has flipped the target's sign its amplitude sits far
/// below the mean, so the reflection amplifies it while the unmarked entries,
/// which sit close to the mean, are damped. Operates on the full reduced
/// N-dimensional register; there is no separate ancilla dimension.
///
/// The reflection preserves the total squared magnitude of the states that
/// Grover's search produces but never renormalizes on its own. Callers check
/// normalization separately.
pub fn invert(state: &mut AmplitudeVector) {
    let twice_mean = state.mean() * 2.0;
    for amplitude in state.amplitudes_mut() {
        *amplitude = twice_mean - *amplitude;
    }
}
