// src/operations/oracle.rs

//! The phase oracle of Grover's search.

use crate::core::{AmplitudeVector, Result};

/// Flips the sign of the amplitude at `target`.
///
/// A pure phase flip: every other entry, the total magnitude and the
/// measurement distribution are left untouched.
///
/// # Errors
/// `InvalidIndex` if `target` lies outside `[0, N)`.
pub fn mark_phase(state: &mut AmplitudeVector, target: usize) -> Result<()> {
    let amplitude = state.get(target)?;
    state.set(target, -amplitude)
}
