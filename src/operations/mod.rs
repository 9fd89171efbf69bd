// src/operations/mod.rs

//! Defines the two transformations a Grover iteration is built from.
//!
//! Both act in place on an [`AmplitudeVector`]:
//! - the phase oracle, which flips the sign of the marked entry, and
//! - the diffusion operator, which reflects every entry about the mean.

pub mod diffusion;
pub mod oracle;

use crate::core::{AmplitudeVector, Result};
use std::fmt;

/// A state transformation applied by the engine.
///
/// Analogy: in a gate-level circuit the oracle is a multi-controlled Z
/// conjugated by X gates, and the diffusion is H⊗n · (2|0⟩⟨0| - I) · H⊗n.
/// The dense model applies their net effect directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Phase-mark the target entry (multiply its amplitude by -1).
    MarkPhase {
        /// Index of the marked entry.
        target: usize,
    },
    /// Inversion about the average over the full register.
    Diffuse,
}

impl Operation {
    /// The ordered pair that makes up one Grover iteration.
    pub fn grover_iteration(target: usize) -> [Operation; 2] {
        [Operation::MarkPhase { target }, Operation::Diffuse]
    }

    /// Applies this operation to `state` in place.
    pub fn apply(&self, state: &mut AmplitudeVector) -> Result<()> {
        match self {
            Operation::MarkPhase { target } => oracle::mark_phase(state, *target),
            Operation::Diffuse => {
                diffusion::invert(state);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::MarkPhase { target } => write!(f, "MarkPhase({})", target),
            Operation::Diffuse => write!(f, "Diffuse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_is_oracle_then_diffusion() {
        assert_eq!(
            Operation::grover_iteration(3),
            [Operation::MarkPhase { target: 3 }, Operation::Diffuse]
        );
    }

    #[test]
    fn apply_dispatches_to_the_transformations() -> Result<()> {
        let mut via_ops = AmplitudeVector::uniform(3)?;
        for op in Operation::grover_iteration(6) {
            op.apply(&mut via_ops)?;
        }

        let mut direct = AmplitudeVector::uniform(3)?;
        oracle::mark_phase(&mut direct, 6)?;
        diffusion::invert(&mut direct);

        assert_eq!(via_ops, direct);
        Ok(())
    }
}
