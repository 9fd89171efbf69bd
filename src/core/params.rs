// src/core/params.rs

use super::error::{GroverError, Result};
use super::state::dimension_for;
use std::fmt;

/// Number of (oracle, diffusion) pairs applied during one search run.
///
/// Zero is valid and models classical, unassisted sampling. Signed caller
/// input goes through [`TryFrom<i64>`], which rejects negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IterationCount(pub u32);

impl IterationCount {
    /// Gets the raw count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for IterationCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for IterationCount {
    type Error = GroverError;

    fn try_from(value: i64) -> Result<Self> {
        let max = u32::MAX;
        match u32::try_from(value) {
            Ok(count) => Ok(Self(count)),
            Err(_) => Err(GroverError::InvalidConfiguration {
                message: format!("Iteration count must be within 0..={max}, got {value}"),
            }),
        }
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} iteration(s)", self.0)
    }
}

/// The caller-supplied inputs that fully describe one search run.
///
/// A run is stateless given these values, so the same `SearchParams` can be
/// used to build any number of fresh, independent engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Register width n; the search space holds N = 2^n entries.
    pub qubits: u32,
    /// The marked entry k, 0 <= k < N.
    pub target: usize,
    /// Grover iterations applied before measurement.
    pub iterations: IterationCount,
}

impl SearchParams {
    /// Creates parameters without validating them.
    /// Validation happens once, when an engine is constructed.
    pub fn new(qubits: u32, target: usize, iterations: u32) -> Self {
        Self {
            qubits,
            target,
            iterations: IterationCount(iterations),
        }
    }

    /// Builds parameters from signed caller input, rejecting negative values.
    ///
    /// # Errors
    /// * `InvalidConfiguration` for a negative or oversized qubit or iteration count.
    /// * `InvalidIndex` for a target outside `[0, 2^qubits)`.
    pub fn from_signed(qubits: i64, target: i64, iterations: i64) -> Result<Self> {
        let Ok(width) = u32::try_from(qubits) else {
            return Err(GroverError::InvalidConfiguration {
                message: format!("Qubit count must be non-negative, got {}", qubits),
            });
        };
        let size = dimension_for(width)?;
        let Ok(index) = usize::try_from(target) else {
            return Err(GroverError::InvalidIndex {
                index: target,
                size,
            });
        };
        let iterations = IterationCount::try_from(iterations)?;

        let params = Self {
            qubits: width,
            target: index,
            iterations,
        };
        params.validate()?;
        Ok(params)
    }

    /// Size N = 2^n of the search space.
    pub fn search_space_size(&self) -> Result<usize> {
        dimension_for(self.qubits)
    }

    /// Checks the register width and that the target addresses an entry.
    pub fn validate(&self) -> Result<()> {
        let size = self.search_space_size()?;
        if self.target >= size {
            return Err(GroverError::InvalidIndex {
                index: i64::try_from(self.target).unwrap_or(i64::MAX),
                size,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Search(qubits={}, target={}, {})",
            self.qubits, self.target, self.iterations
        )
    }
}
