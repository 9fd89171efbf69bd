// src/core/state.rs

use super::constants::grover_constants::MAX_QUBITS;
use super::error::{GroverError, Result};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// Dimension N = 2^n of a register of `qubits` width.
///
/// Rejects an empty register and anything wider than [`MAX_QUBITS`], where the
/// dense vector stops being tractable.
pub(crate) fn dimension_for(qubits: u32) -> Result<usize> {
    if qubits == 0 || qubits > MAX_QUBITS {
        return Err(GroverError::InvalidConfiguration {
            message: format!(
                "Qubit count must be within 1..={}, got {}",
                MAX_QUBITS, qubits
            ),
        });
    }
    match 1usize.checked_shl(qubits) {
        Some(dim) => Ok(dim),
        None => Err(GroverError::InvalidConfiguration {
            message: format!("{} qubits overflow the state vector dimension", qubits),
        }),
    }
}

/// The dense 2^n-dimensional amplitude array of a simulated register.
///
/// Entry `i` is the complex amplitude of basis state |i⟩; its squared
/// magnitude is the probability of measuring `i`. A vector is owned by a
/// single engine for the duration of one search run. Only the oracle and the
/// diffusion operator write to it.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: u32,
}

impl AmplitudeVector {
    /// Creates the |0...0⟩ basis state: all probability on index 0.
    pub fn zero_state(num_qubits: u32) -> Result<Self> {
        let dim = dimension_for(num_qubits)?;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Creates the uniform superposition, every entry equal to 1/√N.
    ///
    /// This is the effect of a Hadamard on each qubit of |0...0⟩. All phases
    /// start out positive.
    pub fn uniform(num_qubits: u32) -> Result<Self> {
        let mut state = Self::zero_state(num_qubits)?;
        state.fill_uniform();
        Ok(state)
    }

    /// Overwrites every entry with 1/√N, reusing the existing allocation.
    pub(crate) fn fill_uniform(&mut self) {
        let amplitude = Complex::new(1.0 / (self.dim() as f64).sqrt(), 0.0);
        self.amplitudes.fill(amplitude);
    }

    /// Wraps an existing amplitude array. The length must be a power of two
    /// within the supported register widths. No normalization is enforced.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self> {
        let dim = amplitudes.len();
        if !dim.is_power_of_two() {
            return Err(GroverError::InvalidConfiguration {
                message: format!("Amplitude count {} is not a power of two", dim),
            });
        }
        let num_qubits = dim.trailing_zeros();
        dimension_for(num_qubits)?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Gets the number of qubits n.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gets the dimension N = 2^n.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Reads the amplitude at `index`.
    pub fn get(&self, index: usize) -> Result<Complex<f64>> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or_else(|| self.index_error(index))
    }

    /// Overwrites the amplitude at `index`.
    pub(crate) fn set(&mut self, index: usize, value: Complex<f64>) -> Result<()> {
        let err = self.index_error(index);
        let slot = self.amplitudes.get_mut(index).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Mutable access for whole-vector transformations.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Arithmetic mean of all entries.
    pub fn mean(&self) -> Complex<f64> {
        let sum: Complex<f64> = self.amplitudes.iter().sum();
        sum / self.dim() as f64
    }

    /// Total squared magnitude, Sum(|a_i|^2). Equals 1 for a normalized state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Measurement probability of every basis state (Born rule).
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Measurement probability of a single basis state.
    pub fn probability(&self, index: usize) -> Result<f64> {
        self.get(index).map(|a| a.norm_sqr())
    }

    fn index_error(&self, index: usize) -> GroverError {
        GroverError::InvalidIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            size: self.dim(),
        }
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
