// src/simulation/config.rs

use crate::core::{NORM_TOLERANCE, Result};
use crate::validation::check_tolerance;

/// Configuration for a [`Simulator`](super::Simulator).
///
/// ```
/// use grover_sim::SimulatorConfig;
///
/// let config = SimulatorConfig::new()
///     .with_seed(42)
///     .with_norm_tolerance(1e-6)
///     .with_parallel(false);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.norm_tolerance, 1e-6);
/// assert!(!config.parallel);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Base seed for the per-trial random sources. `None` draws a fresh one
    /// for every trial run.
    pub seed: Option<u64>,

    /// Allowed deviation of the total squared magnitude from 1.0.
    pub norm_tolerance: f64,

    /// Dispatch trials across the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            norm_tolerance: NORM_TOLERANCE,
            parallel: true,
        }
    }
}

impl SimulatorConfig {
    /// Creates a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the base seed so trial runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the allowed deviation of the squared norm from 1.0.
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Chooses between rayon dispatch and a sequential loop.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects a non-positive or non-finite tolerance.
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.norm_tolerance)
    }
}
