// src/simulation/mod.rs

//! Runs Grover searches and folds their measurements into statistics.
//!
//! This module contains the `Simulator` entry point, the per-run
//! `GroverEngine` state machine and the Born-rule `sampler`.

mod config;
pub mod engine;
mod results;
pub mod sampler;

pub use config::SimulatorConfig;
pub use engine::{EnginePhase, GroverEngine};
pub use results::{MeasurementOutcome, TrialStatistics};

use crate::core::{GroverError, Result, SearchParams};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, info};

/// The main simulator orchestrating repeated, independent search runs.
///
/// Holds configuration only. Every trial builds its own engine and its own
/// random source, so no mutable state is shared between trials and the
/// trials may run on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Simulator with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `trials` independent searches described by `params`.
    pub fn search(&self, params: SearchParams, trials: usize) -> Result<TrialStatistics> {
        params.validate()?;
        let tolerance = self.config.norm_tolerance;
        self.run_trials(|| GroverEngine::with_tolerance(params, tolerance), trials)
    }

    /// Runs `trials` independent trials and counts how many measured the
    /// marked entry.
    ///
    /// For every trial `factory` builds a fresh engine, which is run to
    /// `Ready` and measured once. Trial `i` draws from a `StdRng` seeded with
    /// a mix of the base seed and `i`, so a seeded run yields the same
    /// statistics whether trials are dispatched sequentially or in parallel.
    /// Individual outcomes are not kept.
    ///
    /// # Errors
    /// * `InvalidConfiguration` if `trials` is zero or the tolerance is unusable.
    /// * Any error raised while building, running or measuring an engine.
    pub fn run_trials<F>(&self, factory: F, trials: usize) -> Result<TrialStatistics>
    where
        F: Fn() -> Result<GroverEngine> + Sync,
    {
        self.config.validate()?;
        if trials == 0 {
            return Err(GroverError::InvalidConfiguration {
                message: "Trial count must be at least 1".to_string(),
            });
        }

        let base_seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        let parallel = self.config.parallel;
        debug!(trials, base_seed, parallel, "starting trial run");

        let run_one = |trial: usize| -> Result<MeasurementOutcome> {
            let mut rng = StdRng::seed_from_u64(trial_seed(base_seed, trial as u64));
            let mut engine = factory()?;
            engine.run()?;
            engine.measure(&mut rng)
        };

        let stats = if parallel {
            (0..trials)
                .into_par_iter()
                .map(run_one)
                .try_fold(TrialStatistics::default, fold_outcome)
                .try_reduce(TrialStatistics::default, |a, b| Ok(a.merge(b)))?
        } else {
            (0..trials)
                .map(run_one)
                .try_fold(TrialStatistics::default(), fold_outcome)?
        };

        info!(
            successes = stats.successes(),
            trials = stats.trials(),
            success_rate = stats.success_rate(),
            "trial run finished"
        );
        Ok(stats)
    }
}

/// Folds one trial's outcome into the running statistics.
fn fold_outcome(
    mut stats: TrialStatistics,
    outcome: Result<MeasurementOutcome>,
) -> Result<TrialStatistics> {
    stats.record(&outcome?);
    Ok(stats)
}

/// Derives the seed of one trial from the base seed (SplitMix64 step).
fn trial_seed(base_seed: u64, trial: u64) -> u64 {
    let step = (trial + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut z = base_seed.wrapping_add(step);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
