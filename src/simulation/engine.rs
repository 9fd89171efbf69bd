// src/simulation/engine.rs
use crate::core::{AmplitudeVector, GroverError, NORM_TOLERANCE, Result, SearchParams};
use crate::operations::Operation;
use crate::simulation::{MeasurementOutcome, sampler};
use crate::validation::{check_normalization, check_tolerance};
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// Lifecycle of a single search run.
///
/// `Initialized → Prepared → Iterating(k) → Ready`, after which
/// [`GroverEngine::measure`] consumes the engine. The consumed engine is the
/// terminal `Measured` phase: a collapsed register cannot be sampled again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Register allocated in |0...0⟩.
    Initialized,
    /// Uniform superposition built, no iteration applied yet.
    Prepared,
    /// `k` (oracle, diffusion) pairs applied, more to go.
    Iterating(u32),
    /// All iterations applied; the state is the final distribution.
    Ready,
}

impl fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnginePhase::Initialized => write!(f, "Initialized"),
            EnginePhase::Prepared => write!(f, "Prepared"),
            EnginePhase::Iterating(k) => write!(f, "Iterating({})", k),
            EnginePhase::Ready => write!(f, "Ready"),
        }
    }
}

/// Runs one Grover search over a dense amplitude vector.
///
/// Each engine owns its register exclusively from construction to
/// measurement, so engines for different trials share nothing and can live on
/// different threads.
#[derive(Debug)]
pub struct GroverEngine {
    params: SearchParams,
    state: AmplitudeVector,
    phase: EnginePhase,
    norm_tolerance: f64,
}

impl GroverEngine {
    /// Initializes an engine for `params` with the default normalization tolerance.
    ///
    /// # Errors
    /// * `InvalidConfiguration` if the qubit count is out of range.
    /// * `InvalidIndex` if the target does not address the search space.
    pub fn new(params: SearchParams) -> Result<Self> {
        Self::with_tolerance(params, NORM_TOLERANCE)
    }

    /// Initializes an engine with an explicit normalization tolerance.
    pub fn with_tolerance(params: SearchParams, norm_tolerance: f64) -> Result<Self> {
        check_tolerance(norm_tolerance)?;
        params.validate()?;
        let state = AmplitudeVector::zero_state(params.qubits)?;
        debug!(%params, dim = state.dim(), "grover engine initialized");
        Ok(Self {
            params,
            state,
            phase: EnginePhase::Initialized,
            norm_tolerance,
        })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Read-only view of the register.
    pub fn state(&self) -> &AmplitudeVector {
        &self.state
    }

    /// Builds the uniform superposition over all N entries.
    ///
    /// With zero configured iterations the engine moves straight to `Ready`,
    /// which models classical unassisted sampling.
    pub fn prepare(&mut self) -> Result<()> {
        self.expect_phase(EnginePhase::Initialized, "prepare")?;
        self.state.fill_uniform();
        self.phase = if self.params.iterations.get() == 0 {
            EnginePhase::Ready
        } else {
            EnginePhase::Prepared
        };
        debug!(phase = %self.phase, "uniform superposition prepared");
        Ok(())
    }

    /// Applies exactly one Grover iteration: the oracle, then the diffusion.
    ///
    /// The register is checked for normalization before the pair is applied.
    pub fn step(&mut self) -> Result<()> {
        let k = match self.phase {
            EnginePhase::Prepared => 1,
            EnginePhase::Iterating(done) => done + 1,
            other => {
                return Err(GroverError::InvalidOperation {
                    message: format!("Cannot apply a Grover iteration in phase {}", other),
                });
            }
        };

        check_normalization(&self.state, Some(self.norm_tolerance))?;
        for op in Operation::grover_iteration(self.params.target) {
            op.apply(&mut self.state)?;
        }

        self.phase = if k >= self.params.iterations.get() {
            EnginePhase::Ready
        } else {
            EnginePhase::Iterating(k)
        };
        let marked_probability = self.state.probability(self.params.target)?;
        trace!(iteration = k, marked_probability, "iteration applied");
        Ok(())
    }

    /// Prepares the register and applies every configured iteration.
    pub fn run(&mut self) -> Result<()> {
        self.prepare()?;
        while self.phase != EnginePhase::Ready {
            self.step()?;
        }
        Ok(())
    }

    /// Measures the final register once, consuming the engine.
    ///
    /// # Errors
    /// * `InvalidOperation` if the engine has not reached `Ready`.
    /// * `UnnormalizedState` if the final distribution does not sum to 1.
    pub fn measure<R: Rng + ?Sized>(self, rng: &mut R) -> Result<MeasurementOutcome> {
        self.expect_phase(EnginePhase::Ready, "measure")?;
        let tolerance = Some(self.norm_tolerance);
        let outcome = sampler::measure(&self.state, self.params.target, tolerance, rng)?;
        trace!(%outcome, "register measured");
        Ok(outcome)
    }

    fn expect_phase(&self, expected: EnginePhase, action: &str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            let phase = self.phase;
            Err(GroverError::InvalidOperation {
                message: format!("Cannot {action} in phase {phase} (expected {expected})"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::success_probability;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn walks_through_every_phase() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(3, 7, 2))?;
        assert_eq!(engine.phase(), EnginePhase::Initialized);
        assert_eq!(engine.state().probabilities()[0], 1.0);

        engine.prepare()?;
        assert_eq!(engine.phase(), EnginePhase::Prepared);
        engine.step()?;
        assert_eq!(engine.phase(), EnginePhase::Iterating(1));
        engine.step()?;
        assert_eq!(engine.phase(), EnginePhase::Ready);
        Ok(())
    }

    #[test]
    fn zero_iterations_skip_straight_to_ready() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(6, 63, 0))?;
        engine.run()?;
        assert_eq!(engine.phase(), EnginePhase::Ready);
        for p in engine.state().probabilities() {
            assert_abs_diff_eq!(p, 1.0 / 64.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn final_marked_probability_matches_closed_form() -> Result<()> {
        for (qubits, iterations) in [(2, 1), (3, 1), (3, 2), (3, 3), (6, 3), (8, 12)] {
            let target = (1usize << qubits) - 1;
            let mut engine = GroverEngine::new(SearchParams::new(qubits, target, iterations))?;
            engine.run()?;
            assert_abs_diff_eq!(
                engine.state().probability(target)?,
                success_probability(1 << qubits, iterations),
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(engine.state().norm_sqr(), 1.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn out_of_order_transitions_are_rejected() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(3, 1, 1))?;
        assert!(matches!(engine.step(), Err(GroverError::InvalidOperation { .. })));

        let mut rng = StdRng::seed_from_u64(3);
        let unprepared = GroverEngine::new(SearchParams::new(3, 1, 1))?;
        assert!(matches!(
            unprepared.measure(&mut rng),
            Err(GroverError::InvalidOperation { .. })
        ));

        engine.run()?;
        assert!(matches!(engine.prepare(), Err(GroverError::InvalidOperation { .. })));
        assert!(matches!(engine.step(), Err(GroverError::InvalidOperation { .. })));
        Ok(())
    }

    #[test]
    fn prepare_fills_the_register_in_place() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(5, 4, 1))?;
        let buffer = engine.state().amplitudes().as_ptr();
        engine.prepare()?;
        assert_eq!(engine.state().amplitudes().as_ptr(), buffer);
        assert_eq!(engine.state(), &AmplitudeVector::uniform(5)?);
        Ok(())
    }

    #[test]
    fn step_rejects_a_corrupted_register() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(3, 5, 2))?;
        engine.prepare()?;
        engine.state.amplitudes_mut()[0] *= 2.0;
        assert!(matches!(engine.step(), Err(GroverError::UnnormalizedState { .. })));
        // The failed step leaves the phase untouched
        assert_eq!(engine.phase(), EnginePhase::Prepared);
        Ok(())
    }

    #[test]
    fn measure_rejects_a_corrupted_register() -> Result<()> {
        let mut engine = GroverEngine::new(SearchParams::new(3, 5, 0))?;
        engine.run()?;
        assert_eq!(engine.phase(), EnginePhase::Ready);
        engine.state.amplitudes_mut()[3] *= 2.0;

        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            engine.measure(&mut rng),
            Err(GroverError::UnnormalizedState { .. })
        ));
        Ok(())
    }

    #[test]
    fn construction_validates_inputs() {
        assert_eq!(
            GroverEngine::new(SearchParams::new(3, 8, 1)).err(),
            Some(GroverError::InvalidIndex { index: 8, size: 8 })
        );
        assert!(matches!(
            GroverEngine::new(SearchParams::new(0, 0, 1)),
            Err(GroverError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            GroverEngine::with_tolerance(SearchParams::new(3, 0, 1), 0.0),
            Err(GroverError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn measure_reports_marked_flag() -> Result<()> {
        // N=4 with one iteration is deterministic
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut engine = GroverEngine::new(SearchParams::new(2, 2, 1))?;
            engine.run()?;
            let outcome = engine.measure(&mut rng)?;
            assert_eq!(outcome.to_string(), "|2> (marked)");
        }
        Ok(())
    }
}
