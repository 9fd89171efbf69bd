// tests/engine_tests.rs

use approx::assert_abs_diff_eq;
use grover_sim::theory::success_probability;
use grover_sim::{
    AmplitudeVector, EnginePhase, GroverEngine, GroverError, Operation, SearchParams, invert,
    mark_phase,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper to run an engine to Ready
fn ready_engine(qubits: u32, target: usize, iterations: u32) -> Result<GroverEngine, GroverError> {
    let mut engine = GroverEngine::new(SearchParams::new(qubits, target, iterations))?;
    engine.run()?;
    Ok(engine)
}

// Marked probability at N=16, target 10, after `iterations` iterations
fn marked_probability(iterations: u32) -> Result<f64, GroverError> {
    let engine = ready_engine(4, 10, iterations)?;
    engine.state().probability(10)
}

#[test]
fn test_uniform_superposition_for_many_widths() -> Result<(), GroverError> {
    for n in 1..=12 {
        let state = AmplitudeVector::uniform(n)?;
        let dim = 1usize << n;
        assert_eq!(state.dim(), dim);
        let expected = 1.0 / (dim as f64).sqrt();
        for a in state.amplitudes() {
            assert_abs_diff_eq!(a.re, expected, epsilon = 1e-12);
            assert_eq!(a.im, 0.0);
        }
        assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_oracle_leaves_distribution_unchanged() -> Result<(), GroverError> {
    let mut state = AmplitudeVector::uniform(5)?;
    let before = state.clone();
    mark_phase(&mut state, 19)?;

    for i in 0..state.dim() {
        let (a, b) = (state.get(i)?, before.get(i)?);
        if i == 19 {
            assert_eq!(a, -b);
        } else {
            assert_eq!(a, b);
        }
        assert_abs_diff_eq!(a.norm_sqr(), b.norm_sqr());
    }
    Ok(())
}

#[test]
fn test_single_iteration_amplification_direction() -> Result<(), GroverError> {
    // N=8, target=7
    let mut state = AmplitudeVector::uniform(3)?;
    for op in Operation::grover_iteration(7) {
        op.apply(&mut state)?;
    }
    let probabilities = state.probabilities();
    assert!(probabilities[7] > 1.0 / 8.0);
    assert!(probabilities[..7].iter().all(|p| *p < 1.0 / 8.0));
    Ok(())
}

#[test]
fn test_diffusion_preserves_norm_through_many_iterations() -> Result<(), GroverError> {
    let mut state = AmplitudeVector::uniform(10)?;
    for _ in 0..50 {
        mark_phase(&mut state, 512)?;
        invert(&mut state);
    }
    assert_abs_diff_eq!(state.norm_sqr(), 1.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_engine_probability_tracks_rotation_angle() -> Result<(), GroverError> {
    // The marked probability oscillates: it peaks near the optimum and then falls
    let probabilities: Vec<f64> = (0..=6).map(marked_probability).collect::<Result<_, _>>()?;

    for (k, p) in probabilities.iter().enumerate() {
        assert_abs_diff_eq!(*p, success_probability(16, k as u32), epsilon = 1e-9);
    }
    assert!(probabilities[3] > 0.96);
    assert!(probabilities[6] < probabilities[3]);
    Ok(())
}

#[test]
fn test_engine_is_single_use() -> Result<(), GroverError> {
    let engine = ready_engine(3, 2, 2)?;
    assert_eq!(engine.phase(), EnginePhase::Ready);

    let mut rng = StdRng::seed_from_u64(8);
    let outcome = engine.measure(&mut rng)?;
    assert!(outcome.index < 8);
    assert_eq!(outcome.marked, outcome.index == 2);
    // `engine` has been moved; a second measurement needs a fresh engine
    let again = ready_engine(3, 2, 2)?.measure(&mut rng)?;
    assert!(again.index < 8);
    Ok(())
}

#[test]
fn test_invalid_target_rejected_before_any_work() {
    assert_eq!(
        GroverEngine::new(SearchParams::new(4, 16, 1)).err(),
        Some(GroverError::InvalidIndex {
            index: 16,
            size: 16,
        })
    );
}
