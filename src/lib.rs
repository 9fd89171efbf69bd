// src/lib.rs

//! `grover_sim` - A state-vector simulation of Grover's search
//!
//! The register is modeled as a dense vector of 2^n complex amplitudes. A
//! search prepares the uniform superposition, applies a fixed number of
//! Grover iterations (phase oracle followed by inversion about the average)
//! and measures the result according to the Born rule. Repeating the search
//! over many independent trials yields empirical success statistics that can
//! be compared against the closed-form probabilities in [`theory`].
//!
//! Memory grows as O(2^n): one run holds 2^n `Complex<f64>` values, and
//! registers wider than [`MAX_QUBITS`](crate::core::MAX_QUBITS) are rejected.

pub mod core;
pub mod operations;
pub mod simulation;
pub mod theory;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudeVector, GroverError, IterationCount, Result, SearchParams};
pub use operations::Operation;
pub use operations::diffusion::invert;
pub use operations::oracle::mark_phase;
pub use simulation::{
    EnginePhase, GroverEngine, MeasurementOutcome, Simulator, SimulatorConfig, TrialStatistics,
};
pub use validation::check_normalization;

// Example: Searching 8 entries for index 7
// Two iterations are optimal for N=8 and find the marked entry with
// probability sin²(5·asin(1/√8)) ≈ 0.945.
/// ```
/// use grover_sim::{SearchParams, Simulator, SimulatorConfig, GroverError};
/// use grover_sim::theory::{optimal_iterations, success_probability};
///
/// let size = 8;
/// let iterations = optimal_iterations(size);
/// assert_eq!(iterations, 2);
///
/// let params = SearchParams::new(3, 7, iterations);
/// let simulator = Simulator::with_config(SimulatorConfig::new().with_seed(42));
/// match simulator.search(params, 1000) {
///     Ok(stats) => {
///         println!("{}", stats);
///         let expected = success_probability(size, iterations);
///         assert!(stats.is_consistent_with(expected, 4.0));
///         assert!(stats.success_rate() > 0.9);
///     }
///     Err(e) => {
///         eprintln!("Search failed: {}", e);
///         assert!(false, "Search failed"); // Force test failure
///     }
/// }
/// # Ok::<(), GroverError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
