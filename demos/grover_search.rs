//! Example: Grover's search over 8 and 64 entries.
//! Runs many independent simulated searches, then compares the empirical
//! success rate with the closed-form prediction and with classical guessing.
//!
//! Set `RUST_LOG=grover_sim=debug` to watch the engine's phase transitions.

use grover_sim::theory::{classical_success_probability, optimal_iterations, success_probability};
use grover_sim::{SearchParams, Simulator, SimulatorConfig, TrialStatistics};
use tracing_subscriber::EnvFilter;

const TRIALS: usize = 1000;

// Prints one run against theory. The speedup factor is how many times more
// likely a single amplified query is to hit the target than a random guess.
fn report(
    params: &SearchParams,
    stats: &TrialStatistics,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = params.search_space_size()?;
    let iterations = params.iterations.get();
    let theoretical = success_probability(size, iterations);
    let classical = classical_success_probability(size);
    let speedup = stats.success_rate() / classical;
    let (qubits, target) = (params.qubits, params.target);

    println!("\n{}", params);
    println!("- Search space: N = {size} ({qubits} qubits), target |{target}>");
    println!("- Optimal iteration count: {}", optimal_iterations(size));
    println!("- Empirical:   {}", stats);
    println!("- Theoretical: {:.4}", theoretical);
    println!("- Classical:   {:.4}", classical);
    println!("- Speedup factor per query: {speedup:.2}x");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("--- Grover's Search: simulated amplitude amplification ---");

    let simulator = Simulator::with_config(SimulatorConfig::new().with_seed(2024));

    let runs = [
        // Classical baseline: no amplification at all
        SearchParams::new(3, 7, 0),
        // Optimal for N=8
        SearchParams::new(3, 7, optimal_iterations(8)),
        // One step past the optimum
        SearchParams::new(3, 7, 3),
        // The reference sample run (about 0.6)
        SearchParams::new(6, 63, 3),
        // Optimal for N=64
        SearchParams::new(6, 63, optimal_iterations(64)),
    ];

    for params in &runs {
        let stats = simulator.search(*params, TRIALS)?;
        report(params, &stats)?;
    }

    Ok(())
}
