// src/theory/mod.rs

//! Closed-form quantities a reporting layer compares simulated runs against.
//!
//! With θ = asin(1/√N), k Grover iterations rotate the state by (2k+1)θ
//! towards the marked entry, so the probability of measuring it is
//! sin²((2k+1)θ).

use crate::core::PI;

/// Probability that a single run measures the marked entry after
/// `iterations` Grover iterations over a search space of `size` entries.
///
/// Zero iterations reduce to the classical value 1/N. An empty search space
/// yields 0.0.
pub fn success_probability(size: usize, iterations: u32) -> f64 {
    if size == 0 {
        return 0.0;
    }
    let theta = (1.0 / (size as f64).sqrt()).asin();
    let angle = (2.0 * f64::from(iterations) + 1.0) * theta;
    angle.sin().powi(2)
}

/// Iteration count that maximizes the success probability, ⌊π/4 · √N⌋.
pub fn optimal_iterations(size: usize) -> u32 {
    (PI / 4.0 * (size as f64).sqrt()).floor() as u32
}

/// Success probability of one unassisted guess, 1/N.
pub fn classical_success_probability(size: usize) -> f64 {
    if size == 0 { 0.0 } else { 1.0 / size as f64 }
}

/// Standard deviation of an empirical success rate over `trials`
/// independent Bernoulli(p) draws, √(p(1-p)/trials).
pub fn binomial_std_dev(probability: f64, trials: u64) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    (probability * (1.0 - probability) / trials as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_iterations_is_classical() {
        for size in [2, 8, 64, 1024] {
            assert_abs_diff_eq!(
                success_probability(size, 0),
                classical_success_probability(size),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn known_values() {
        // N=4: one iteration finds the target with certainty
        assert_abs_diff_eq!(success_probability(4, 1), 1.0, epsilon = 1e-12);
        // N=8: one iteration gives 25/32
        assert_abs_diff_eq!(success_probability(8, 1), 25.0 / 32.0, epsilon = 1e-12);
        assert!(success_probability(8, 2) > 0.94);
        // N=8 overshoots at three iterations
        assert!(success_probability(8, 3) < 0.34);
        let expected = (7.0 * (0.125_f64).asin()).sin().powi(2);
        assert_abs_diff_eq!(success_probability(64, 3), expected, epsilon = 1e-12);
    }

    #[test]
    fn optimal_iterations_follow_sqrt_n() {
        assert_eq!(optimal_iterations(4), 1);
        assert_eq!(optimal_iterations(8), 2);
        assert_eq!(optimal_iterations(16), 3);
        assert_eq!(optimal_iterations(64), 6);
        assert_eq!(optimal_iterations(1024), 25);
    }

    #[test]
    fn std_dev_shrinks_with_trials() {
        assert_abs_diff_eq!(binomial_std_dev(0.5, 100), 0.05, epsilon = 1e-12);
        assert!(binomial_std_dev(0.5, 10_000) < binomial_std_dev(0.5, 100));
        assert_eq!(binomial_std_dev(0.5, 0), 0.0);
    }
}
