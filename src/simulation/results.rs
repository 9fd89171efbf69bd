// src/simulation/results.rs
use crate::theory::binomial_std_dev;
use std::fmt;

/// The outcome of measuring one simulated run.
///
/// Ephemeral: produced once per run and folded into [`TrialStatistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasurementOutcome {
    /// Whether the measured index is the marked entry.
    pub marked: bool,
    /// The basis-state index the register collapsed to.
    pub index: usize,
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.marked { " (marked)" } else { "" };
        write!(f, "|{}>{}", self.index, suffix)
    }
}

/// Aggregate of many independent measurement outcomes.
///
/// Holds only counters, never the individual outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialStatistics {
    successes: u64,
    trials: u64,
}

impl TrialStatistics {
    /// Creates statistics from raw counts. (Internal visibility)
    pub(crate) fn new(successes: u64, trials: u64) -> Self {
        Self { successes, trials }
    }

    /// Folds one outcome into the counts.
    pub(crate) fn record(&mut self, outcome: &MeasurementOutcome) {
        self.trials += 1;
        if outcome.marked {
            self.successes += 1;
        }
    }

    /// Combines the counts of two disjoint sets of trials.
    pub(crate) fn merge(self, other: TrialStatistics) -> TrialStatistics {
        let successes = self.successes + other.successes;
        Self::new(successes, self.trials + other.trials)
    }

    /// Number of trials that measured the marked entry.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Total number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Empirical success probability, successes / trials.
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    /// Whether the empirical rate lies within `sigmas` binomial standard
    /// deviations of `expected`.
    pub fn is_consistent_with(&self, expected: f64, sigmas: f64) -> bool {
        let tolerance = sigmas * binomial_std_dev(expected, self.trials);
        (self.success_rate() - expected).abs() <= tolerance
    }
}

impl fmt::Display for TrialStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (successes, trials) = (self.successes, self.trials);
        let rate = self.success_rate();
        write!(f, "{successes}/{trials} successful ({rate:.4})")
    }
}
