//! Per-function and sweep-wide statistics.
//!
//! The arithmetic is fixed so results stay comparable across runs:
//!
//! - mean iterations and their RMS deviation are taken over converged trials
//!   only;
//! - a function whose trials were all rejected reports
//!   [`ALL_REJECTED_SENTINEL`] for both;
//! - the sweep accumulates the dispersion *ratio* (RMS / mean) per function,
//!   which is insensitive to the scale of iteration counts;
//! - mean costs divide by the number of trials in their class and are NaN
//!   when that class is empty.

use serde::Serialize;

use crate::outcome::TrialOutcome;

/// Mean iterations and dispersion reported for a function whose trials were
/// all rejected. Historical results use this exact value; changing it breaks
/// comparisons of aggregate figures across runs.
pub const ALL_REJECTED_SENTINEL: f64 = 1_000_000.0;

/// Summary of all trials run on one function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunctionStatistics {
    /// Number of trials
    pub trials: usize,
    /// Number of rejected trials
    pub rejected: usize,
    /// Mean steps to convergence over converged trials
    pub mean_iterations: f64,
    /// Root mean square deviation of steps to convergence
    pub iteration_rms: f64,
    /// Fraction of rejected trials, in `[0, 1]`
    pub reject_rate: f64,
    /// Mean best cost of converged trials
    pub mean_cost_at_convergence: f64,
    /// Mean best cost of rejected trials
    pub mean_cost_at_rejection: f64,
}

impl FunctionStatistics {
    /// Folds the outcomes of one function's trials.
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> Self {
        let trials = outcomes.len();
        let mut rejected = 0usize;
        let mut sum_iterations = 0usize;
        let mut sum_converged_cost = 0.0;
        let mut sum_rejected_cost = 0.0;

        for outcome in outcomes {
            match *outcome {
                TrialOutcome::Converged {
                    iterations,
                    best_cost,
                } => {
                    sum_iterations += iterations;
                    sum_converged_cost += best_cost;
                }
                TrialOutcome::Rejected { best_cost } => {
                    rejected += 1;
                    sum_rejected_cost += best_cost;
                }
            }
        }

        let converged = trials - rejected;
        let mean_cost_at_convergence = sum_converged_cost / converged as f64;
        let mean_cost_at_rejection = sum_rejected_cost / rejected as f64;

        let (mean_iterations, iteration_rms) = if rejected >= trials {
            (ALL_REJECTED_SENTINEL, ALL_REJECTED_SENTINEL)
        } else {
            let mean = sum_iterations as f64 / converged as f64;
            let sum_sq: f64 = outcomes
                .iter()
                .filter_map(TrialOutcome::iterations)
                .map(|it| {
                    let d = it as f64 - mean;
                    d * d
                })
                .sum();
            (mean, (sum_sq / converged as f64).sqrt())
        };

        let reject_rate = if trials == 0 {
            0.0
        } else {
            rejected as f64 / trials as f64
        };

        Self {
            trials,
            rejected,
            mean_iterations,
            iteration_rms,
            reject_rate,
            mean_cost_at_convergence,
            mean_cost_at_rejection,
        }
    }

    /// Dispersion relative to the mean, the quantity averaged across
    /// functions.
    pub fn dispersion_ratio(&self) -> f64 {
        self.iteration_rms / self.mean_iterations
    }
}

/// Sweep-wide figures, each the mean over functions of the per-function
/// figure, plus the total optimizer CPU cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStatistics {
    /// Number of functions the means were taken over
    pub functions: usize,
    /// Mean of per-function mean iterations
    pub mean_convergence_time: f64,
    /// Mean of per-function `iteration_rms / mean_iterations`
    pub mean_dispersion_ratio: f64,
    /// Mean of per-function reject rates
    pub mean_reject_rate: f64,
    /// CPU ticks spent inside optimizer steps over the whole sweep
    pub total_cpu_ticks: u64,
}

/// Running sums behind [`AggregateStatistics`].
#[derive(Debug, Clone, Default)]
pub struct AggregateAccumulator {
    functions: usize,
    sum_mean_iterations: f64,
    sum_dispersion_ratio: f64,
    sum_reject_rate: f64,
    cpu_ticks: u64,
}

impl AggregateAccumulator {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one function's statistics.
    pub fn add(&mut self, stats: &FunctionStatistics) {
        self.functions += 1;
        self.sum_mean_iterations += stats.mean_iterations;
        self.sum_dispersion_ratio += stats.dispersion_ratio();
        self.sum_reject_rate += stats.reject_rate;
    }

    /// Adds CPU ticks spent in the optimizer.
    pub fn add_ticks(&mut self, ticks: u64) {
        self.cpu_ticks = self.cpu_ticks.wrapping_add(ticks);
    }

    /// Divides the running sums by the number of functions added. An empty
    /// accumulator yields zero means.
    pub fn finish(&self) -> AggregateStatistics {
        let n = self.functions.max(1) as f64;
        AggregateStatistics {
            functions: self.functions,
            mean_convergence_time: self.sum_mean_iterations / n,
            mean_dispersion_ratio: self.sum_dispersion_ratio / n,
            mean_reject_rate: self.sum_reject_rate / n,
            total_cpu_ticks: self.cpu_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn converged(iterations: usize) -> TrialOutcome {
        TrialOutcome::Converged {
            iterations,
            best_cost: 0.0,
        }
    }

    fn rejected(best_cost: f64) -> TrialOutcome {
        TrialOutcome::Rejected { best_cost }
    }

    #[test]
    fn test_all_converged_rms_is_population_std() {
        let stats = FunctionStatistics::from_outcomes(&[
            converged(2),
            converged(4),
            converged(4),
            converged(4),
            converged(5),
            converged(5),
            converged(7),
            converged(9),
        ]);
        assert_abs_diff_eq!(stats.mean_iterations, 5.0);
        assert_abs_diff_eq!(stats.iteration_rms, 2.0);
        assert_eq!(stats.reject_rate, 0.0);
        assert!(stats.mean_cost_at_rejection.is_nan());
    }

    #[test]
    fn test_rejected_trials_are_excluded_from_dispersion() {
        let stats = FunctionStatistics::from_outcomes(&[
            converged(10),
            rejected(3.0),
            converged(20),
            rejected(5.0),
        ]);
        assert_abs_diff_eq!(stats.mean_iterations, 15.0);
        assert_abs_diff_eq!(stats.iteration_rms, 5.0);
        assert_abs_diff_eq!(stats.reject_rate, 0.5);
        assert_abs_diff_eq!(stats.mean_cost_at_rejection, 4.0);
        assert_abs_diff_eq!(stats.mean_cost_at_convergence, 0.0);
        assert_eq!(stats.rejected, 2);
    }

    #[test]
    fn test_all_rejected_reports_sentinel() {
        let stats = FunctionStatistics::from_outcomes(&[rejected(1.0), rejected(2.0)]);
        assert_eq!(stats.mean_iterations, ALL_REJECTED_SENTINEL);
        assert_eq!(stats.iteration_rms, ALL_REJECTED_SENTINEL);
        assert_eq!(stats.reject_rate, 1.0);
        assert!(stats.mean_cost_at_convergence.is_nan());
        assert_abs_diff_eq!(stats.mean_cost_at_rejection, 1.5);
        assert_abs_diff_eq!(stats.dispersion_ratio(), 1.0);
    }

    #[test]
    fn test_aggregate_is_mean_over_functions() {
        let a = FunctionStatistics::from_outcomes(&[converged(10), converged(30)]);
        let b = FunctionStatistics::from_outcomes(&[converged(100), rejected(1.0)]);

        let mut acc = AggregateAccumulator::new();
        acc.add(&a);
        acc.add(&b);
        acc.add_ticks(40);
        acc.add_ticks(2);
        let agg = acc.finish();

        assert_eq!(agg.functions, 2);
        assert_abs_diff_eq!(agg.mean_convergence_time, (20.0 + 100.0) / 2.0);
        assert_abs_diff_eq!(agg.mean_dispersion_ratio, (10.0 / 20.0 + 0.0) / 2.0);
        assert_abs_diff_eq!(agg.mean_reject_rate, 0.25);
        assert_eq!(agg.total_cpu_ticks, 42);
    }

    #[test]
    fn test_empty_accumulator_is_finite() {
        let agg = AggregateAccumulator::new().finish();
        assert_eq!(agg.functions, 0);
        assert_eq!(agg.mean_convergence_time, 0.0);
        assert_eq!(agg.mean_reject_rate, 0.0);
    }
}
