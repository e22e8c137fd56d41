use std::fmt;

use serde::Serialize;

use crate::outcome::TrialOutcome;
use crate::stats::{AggregateStatistics, FunctionStatistics};

/// Statistics of one catalog function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionReport {
    /// Catalog name
    pub name: String,
    /// Dimensionality the function was run at
    pub dims: usize,
    /// Folded trial statistics
    pub statistics: FunctionStatistics,
    /// Individual trial outcomes, in trial order
    pub outcomes: Vec<TrialOutcome>,
}

/// Result of a full sweep.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// One entry per catalog function, in sweep order
    pub functions: Vec<FunctionReport>,
    /// Sweep-wide figures
    pub aggregate: AggregateStatistics,
}

impl fmt::Display for FunctionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.statistics;
        write!(
            f,
            "AIt:{:6.0} RIt:{:6.0} Rj:{:5.2}% C:{:11.8} RjC:{:7.4} {}_{}",
            s.mean_iterations,
            s.iteration_rms,
            s.reject_rate * 100.0,
            s.mean_cost_at_convergence,
            s.mean_cost_at_rejection,
            self.name,
            self.dims
        )
    }
}

impl fmt::Display for AggregateStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ItAvg: {} (avg convergence time)", self.mean_convergence_time)?;
        writeln!(f, "ItRtAvg: {} (avg ratio of std.dev and average)", self.mean_dispersion_ratio)?;
        writeln!(f, "RjAvg: {}% (avg percentage of rejects)", self.mean_reject_rate * 100.0)?;
        write!(f, "Ticks: {} (CPU cycles spent in optimizer)", self.total_cpu_ticks)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for function in &self.functions {
            writeln!(f, "{}", function)?;
        }
        write!(f, "{}", self.aggregate)
    }
}
