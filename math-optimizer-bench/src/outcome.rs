use serde::Serialize;

/// Terminal state of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrialOutcome {
    /// The optimizer got within the cost threshold of the known optimum.
    Converged {
        /// Optimizer steps taken, including the one that converged
        iterations: usize,
        /// Best cost when the trial stopped
        best_cost: f64,
    },
    /// The iteration cap (or the trial timeout) was hit first.
    Rejected {
        /// Best cost when the trial stopped
        best_cost: f64,
    },
}

impl TrialOutcome {
    /// Whether the trial converged.
    pub fn is_converged(&self) -> bool {
        matches!(self, TrialOutcome::Converged { .. })
    }

    /// Steps to convergence, `None` for a rejected trial.
    pub fn iterations(&self) -> Option<usize> {
        match *self {
            TrialOutcome::Converged { iterations, .. } => Some(iterations),
            TrialOutcome::Rejected { .. } => None,
        }
    }

    /// Best cost when the trial stopped.
    pub fn best_cost(&self) -> f64 {
        match *self {
            TrialOutcome::Converged { best_cost, .. } | TrialOutcome::Rejected { best_cost } => {
                best_cost
            }
        }
    }
}
