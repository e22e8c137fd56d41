//! Error types for the benchmark harness.
//!
//! Configuration problems are detected before a sweep starts; a non-finite
//! objective value aborts the sweep that produced it.

use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark sweep.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The function catalog has no entry.
    #[error("function catalog is empty")]
    EmptyCatalog,

    /// A dimensionality of zero was requested.
    #[error("dimensionality must be at least 1")]
    ZeroDimensions,

    /// Each function needs at least one trial.
    #[error("trial count must be at least 1")]
    ZeroTrials,

    /// Each trial needs at least one optimizer step.
    #[error("inner iteration cap must be at least 1")]
    ZeroIterationCap,

    /// The convergence threshold is not a positive finite number.
    #[error("invalid cost threshold: {threshold} (must be finite and > 0)")]
    InvalidThreshold {
        /// The rejected threshold
        threshold: f64,
    },

    /// The per-trial timeout is not a positive finite number of seconds.
    #[error("invalid trial timeout: {secs}s (must be finite and > 0)")]
    InvalidTimeout {
        /// The rejected timeout
        secs: f64,
    },

    /// The objective returned NaN or an infinity.
    #[error(
        "non-finite cost {value} from {function} (trial {trial}, iteration {iteration})"
    )]
    NonFiniteCost {
        /// Catalog name of the function
        function: String,
        /// Zero-based trial index
        trial: usize,
        /// Optimizer steps completed in the trial when the value was seen
        iteration: usize,
        /// The offending value
        value: f64,
    },

    /// Reading a configuration or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON configuration could not be parsed or a report serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

impl BenchError {
    /// Returns `true` if the error is a configuration precondition failure.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BenchError::EmptyCatalog
                | BenchError::ZeroDimensions
                | BenchError::ZeroTrials
                | BenchError::ZeroIterationCap
                | BenchError::InvalidThreshold { .. }
                | BenchError::InvalidTimeout { .. }
        )
    }

    /// Returns `true` if the error was raised by an objective evaluation.
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, BenchError::NonFiniteCost { .. })
    }
}
