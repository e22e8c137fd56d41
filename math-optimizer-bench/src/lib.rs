//! Statistical benchmark harness for stochastic black-box optimizers.
//!
//! A [`Tester`] drives any [`StepOptimizer`] over a catalog of test
//! functions. Each function is wrapped in an [`ObjectiveAdapter`] that flips
//! parameter signs and rescales the search range at random, so every trial
//! starts from a different mirrored view of the same landscape. Trials end
//! either converged (cost threshold reached) or rejected (iteration cap
//! reached), and are folded into [`FunctionStatistics`] and sweep-wide
//! [`AggregateStatistics`].
//!
//! [`StepOptimizer`]: math_differential_evolution::StepOptimizer
#![warn(missing_docs)]

pub mod error;
pub use error::{BenchError, Result};

/// Catalog function wrapper handed to the optimizer.
pub mod adapter;
pub use adapter::ObjectiveAdapter;

/// Sweep settings.
pub mod config;
pub use config::BenchConfig;

/// Trial loop and sweep orchestration.
pub mod driver;
pub use driver::Tester;

/// Trial outcomes.
pub mod outcome;
pub use outcome::TrialOutcome;

/// Report types and their text rendering.
pub mod report;
pub use report::{BenchReport, FunctionReport};

/// Statistics over trial outcomes.
pub mod stats;
pub use stats::{ALL_REJECTED_SENTINEL, AggregateAccumulator, AggregateStatistics, FunctionStatistics};

/// CPU tick counter.
pub mod ticks;
pub use ticks::cpu_ticks;
