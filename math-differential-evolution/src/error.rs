//! Error types for the Differential Evolution optimizer.
//!
//! Configuration and bound validation failures are reported through
//! `DEError`, with helper methods to tell the categories apart.

use thiserror::Error;

/// Errors that can occur while configuring or running Differential Evolution.
#[derive(Debug, Error)]
pub enum DEError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// The problem has no free parameter.
    #[error("problem dimensionality must be at least 1")]
    ZeroDimensions,

    /// Population size multiplier is too small (must be >= 4).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Mutation factor is out of valid range [0, 2].
    #[error("invalid mutation factor: {factor} (must be in [0, 2])")]
    InvalidMutationFactor {
        /// The invalid mutation factor
        factor: f64,
    },

    /// Crossover rate is out of valid range [0, 1].
    #[error("invalid crossover rate: {rate} (must be in [0, 1])")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// `minimize` was asked for zero restarts.
    #[error("at least one optimization attempt is required")]
    NoAttempts,
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` if this is a bounds-related error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            DEError::BoundsMismatch { .. } | DEError::InvalidBounds { .. } | DEError::ZeroDimensions
        )
    }

    /// Returns `true` if this is a configuration-related error.
    ///
    /// This includes `PopulationTooSmall`, `InvalidMutationFactor`,
    /// `InvalidCrossoverRate` and `NoAttempts`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DEError::PopulationTooSmall { .. }
                | DEError::InvalidMutationFactor { .. }
                | DEError::InvalidCrossoverRate { .. }
                | DEError::NoAttempts
        )
    }
}
