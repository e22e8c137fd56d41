//! Step-wise Differential Evolution optimizer.
//!
//! Unlike a one-shot `solve`, the optimizer here exposes a restartable
//! lifecycle (`resize`, `init`, `step`) through the [`StepOptimizer`] trait,
//! so an external driver decides when to stop. The problem is supplied on
//! every call as an [`Objective`], which also provides the search bounds.
//!
//! # Features
//!
//! - Best, Rand, CurrentToBest and RandToBest mutation with one or two
//!   difference vectors
//! - Binomial and exponential crossover
//! - Dithered mutation factor
//! - Latin Hypercube initialization
//! - A SciPy-like [`minimize`] with restarts
//!
//! # Example
//!
//! ```rust
//! use math_differential_evolution::{minimize, DEConfig};
//!
//! let report = minimize(
//!     |x| x.iter().map(|&xi| xi * xi).sum(),
//!     &[-5.0, -5.0],
//!     &[5.0, 5.0],
//!     200,
//!     2,
//!     DEConfig::default(),
//!     Some(42),
//! )
//! .expect("valid problem");
//!
//! assert!(report.fun < 1e-6);
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{DEError, Result};

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;
use rand::Rng;

/// Objective and optimizer contracts.
pub mod objective;
pub use objective::{BoundedFn, Objective, StepOptimizer};

/// Step-wise DE optimizer.
pub mod differential_evolution;
pub use differential_evolution::DifferentialEvolution;

/// Bounded minimization with restarts.
pub mod minimize;
pub use minimize::{MinimizeReport, minimize};

mod crossover;
mod init;
mod mutation;


/// Smallest population the optimizer will run with, whatever the settings.
pub const MIN_POPULATION: usize = 6;

pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_v = v[0];
    for (i, &val) in v.iter().enumerate() {
        if val < best_v {
            best_v = val;
            best_i = i;
        }
    }
    (best_i, best_v)
}

/// Differential Evolution mutation/crossover strategy.
///
/// The name follows `{base}{n}{crossover}`: the base vector, the number of
/// difference vectors and the crossover kind (Bin = binomial,
/// Exp = exponential).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Best/1/Bin
    #[default]
    Best1Bin,
    /// Best/1/Exp
    Best1Exp,
    /// Rand/1/Bin
    Rand1Bin,
    /// Rand/1/Exp
    Rand1Exp,
    /// Rand/2/Bin
    Rand2Bin,
    /// Rand/2/Exp
    Rand2Exp,
    /// Current-to-best/1/Bin
    CurrentToBest1Bin,
    /// Current-to-best/1/Exp
    CurrentToBest1Exp,
    /// Best/2/Bin
    Best2Bin,
    /// Best/2/Exp
    Best2Exp,
    /// Rand-to-best/1/Bin
    RandToBest1Bin,
    /// Rand-to-best/1/Exp
    RandToBest1Exp,
}

impl Strategy {
    /// Crossover used by this strategy.
    pub fn crossover(self) -> Crossover {
        use Strategy::*;
        match self {
            Best1Bin | Rand1Bin | Rand2Bin | CurrentToBest1Bin | Best2Bin | RandToBest1Bin => {
                Crossover::Binomial
            }
            Best1Exp | Rand1Exp | Rand2Exp | CurrentToBest1Exp | Best2Exp | RandToBest1Exp => {
                Crossover::Exponential
            }
        }
    }
}

impl FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let t = s.to_lowercase().replace(['-', '_'], "");
        match t.as_str() {
            "best1bin" | "best1" => Ok(Strategy::Best1Bin),
            "best1exp" => Ok(Strategy::Best1Exp),
            "rand1bin" | "rand1" => Ok(Strategy::Rand1Bin),
            "rand1exp" => Ok(Strategy::Rand1Exp),
            "rand2bin" | "rand2" => Ok(Strategy::Rand2Bin),
            "rand2exp" => Ok(Strategy::Rand2Exp),
            "currenttobest1bin" | "currenttobest1" => Ok(Strategy::CurrentToBest1Bin),
            "currenttobest1exp" => Ok(Strategy::CurrentToBest1Exp),
            "best2bin" | "best2" => Ok(Strategy::Best2Bin),
            "best2exp" => Ok(Strategy::Best2Exp),
            "randtobest1bin" | "randtobest1" => Ok(Strategy::RandToBest1Bin),
            "randtobest1exp" => Ok(Strategy::RandToBest1Exp),
            _ => Err(format!("unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Best1Bin => "best1bin",
            Strategy::Best1Exp => "best1exp",
            Strategy::Rand1Bin => "rand1bin",
            Strategy::Rand1Exp => "rand1exp",
            Strategy::Rand2Bin => "rand2bin",
            Strategy::Rand2Exp => "rand2exp",
            Strategy::CurrentToBest1Bin => "currenttobest1bin",
            Strategy::CurrentToBest1Exp => "currenttobest1exp",
            Strategy::Best2Bin => "best2bin",
            Strategy::Best2Exp => "best2exp",
            Strategy::RandToBest1Bin => "randtobest1bin",
            Strategy::RandToBest1Exp => "randtobest1exp",
        };
        f.write_str(name)
    }
}

/// Crossover type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Crossover {
    /// Binomial (uniform) crossover
    #[default]
    Binomial,
    /// Exponential crossover
    Exponential,
}

/// Mutation setting: either a fixed factor or a uniform range (dithering).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    /// Fixed mutation factor F in [0, 2].
    Factor(f64),
    /// Dithering range [min, max] with 0 <= min <= max <= 2, resampled for
    /// every generation.
    Range {
        /// Minimum mutation factor.
        min: f64,
        /// Maximum mutation factor.
        max: f64,
    },
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::Range { min: 0.5, max: 1.0 }
    }
}

impl Mutation {
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Mutation::Factor(f) => f,
            Mutation::Range { min, max } => min + (max - min) * rng.random::<f64>(),
        }
    }

    fn validate(&self) -> Result<()> {
        let valid = |f: f64| (0.0..=2.0).contains(&f);
        match *self {
            Mutation::Factor(f) if !valid(f) => Err(DEError::InvalidMutationFactor { factor: f }),
            Mutation::Range { min, .. } if !valid(min) => {
                Err(DEError::InvalidMutationFactor { factor: min })
            }
            Mutation::Range { min, max } if !valid(max) || max < min => {
                Err(DEError::InvalidMutationFactor { factor: max })
            }
            _ => Ok(()),
        }
    }
}

/// Initialization scheme for the population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Init {
    /// Latin Hypercube Sampling for better space coverage.
    #[default]
    LatinHypercube,
    /// Uniform random initialization.
    Random,
}

/// Settings of the DE optimizer.
#[derive(Debug, Clone)]
pub struct DEConfig {
    /// Population size multiplier: the population holds `popsize * dims`
    /// members unless a fan size overrides it.
    pub popsize: usize,
    /// Mutation factor setting.
    pub mutation: Mutation,
    /// Crossover probability (CR).
    pub recombination: f64,
    /// Mutation/crossover strategy.
    pub strategy: Strategy,
    /// Population initialization scheme.
    pub init: Init,
}

impl Default for DEConfig {
    fn default() -> Self {
        Self {
            popsize: 15,
            mutation: Mutation::default(),
            recombination: 0.7,
            strategy: Strategy::Best1Bin,
            init: Init::LatinHypercube,
        }
    }
}

impl DEConfig {
    /// Checks that every setting is in range.
    ///
    /// # Errors
    ///
    /// Returns `DEError::PopulationTooSmall` if `popsize < 4`,
    /// `DEError::InvalidMutationFactor` for a factor outside [0, 2] and
    /// `DEError::InvalidCrossoverRate` for a rate outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.popsize < 4 {
            return Err(DEError::PopulationTooSmall {
                pop_size: self.popsize,
            });
        }
        self.mutation.validate()?;
        if !(0.0..=1.0).contains(&self.recombination) {
            return Err(DEError::InvalidCrossoverRate {
                rate: self.recombination,
            });
        }
        Ok(())
    }
}

/// Fluent builder for `DEConfig`.
pub struct DEConfigBuilder {
    cfg: DEConfig,
}
impl Default for DEConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DEConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: DEConfig::default(),
        }
    }
    /// Sets the population size multiplier.
    pub fn popsize(mut self, v: usize) -> Self {
        self.cfg.popsize = v;
        self
    }
    /// Sets the mutation factor configuration.
    pub fn mutation(mut self, v: Mutation) -> Self {
        self.cfg.mutation = v;
        self
    }
    /// Sets the crossover probability (CR).
    pub fn recombination(mut self, v: f64) -> Self {
        self.cfg.recombination = v;
        self
    }
    /// Sets the mutation/crossover strategy.
    pub fn strategy(mut self, v: Strategy) -> Self {
        self.cfg.strategy = v;
        self
    }
    /// Sets the population initialization scheme.
    pub fn init(mut self, v: Init) -> Self {
        self.cfg.init = v;
        self
    }
    /// Validates and returns the configuration, see [`DEConfig::validate`].
    pub fn build(self) -> error::Result<DEConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
