//! JSON configuration for a benchmark sweep

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Settings of one benchmark sweep.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Dimensionality used for variable-dimension functions
    #[serde(default = "default_dims")]
    pub default_dims: usize,
    /// A trial converges once `best_cost - optimum` drops below this value
    #[serde(default = "default_cost_threshold")]
    pub cost_threshold: f64,
    /// Independent trials per function
    #[serde(default = "default_trial_count")]
    pub trial_count: usize,
    /// Optimizer steps after which a trial is rejected
    #[serde(default = "default_inner_iteration_cap")]
    pub inner_iteration_cap: usize,
    /// Randomize signs and search ranges for every trial
    #[serde(default = "default_randomize")]
    pub randomize: bool,
    /// Log per-function summaries at info level
    #[serde(default)]
    pub verbose: bool,
    /// Population hint forwarded to the optimizer, `0` for its default
    #[serde(default)]
    pub fan_size: usize,
    /// Wall-clock limit per trial, in seconds
    #[serde(default)]
    pub trial_timeout_secs: Option<f64>,
}

fn default_dims() -> usize {
    6
}

fn default_cost_threshold() -> f64 {
    1e-6
}

fn default_trial_count() -> usize {
    50
}

fn default_inner_iteration_cap() -> usize {
    2000
}

fn default_randomize() -> bool {
    true
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            default_dims: default_dims(),
            cost_threshold: default_cost_threshold(),
            trial_count: default_trial_count(),
            inner_iteration_cap: default_inner_iteration_cap(),
            randomize: default_randomize(),
            verbose: false,
            fan_size: 0,
            trial_timeout_secs: None,
        }
    }
}

impl BenchConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Sets the dimensionality of variable-dimension functions.
    pub fn with_default_dims(mut self, v: usize) -> Self {
        self.default_dims = v;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_cost_threshold(mut self, v: f64) -> Self {
        self.cost_threshold = v;
        self
    }

    /// Sets the number of trials per function.
    pub fn with_trial_count(mut self, v: usize) -> Self {
        self.trial_count = v;
        self
    }

    /// Sets the per-trial step budget.
    pub fn with_inner_iteration_cap(mut self, v: usize) -> Self {
        self.inner_iteration_cap = v;
        self
    }

    /// Enables or disables sign and range randomization.
    pub fn with_randomize(mut self, v: bool) -> Self {
        self.randomize = v;
        self
    }

    /// Enables or disables info-level per-function logging.
    pub fn with_verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }

    /// Sets the optimizer population hint.
    pub fn with_fan_size(mut self, v: usize) -> Self {
        self.fan_size = v;
        self
    }

    /// Sets or clears the per-trial wall-clock limit.
    pub fn with_trial_timeout_secs(mut self, v: Option<f64>) -> Self {
        self.trial_timeout_secs = v;
        self
    }

    /// Checks the settings a sweep cannot run without.
    pub fn validate(&self) -> Result<()> {
        if self.default_dims == 0 {
            return Err(BenchError::ZeroDimensions);
        }
        if self.trial_count == 0 {
            return Err(BenchError::ZeroTrials);
        }
        if self.inner_iteration_cap == 0 {
            return Err(BenchError::ZeroIterationCap);
        }
        if !(self.cost_threshold.is_finite() && self.cost_threshold > 0.0) {
            return Err(BenchError::InvalidThreshold {
                threshold: self.cost_threshold,
            });
        }
        match self.trial_timeout_secs {
            Some(t) if !(t.is_finite() && t > 0.0) => {
                return Err(BenchError::InvalidTimeout { secs: t });
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.default_dims, 6);
        assert_eq!(cfg.cost_threshold, 1e-6);
        assert_eq!(cfg.trial_count, 50);
        assert_eq!(cfg.inner_iteration_cap, 2000);
        assert!(cfg.randomize);
        assert!(!cfg.verbose);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg =
            BenchConfig::from_json_str(r#"{ "trial_count": 10, "randomize": false }"#).unwrap();
        assert_eq!(cfg.trial_count, 10);
        assert!(!cfg.randomize);
        assert_eq!(cfg.inner_iteration_cap, 2000);
        assert_eq!(cfg.trial_timeout_secs, None);
    }

    #[test]
    fn test_json_round_trip_and_bad_input() {
        let cfg = BenchConfig::default()
            .with_fan_size(24)
            .with_trial_timeout_secs(Some(2.5));
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(BenchConfig::from_json_str(&text).unwrap(), cfg);

        let err = BenchConfig::from_json_str("{ trial_count: }").unwrap_err();
        assert!(matches!(err, BenchError::Json(_)));
    }

    #[test]
    fn test_validation() {
        let base = BenchConfig::default();
        assert!(matches!(
            base.clone().with_default_dims(0).validate(),
            Err(BenchError::ZeroDimensions)
        ));
        assert!(matches!(
            base.clone().with_trial_count(0).validate(),
            Err(BenchError::ZeroTrials)
        ));
        assert!(matches!(
            base.clone().with_inner_iteration_cap(0).validate(),
            Err(BenchError::ZeroIterationCap)
        ));
        assert!(matches!(
            base.clone().with_cost_threshold(f64::NAN).validate(),
            Err(BenchError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            base.with_trial_timeout_secs(Some(0.0)).validate(),
            Err(BenchError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BenchConfig::from_json_file("/nonexistent/bench.json").unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
