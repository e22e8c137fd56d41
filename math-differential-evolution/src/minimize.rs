use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::objective::{BoundedFn, StepOptimizer};
use crate::{DEConfig, DEError, DifferentialEvolution, Result};

/// Result of a [`minimize`] call.
#[derive(Debug, Clone)]
pub struct MinimizeReport {
    /// Best parameters found across all attempts.
    pub x: Array1<f64>,
    /// Objective value at `x`.
    pub fun: f64,
    /// Generations run, summed over attempts.
    pub nit: usize,
    /// Objective evaluations, summed over attempts.
    pub nfev: usize,
    /// Number of independent attempts performed.
    pub attempts: usize,
}

/// Minimizes `func` over the box `[lower, upper]`.
///
/// The optimizer is restarted `attempts` times, each run lasting `maxiter`
/// generations, and the best point over all runs is returned. With
/// `seed = None` the random stream is seeded from the thread RNG.
///
/// # Errors
///
/// Returns a bounds error if `lower` and `upper` differ in length, are
/// empty or are not ordered, `DEError::NoAttempts` if `attempts == 0`,
/// and any error from validating `config`.
pub fn minimize<F>(
    func: F,
    lower: &[f64],
    upper: &[f64],
    maxiter: usize,
    attempts: usize,
    config: DEConfig,
    seed: Option<u64>,
) -> Result<MinimizeReport>
where
    F: FnMut(&Array1<f64>) -> f64,
{
    let mut objective = BoundedFn::new(func, lower, upper)?;
    if attempts == 0 {
        return Err(DEError::NoAttempts);
    }
    config.validate()?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut de = DifferentialEvolution::new(config);
    de.resize(lower.len(), 0);

    let mut best_x = Array1::zeros(lower.len());
    let mut best_f = f64::INFINITY;
    let mut nit = 0;
    let mut nfev = 0;

    for attempt in 0..attempts {
        de.init(&mut objective, &mut rng);
        for _ in 0..maxiter {
            de.step(&mut objective, &mut rng);
        }
        nit += de.nit();
        nfev += de.nfev();

        log::debug!(
            "minimize attempt {}/{}: f={:.6e} after {} generations",
            attempt + 1,
            attempts,
            de.best_cost(),
            de.nit()
        );

        if de.best_cost() < best_f || attempt == 0 {
            best_f = de.best_cost();
            best_x.assign(de.best_params());
        }
    }

    Ok(MinimizeReport {
        x: best_x,
        fun: best_f,
        nit,
        nfev,
        attempts,
    })
}
