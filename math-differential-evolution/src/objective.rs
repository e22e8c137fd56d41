//! Contracts between a step-wise optimizer and the problem it minimizes.
//!
//! The optimizer never owns its problem: every lifecycle call receives the
//! [`Objective`] and the random stream explicitly, so the caller can reuse
//! one problem instance across many restarts and seed runs deterministically.

use ndarray::Array1;
use rand::Rng;

use crate::error::{DEError, Result};

/// Problem callbacks invoked by a [`StepOptimizer`].
pub trait Objective {
    /// Number of parameters.
    fn dims(&self) -> usize;

    /// Fills `out` (length [`dims`](Self::dims)) with the lower search bounds.
    ///
    /// Implementations may draw from `rng`, in which case each call yields a
    /// fresh set of bounds.
    fn lower_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, rng: &mut R);

    /// Fills `out` (length [`dims`](Self::dims)) with the upper search bounds.
    fn upper_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, rng: &mut R);

    /// Objective value at `x`. Not reentrant: implementations may reuse
    /// internal buffers between calls.
    fn cost(&mut self, x: &Array1<f64>) -> f64;
}

/// Restartable optimizer driven one iteration at a time.
pub trait StepOptimizer {
    /// Resizes internal state for `dims` parameters. `fan_size` is an
    /// optimizer specific population hint, `0` selects the default.
    fn resize(&mut self, dims: usize, fan_size: usize);

    /// Resets the optimizer state from the objective's current bounds.
    fn init<O: Objective, R: Rng + ?Sized>(&mut self, objective: &mut O, rng: &mut R);

    /// Runs one optimizer iteration.
    fn step<O: Objective, R: Rng + ?Sized>(&mut self, objective: &mut O, rng: &mut R);

    /// Best objective value found since the last [`init`](Self::init).
    fn best_cost(&self) -> f64;

    /// Parameters achieving [`best_cost`](Self::best_cost).
    fn best_params(&self) -> &Array1<f64>;
}

/// A closure with fixed box bounds, usable as an [`Objective`].
pub struct BoundedFn<F> {
    func: F,
    lower: Array1<f64>,
    upper: Array1<f64>,
    nfev: usize,
}

impl<F> BoundedFn<F>
where
    F: FnMut(&Array1<f64>) -> f64,
{
    /// Wraps `func` with the box `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns `DEError::ZeroDimensions` for empty bounds,
    /// `DEError::BoundsMismatch` if the lengths differ and
    /// `DEError::InvalidBounds` if a lower bound exceeds its upper bound.
    pub fn new(func: F, lower: &[f64], upper: &[f64]) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(DEError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(DEError::ZeroDimensions);
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper).enumerate() {
            if lo > hi {
                return Err(DEError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }

        Ok(Self {
            func,
            lower: Array1::from_vec(lower.to_vec()),
            upper: Array1::from_vec(upper.to_vec()),
            nfev: 0,
        })
    }

    /// Number of evaluations performed so far.
    pub fn nfev(&self) -> usize {
        self.nfev
    }
}

impl<F> Objective for BoundedFn<F>
where
    F: FnMut(&Array1<f64>) -> f64,
{
    fn dims(&self) -> usize {
        self.lower.len()
    }

    fn lower_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, _rng: &mut R) {
        out.assign(&self.lower);
    }

    fn upper_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, _rng: &mut R) {
        out.assign(&self.upper);
    }

    fn cost(&mut self, x: &Array1<f64>) -> f64 {
        self.nfev += 1;
        (self.func)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bounded_fn_validation() {
        let f = |x: &Array1<f64>| x.sum();
        assert!(matches!(
            BoundedFn::new(f, &[0.0], &[1.0, 2.0]),
            Err(DEError::BoundsMismatch {
                lower_len: 1,
                upper_len: 2
            })
        ));
        assert!(matches!(
            BoundedFn::new(f, &[0.0, 3.0], &[1.0, 2.0]),
            Err(DEError::InvalidBounds { index: 1, .. })
        ));
        assert!(matches!(
            BoundedFn::new(f, &[], &[]),
            Err(DEError::ZeroDimensions)
        ));
    }

    #[test]
    fn test_bounded_fn_callbacks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut obj = BoundedFn::new(|x: &Array1<f64>| x.sum(), &[-1.0, -2.0], &[1.0, 2.0])
            .expect("valid bounds");

        let mut lo = Array1::zeros(2);
        let mut hi = Array1::zeros(2);
        obj.lower_bounds(&mut lo, &mut rng);
        obj.upper_bounds(&mut hi, &mut rng);
        assert_eq!(lo.to_vec(), vec![-1.0, -2.0]);
        assert_eq!(hi.to_vec(), vec![1.0, 2.0]);

        assert_eq!(obj.cost(&Array1::from_vec(vec![0.5, 0.25])), 0.75);
        assert_eq!(obj.nfev(), 1);
    }
}
