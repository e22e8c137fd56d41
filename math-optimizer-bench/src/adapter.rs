//! Presents a catalog function to an optimizer with per-dimension sign flips
//! and optionally randomized search ranges.

use math_differential_evolution::Objective;
use math_test_functions::TestFunction;
use ndarray::{Array1, Zip};
use rand::Rng;

use crate::error::{BenchError, Result};

/// Wraps one [`TestFunction`] as an [`Objective`].
///
/// The optimizer's parameter `x[i]` is evaluated as `x[i] * signs[i]`, so
/// flipping signs mirrors the landscape without moving the optimum value.
/// One adapter is reused for a whole sweep: [`set_function`](Self::set_function)
/// and [`configure`](Self::configure) switch it to the next catalog entry.
#[derive(Debug, Clone)]
pub struct ObjectiveAdapter<'c> {
    function: &'c TestFunction,
    dims: usize,
    signs: Array1<f64>,
    scratch: Array1<f64>,
    randomize_range: bool,
    fault: Option<f64>,
}

impl<'c> ObjectiveAdapter<'c> {
    /// Creates an unconfigured adapter; call [`configure`](Self::configure)
    /// before handing it to an optimizer.
    pub fn new(function: &'c TestFunction) -> Self {
        Self {
            function,
            dims: 0,
            signs: Array1::zeros(0),
            scratch: Array1::zeros(0),
            randomize_range: false,
            fault: None,
        }
    }

    /// Switches to another catalog function. Buffers keep their size until
    /// the next [`configure`](Self::configure).
    pub fn set_function(&mut self, function: &'c TestFunction) {
        self.function = function;
        self.fault = None;
    }

    /// The wrapped function.
    pub fn function(&self) -> &'c TestFunction {
        self.function
    }

    /// Resizes the sign and scratch buffers to `dims` and resets every sign
    /// to `+1`.
    pub fn configure(&mut self, dims: usize) -> Result<()> {
        if dims == 0 {
            return Err(BenchError::ZeroDimensions);
        }
        self.dims = dims;
        self.signs = Array1::ones(dims);
        self.scratch = Array1::zeros(dims);
        self.fault = None;
        Ok(())
    }

    /// When enabled, every bounds query draws a new range.
    pub fn set_randomize_range(&mut self, randomize: bool) {
        self.randomize_range = randomize;
    }

    /// Whether bounds queries are randomized.
    pub fn randomize_range(&self) -> bool {
        self.randomize_range
    }

    /// Current sign vector.
    pub fn signs(&self) -> &Array1<f64> {
        &self.signs
    }

    /// Overwrites the sign vector. `values` must hold one entry per
    /// dimension.
    pub fn set_signs(&mut self, values: &[f64]) {
        debug_assert_eq!(values.len(), self.dims);
        for (s, &v) in self.signs.iter_mut().zip(values) {
            *s = v;
        }
    }

    /// Sets every sign to `+1`.
    pub fn reset_signs(&mut self) {
        self.signs.fill(1.0);
    }

    /// Draws an independent sign per dimension: `+1` when a uniform sample
    /// is at least `0.5`, `-1` otherwise.
    pub fn randomize_signs<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for s in self.signs.iter_mut() {
            *s = if rng.random::<f64>() >= 0.5 { 1.0 } else { -1.0 };
        }
    }

    /// Returns and clears the first non-finite cost produced since the last
    /// call.
    pub fn take_fault(&mut self) -> Option<f64> {
        self.fault.take()
    }

    fn fill_bounds<R: Rng + ?Sized>(&self, nominal: f64, out: &mut Array1<f64>, rng: &mut R) {
        if self.randomize_range {
            for b in out.iter_mut() {
                *b = nominal * (0.5 + rng.random::<f64>() * 0.5);
            }
        } else {
            out.fill(nominal);
        }
    }
}

impl Objective for ObjectiveAdapter<'_> {
    fn dims(&self) -> usize {
        self.dims
    }

    fn lower_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, rng: &mut R) {
        self.fill_bounds(self.function.range_min, out, rng);
    }

    fn upper_bounds<R: Rng + ?Sized>(&self, out: &mut Array1<f64>, rng: &mut R) {
        self.fill_bounds(self.function.range_max, out, rng);
    }

    fn cost(&mut self, x: &Array1<f64>) -> f64 {
        Zip::from(&mut self.scratch)
            .and(x)
            .and(&self.signs)
            .for_each(|s, &xi, &sign| *s = xi * sign);
        let value = self.function.eval(&self.scratch);
        if !value.is_finite() && self.fault.is_none() {
            self.fault = Some(value);
        }
        value
    }
}
