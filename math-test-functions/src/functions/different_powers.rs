//! Different Powers test function

use ndarray::Array1;

/// Sum of different powers - unimodal, sensitivity grows along the axes
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn different_powers(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| xi.abs().powi(i as i32 + 2))
        .sum()
}
