//! Sum Squares test function

use ndarray::Array1;

/// Sum squares (axis-parallel hyper-ellipsoid) - unimodal, separable
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi * xi)
        .sum()
}
