//! Rosenbrock test function

use ndarray::Array1;

/// Rosenbrock function - N-dimensional banana valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xn)| 100.0 * (xn - xi * xi).powi(2) + (1.0 - xi).powi(2))
        .sum()
}
