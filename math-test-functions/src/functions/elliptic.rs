//! High-conditioned elliptic test function

use ndarray::Array1;

/// Elliptic function - unimodal, condition number 1e6 across the axes
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn elliptic(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n < 2 {
        return x.iter().map(|&xi| xi * xi).sum();
    }
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 1e6f64.powf(i as f64 / (n - 1) as f64) * xi * xi)
        .sum()
}
