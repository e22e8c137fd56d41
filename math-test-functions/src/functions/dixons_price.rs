//! Dixon-Price test function

use ndarray::Array1;

/// Dixon-Price function - unimodal, non-separable
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i), i = 1..n
pub fn dixons_price(x: &Array1<f64>) -> f64 {
    let head = (x[0] - 1.0).powi(2);
    let tail: f64 = x
        .iter()
        .zip(x.iter().skip(1))
        .enumerate()
        .map(|(i, (&prev, &xi))| (i + 2) as f64 * (2.0 * xi * xi - prev).powi(2))
        .sum();
    head + tail
}
