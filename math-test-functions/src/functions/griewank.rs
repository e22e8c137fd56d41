//! Griewank test function

use ndarray::Array1;

/// Griewank function - multimodal, product term couples the coordinates
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn griewank(x: &Array1<f64>) -> f64 {
    let (quadratic, oscillation) = x.iter().enumerate().fold((0.0, 1.0), |(q, p), (i, &xi)| {
        (q + xi * xi, p * (xi / ((i + 1) as f64).sqrt()).cos())
    });
    quadratic / 4000.0 - oscillation + 1.0
}
