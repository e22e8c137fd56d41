//! Bohachevsky N.1 test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Bohachevsky function 1 - 2D, bowl shaped with cosine ripples
/// Global minimum: f(x) = 0 at x = (0, 0)
pub fn bohachevsky1(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1 * x1 + 2.0 * x2 * x2 - 0.3 * (3.0 * PI * x1).cos() - 0.4 * (4.0 * PI * x2).cos() + 0.7
}
