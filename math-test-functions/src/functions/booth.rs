//! Booth test function

use ndarray::Array1;

/// Booth function - 2D, plate shaped
/// Global minimum: f(x) = 0 at x = (1, 3)
pub fn booth(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}
