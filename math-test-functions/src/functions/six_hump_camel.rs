//! Six-Hump Camel test function

use ndarray::Array1;

/// Six-hump camel function - 2D, two symmetric global minima
/// Global minimum: f(x) = -1.0316284535 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
pub fn six_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}
