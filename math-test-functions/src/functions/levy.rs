//! Levy test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Levy function - multimodal, generalized to N dimensions
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn levy(x: &Array1<f64>) -> f64 {
    let w = x.mapv(|xi| 1.0 + (xi - 1.0) / 4.0);
    let n = w.len();

    let head = (PI * w[0]).sin().powi(2);
    let middle: f64 = w
        .iter()
        .take(n - 1)
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let wn = w[n - 1];
    let tail = (wn - 1.0).powi(2) * (1.0 + (2.0 * PI * wn).sin().powi(2));

    head + middle + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_levy_minimum() {
        assert_abs_diff_eq!(levy(&Array1::ones(5)), 0.0, epsilon = 1e-12);
        assert!(levy(&Array1::zeros(5)) > 0.0);
    }
}
