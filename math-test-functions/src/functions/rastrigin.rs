//! Rastrigin test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Rastrigin function - highly multimodal, regularly spaced local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    const A: f64 = 10.0;
    A * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - A * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rastrigin_integer_lattice() {
        assert_abs_diff_eq!(rastrigin(&Array1::zeros(3)), 0.0, epsilon = 1e-12);
        // local minima sit near the integer lattice
        assert_abs_diff_eq!(
            rastrigin(&Array1::from_vec(vec![1.0, 0.0])),
            1.0,
            epsilon = 1e-12
        );
    }
}
