//! Matyas test function

use ndarray::Array1;

/// Matyas function - 2D, flat plate with a shallow valley
/// Global minimum: f(x) = 0 at x = (0, 0)
pub fn matyas(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1 * x1 + x2 * x2) - 0.48 * x1 * x2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_matyas_values() {
        assert_eq!(matyas(&array![0.0, 0.0]), 0.0);
        assert_abs_diff_eq!(matyas(&array![1.0, 1.0]), 0.04, epsilon = 1e-12);
    }
}
