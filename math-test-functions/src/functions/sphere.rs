//! Sphere test function

use ndarray::Array1;

/// Sphere function - N-dimensional, convex and separable
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.dot(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sphere_values() {
        assert_eq!(sphere(&Array1::zeros(5)), 0.0);
        assert_eq!(sphere(&array![1.0, -2.0, 3.0]), 14.0);
    }
}
