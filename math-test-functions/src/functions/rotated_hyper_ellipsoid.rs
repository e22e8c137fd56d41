//! Rotated Hyper-Ellipsoid test function

use ndarray::Array1;

/// Rotated hyper-ellipsoid - unimodal, non-separable
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rotated_hyper_ellipsoid(x: &Array1<f64>) -> f64 {
    let mut prefix = 0.0;
    let mut total = 0.0;
    for &xi in x.iter() {
        prefix += xi * xi;
        total += prefix;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_prefix_sums() {
        // 1 + (1 + 4) + (1 + 4 + 9)
        assert_eq!(rotated_hyper_ellipsoid(&array![1.0, 2.0, 3.0]), 20.0);
    }
}
