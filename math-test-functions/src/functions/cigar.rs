//! Cigar test function

use ndarray::Array1;

/// Cigar function - one well conditioned axis, the rest scaled by 1e6
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn cigar(x: &Array1<f64>) -> f64 {
    let rest: f64 = x.iter().skip(1).map(|&xi| xi * xi).sum();
    x[0] * x[0] + 1e6 * rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_cigar_values() {
        assert_eq!(cigar(&array![2.0, 0.0]), 4.0);
        assert_eq!(cigar(&array![0.0, 1.0, 1.0]), 2e6);
    }
}
