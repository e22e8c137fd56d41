//! Catalog of black-box optimization test functions.
//!
//! Every entry carries the metadata a benchmark harness needs to drive an
//! optimizer against it: a nominal search range shared by all dimensions,
//! the dimensionality (`0` for functions defined in any dimension), and the
//! value of the global minimum.
//!
//! ```rust
//! use math_test_functions::{corpus, find};
//! use ndarray::Array1;
//!
//! let sphere = find("sphere").expect("sphere is in the catalog");
//! assert!(sphere.is_variable());
//! assert_eq!(sphere.eval(&Array1::zeros(3)), sphere.optimum);
//! assert!(corpus().len() > 10);
//! ```

use ndarray::Array1;

pub mod functions;
pub use functions::*;

/// Evaluation entry point of a test function.
pub type Evaluate = fn(&Array1<f64>) -> f64;

/// A test function together with the metadata needed to benchmark it.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction {
    /// Short identifier, used in reports.
    pub name: &'static str,
    /// Fixed dimensionality, or `0` when the function accepts any dimension.
    pub dims: usize,
    /// Lower end of the nominal search range, identical for every dimension.
    pub range_min: f64,
    /// Upper end of the nominal search range, identical for every dimension.
    pub range_max: f64,
    /// Objective value at the global minimum.
    pub optimum: f64,
    /// The function itself.
    pub evaluate: Evaluate,
}

impl TestFunction {
    /// Whether the function is defined for any number of dimensions.
    pub fn is_variable(&self) -> bool {
        self.dims == 0
    }

    /// Dimensionality to use for this function, falling back to `default`
    /// for variable-dimension functions.
    pub fn resolve_dims(&self, default: usize) -> usize {
        if self.is_variable() { default } else { self.dims }
    }

    /// Evaluates the function at `x`.
    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        (self.evaluate)(x)
    }
}

const fn variable(name: &'static str, range: f64, optimum: f64, evaluate: Evaluate) -> TestFunction {
    TestFunction {
        name,
        dims: 0,
        range_min: -range,
        range_max: range,
        optimum,
        evaluate,
    }
}

const fn fixed_2d(name: &'static str, range: f64, optimum: f64, evaluate: Evaluate) -> TestFunction {
    TestFunction {
        name,
        dims: 2,
        range_min: -range,
        range_max: range,
        optimum,
        evaluate,
    }
}

// Ranges are symmetric and wide enough that the global minimum stays inside
// the range after any sign flip and after halving either end.
static CORPUS: [TestFunction; 19] = [
    variable("sphere", 5.12, 0.0, sphere),
    variable("sum_squares", 10.0, 0.0, sum_squares),
    variable("rotated_hyper_ellipsoid", 65.536, 0.0, rotated_hyper_ellipsoid),
    variable("different_powers", 1.0, 0.0, different_powers),
    variable("elliptic", 100.0, 0.0, elliptic),
    variable("cigar", 100.0, 0.0, cigar),
    variable("zakharov", 10.0, 0.0, zakharov),
    variable("dixons_price", 10.0, 0.0, dixons_price),
    variable("rosenbrock", 5.0, 0.0, rosenbrock),
    variable("ackley", 32.768, 0.0, ackley),
    variable("rastrigin", 5.12, 0.0, rastrigin),
    variable("griewank", 600.0, 0.0, griewank),
    variable("levy", 10.0, 0.0, levy),
    variable("alpine_n1", 10.0, 0.0, alpine_n1),
    fixed_2d("bohachevsky1", 100.0, 0.0, bohachevsky1),
    fixed_2d("booth", 10.0, 0.0, booth),
    fixed_2d("matyas", 10.0, 0.0, matyas),
    fixed_2d("three_hump_camel", 5.0, 0.0, three_hump_camel),
    fixed_2d("six_hump_camel", 3.0, -1.0316284534898774, six_hump_camel),
];

/// The full catalog, in sweep order.
pub fn corpus() -> &'static [TestFunction] {
    &CORPUS
}

/// Looks up a catalog entry by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static TestFunction> {
    CORPUS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Names of all catalog entries, in sweep order.
pub fn names() -> Vec<&'static str> {
    CORPUS.iter().map(|f| f.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    /// Location of the global minimum, used to cross-check `optimum`.
    fn minimizer(name: &str, dims: usize) -> Array1<f64> {
        match name {
            "rosenbrock" | "levy" => Array1::ones(dims),
            "dixons_price" => Array1::from_shape_fn(dims, |i| {
                let p = 2f64.powi(i as i32 + 1);
                2f64.powf(-(p - 2.0) / p)
            }),
            "booth" => Array1::from_vec(vec![1.0, 3.0]),
            "six_hump_camel" => Array1::from_vec(vec![0.0898420131, -0.7126564030]),
            _ => Array1::zeros(dims),
        }
    }

    #[test]
    fn test_optimum_matches_evaluation() {
        for f in corpus() {
            let dims = f.resolve_dims(5);
            let value = f.eval(&minimizer(f.name, dims));
            assert_abs_diff_eq!(value, f.optimum, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_minimizer_survives_sign_flip_and_halved_range() {
        for f in corpus() {
            let dims = f.resolve_dims(5);
            for &xi in minimizer(f.name, dims).iter() {
                assert!(
                    xi.abs() <= 0.5 * f.range_max.min(-f.range_min),
                    "{}: minimizer coordinate {} outside halved range",
                    f.name,
                    xi
                );
            }
        }
    }

    #[test]
    fn test_catalog_metadata_is_consistent() {
        let mut seen = HashSet::new();
        for f in corpus() {
            assert!(seen.insert(f.name), "duplicate entry {}", f.name);
            assert!(f.range_min < f.range_max, "{} has an empty range", f.name);
            assert!(f.optimum.is_finite());
        }
        assert_eq!(names().len(), corpus().len());
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("ROSENBROCK").map(|f| f.name), Some("rosenbrock"));
        assert!(find("no_such_function").is_none());
    }

    #[test]
    fn test_resolve_dims() {
        let sphere = find("sphere").unwrap();
        let booth = find("booth").unwrap();
        assert_eq!(sphere.resolve_dims(7), 7);
        assert_eq!(booth.resolve_dims(7), 2);
    }
}
