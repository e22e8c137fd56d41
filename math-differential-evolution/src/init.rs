use ndarray::{Array1, Array2};
use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform random population inside `[lower, upper]`.
pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    Array2::from_shape_fn((npop, n), |(_, j)| {
        lower[j] + rng.random::<f64>() * (upper[j] - lower[j])
    })
}

/// Latin hypercube population: each dimension is split into `npop` strata
/// and every stratum receives exactly one member.
pub(crate) fn init_latin_hypercube<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    let mut pop = Array2::<f64>::zeros((npop, n));
    let mut strata: Vec<f64> = Vec::with_capacity(npop);

    for j in 0..n {
        strata.clear();
        strata.extend((0..npop).map(|k| (k as f64 + rng.random::<f64>()) / npop as f64));
        strata.shuffle(rng);

        let span = upper[j] - lower[j];
        for (i, &u) in strata.iter().enumerate() {
            pop[(i, j)] = lower[j] + u * span;
        }
    }
    pop
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_latin_hypercube_covers_every_stratum() {
        let mut rng = StdRng::seed_from_u64(7);
        let lower = array![0.0, -10.0];
        let upper = array![1.0, 10.0];
        let npop = 8;
        let pop = init_latin_hypercube(npop, &lower, &upper, &mut rng);

        for j in 0..2 {
            let mut hits = vec![false; npop];
            for i in 0..npop {
                let u = (pop[(i, j)] - lower[j]) / (upper[j] - lower[j]);
                let stratum = ((u * npop as f64).floor() as usize).min(npop - 1);
                hits[stratum] = true;
            }
            assert!(hits.iter().all(|&h| h), "dimension {j} misses a stratum");
        }
    }

    #[test]
    fn test_random_init_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let lower = array![-1.0, 2.0, 5.0];
        let upper = array![1.0, 3.0, 5.0];
        let pop = init_random(50, &lower, &upper, &mut rng);

        assert_eq!(pop.dim(), (50, 3));
        for row in pop.outer_iter() {
            for j in 0..3 {
                assert!(row[j] >= lower[j] && row[j] <= upper[j]);
            }
        }
    }
}
