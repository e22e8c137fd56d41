use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Binomial crossover: each coordinate comes from the mutant with
/// probability `cr`, and one random coordinate always does.
pub(crate) fn binomial<R: Rng + ?Sized>(
    target: ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let jrand = rng.random_range(0..n);
    let mut trial = target.to_owned();
    for j in 0..n {
        if j == jrand || rng.random::<f64>() < cr {
            trial[j] = mutant[j];
        }
    }
    trial
}

/// Exponential crossover: copies a contiguous, wrapping run of mutant
/// coordinates starting at a random position.
pub(crate) fn exponential<R: Rng + ?Sized>(
    target: ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let mut trial = target.to_owned();
    let mut j = rng.random_range(0..n);
    let mut copied = 0;
    loop {
        trial[j] = mutant[j];
        copied += 1;
        j = (j + 1) % n;
        if copied >= n || rng.random::<f64>() >= cr {
            break;
        }
    }
    trial
}
