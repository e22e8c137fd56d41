use ndarray::{Array1, Array2};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Strategy;

/// Picks `count` distinct population indices, none equal to `exclude`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: usize,
    count: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(count <= pool_size.saturating_sub(1));
    let mut idxs: Vec<usize> = (0..pool_size).filter(|&i| i != exclude).collect();
    let (chosen, _) = idxs.partial_shuffle(rng, count);
    chosen.to_vec()
}

fn rand1(pop: &Array2<f64>, r: &[usize], f: f64) -> Array1<f64> {
    &pop.row(r[0]) + &((&pop.row(r[1]) - &pop.row(r[2])) * f)
}

fn best1(pop: &Array2<f64>, best: usize, r: &[usize], f: f64) -> Array1<f64> {
    &pop.row(best) + &((&pop.row(r[0]) - &pop.row(r[1])) * f)
}

fn rand2(pop: &Array2<f64>, r: &[usize], f: f64) -> Array1<f64> {
    let diff = &pop.row(r[1]) + &pop.row(r[2]) - &pop.row(r[3]) - &pop.row(r[4]);
    &pop.row(r[0]) + &(diff * f)
}

fn best2(pop: &Array2<f64>, best: usize, r: &[usize], f: f64) -> Array1<f64> {
    let diff = &pop.row(r[0]) + &pop.row(r[1]) - &pop.row(r[2]) - &pop.row(r[3]);
    &pop.row(best) + &(diff * f)
}

fn current_to_best1(pop: &Array2<f64>, i: usize, best: usize, r: &[usize], f: f64) -> Array1<f64> {
    let curr = pop.row(i);
    let diff = &pop.row(best) - &curr + &pop.row(r[0]) - &pop.row(r[1]);
    &curr + &(diff * f)
}

fn rand_to_best1(pop: &Array2<f64>, best: usize, r: &[usize], f: f64) -> Array1<f64> {
    let base = pop.row(r[0]);
    let diff = &pop.row(best) - &base + &pop.row(r[1]) - &pop.row(r[2]);
    &base + &(diff * f)
}

/// Number of random donors a strategy draws besides the target.
pub(crate) fn donors_needed(strategy: Strategy) -> usize {
    use Strategy::*;
    match strategy {
        Best1Bin | Best1Exp | CurrentToBest1Bin | CurrentToBest1Exp => 2,
        Rand1Bin | Rand1Exp | RandToBest1Bin | RandToBest1Exp => 3,
        Best2Bin | Best2Exp => 4,
        Rand2Bin | Rand2Exp => 5,
    }
}

/// Builds the mutant vector for target `i`.
pub(crate) fn mutant<R: Rng + ?Sized>(
    strategy: Strategy,
    i: usize,
    pop: &Array2<f64>,
    best: usize,
    f: f64,
    rng: &mut R,
) -> Array1<f64> {
    use Strategy::*;
    let r = distinct_indices(i, donors_needed(strategy), pop.nrows(), rng);
    match strategy {
        Best1Bin | Best1Exp => best1(pop, best, &r, f),
        Rand1Bin | Rand1Exp => rand1(pop, &r, f),
        Rand2Bin | Rand2Exp => rand2(pop, &r, f),
        Best2Bin | Best2Exp => best2(pop, best, &r, f),
        CurrentToBest1Bin | CurrentToBest1Exp => current_to_best1(pop, i, best, &r, f),
        RandToBest1Bin | RandToBest1Exp => rand_to_best1(pop, best, &r, f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_distinct_indices_excludes_target() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let idx = distinct_indices(2, 5, 6, &mut rng);
            assert_eq!(idx.len(), 5);
            assert!(!idx.contains(&2));
            assert_eq!(idx.iter().collect::<HashSet<_>>().len(), 5);
        }
    }

    #[test]
    fn test_best1_formula() {
        let pop = array![[0.0, 0.0], [1.0, 2.0], [3.0, 5.0], [-1.0, 1.0]];
        let m = best1(&pop, 3, &[2, 1], 0.5);
        assert_abs_diff_eq!(m[0], -1.0 + 0.5 * 2.0);
        assert_abs_diff_eq!(m[1], 1.0 + 0.5 * 3.0);
    }

    #[test]
    fn test_current_to_best1_formula() {
        let pop = array![[1.0], [4.0], [2.0], [0.0]];
        // curr + f * (best - curr + r0 - r1)
        let m = current_to_best1(&pop, 0, 1, &[2, 3], 0.5);
        assert_abs_diff_eq!(m[0], 1.0 + 0.5 * (4.0 - 1.0 + 2.0 - 0.0));
    }

    #[test]
    fn test_zero_factor_returns_base() {
        let mut rng = StdRng::seed_from_u64(9);
        let pop = Array2::from_shape_fn((8, 3), |(i, j)| (i * 3 + j) as f64);
        let m = mutant(Strategy::Best2Bin, 0, &pop, 5, 0.0, &mut rng);
        assert_eq!(m, pop.row(5).to_owned());
    }
}
