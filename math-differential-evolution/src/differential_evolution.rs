use ndarray::{Array1, Array2, Zip};
use rand::Rng;

use crate::crossover;
use crate::init::{init_latin_hypercube, init_random};
use crate::mutation::mutant;
use crate::objective::{Objective, StepOptimizer};
use crate::{Crossover, DEConfig, Init, MIN_POPULATION, argmin};

/// Differential Evolution driven one generation at a time.
///
/// Search bounds are queried from the objective on every
/// [`init`](StepOptimizer::init), so a randomized objective gets a new box
/// for each restart. A lower bound greater than its upper bound is swapped
/// rather than rejected.
///
/// ```rust
/// use math_differential_evolution::{BoundedFn, DEConfig, DifferentialEvolution, StepOptimizer};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut objective =
///     BoundedFn::new(|x: &ndarray::Array1<f64>| x.dot(x), &[-5.0; 3], &[5.0; 3]).unwrap();
/// let mut de = DifferentialEvolution::new(DEConfig::default());
/// let mut rng = StdRng::seed_from_u64(42);
///
/// de.init(&mut objective, &mut rng);
/// for _ in 0..300 {
///     de.step(&mut objective, &mut rng);
/// }
/// assert!(de.best_cost() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct DifferentialEvolution {
    config: DEConfig,
    dims: usize,
    fan_size: usize,
    lower: Array1<f64>,
    upper: Array1<f64>,
    population: Array2<f64>,
    energies: Array1<f64>,
    best_idx: usize,
    best_x: Array1<f64>,
    best_f: f64,
    nit: usize,
    nfev: usize,
}

impl DifferentialEvolution {
    /// Creates an optimizer with no dimensions; the first `init` sizes it
    /// from the objective.
    pub fn new(config: DEConfig) -> Self {
        Self {
            config,
            dims: 0,
            fan_size: 0,
            lower: Array1::zeros(0),
            upper: Array1::zeros(0),
            population: Array2::zeros((0, 0)),
            energies: Array1::zeros(0),
            best_idx: 0,
            best_x: Array1::zeros(0),
            best_f: f64::INFINITY,
            nit: 0,
            nfev: 0,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &DEConfig {
        &self.config
    }

    /// Mutable access to the settings; takes effect on the next `step`.
    pub fn config_mut(&mut self) -> &mut DEConfig {
        &mut self.config
    }

    /// Number of parameters the optimizer is sized for.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of population members for the current size.
    pub fn population_size(&self) -> usize {
        let requested = if self.fan_size > 0 {
            self.fan_size
        } else {
            self.config.popsize * self.dims
        };
        requested.max(MIN_POPULATION)
    }

    /// Population matrix (members x dims).
    pub fn population(&self) -> &Array2<f64> {
        &self.population
    }

    /// Objective value of each population member.
    pub fn energies(&self) -> &Array1<f64> {
        &self.energies
    }

    /// Search box used since the last `init`, after any swap.
    pub fn bounds(&self) -> (&Array1<f64>, &Array1<f64>) {
        (&self.lower, &self.upper)
    }

    /// Generations run since the last `init`.
    pub fn nit(&self) -> usize {
        self.nit
    }

    /// Objective evaluations since the last `init`.
    pub fn nfev(&self) -> usize {
        self.nfev
    }

    /// Standard deviation of the population energies, a cheap spread
    /// measure for callers that want their own stopping rule.
    pub fn energy_std(&self) -> f64 {
        if self.energies.is_empty() {
            return 0.0;
        }
        self.energies.std(0.0)
    }

    fn evaluate<O: Objective>(&mut self, objective: &mut O, x: &Array1<f64>) -> f64 {
        self.nfev += 1;
        objective.cost(x)
    }

    fn update_best(&mut self) {
        let (idx, value) = argmin(&self.energies);
        self.best_idx = idx;
        self.best_f = value;
        self.best_x.assign(&self.population.row(idx));
    }
}

impl StepOptimizer for DifferentialEvolution {
    fn resize(&mut self, dims: usize, fan_size: usize) {
        self.dims = dims;
        self.fan_size = fan_size;
        let npop = self.population_size();
        self.lower = Array1::zeros(dims);
        self.upper = Array1::zeros(dims);
        self.population = Array2::zeros((npop, dims));
        self.energies = Array1::from_elem(npop, f64::INFINITY);
        self.best_idx = 0;
        self.best_x = Array1::zeros(dims);
        self.best_f = f64::INFINITY;
        self.nit = 0;
        self.nfev = 0;
    }

    fn init<O: Objective, R: Rng + ?Sized>(&mut self, objective: &mut O, rng: &mut R) {
        if objective.dims() != self.dims || self.population.nrows() != self.population_size() {
            self.resize(objective.dims(), self.fan_size);
        }

        objective.lower_bounds(&mut self.lower, rng);
        objective.upper_bounds(&mut self.upper, rng);
        Zip::from(&mut self.lower)
            .and(&mut self.upper)
            .for_each(|lo, hi| {
                if *lo > *hi {
                    std::mem::swap(lo, hi);
                }
            });

        let npop = self.population_size();
        self.population = match self.config.init {
            Init::LatinHypercube => init_latin_hypercube(npop, &self.lower, &self.upper, rng),
            Init::Random => init_random(npop, &self.lower, &self.upper, rng),
        };

        self.nit = 0;
        self.nfev = 0;
        for i in 0..npop {
            let x = self.population.row(i).to_owned();
            let energy = self.evaluate(objective, &x);
            self.energies[i] = energy;
        }
        self.update_best();

        log::debug!(
            "DE init: dims={}, population={}, best={:.6e}",
            self.dims,
            npop,
            self.best_f
        );
    }

    fn step<O: Objective, R: Rng + ?Sized>(&mut self, objective: &mut O, rng: &mut R) {
        if self.dims == 0 || self.population.nrows() == 0 {
            return;
        }

        let npop = self.population.nrows();
        let f = self.config.mutation.sample(rng);
        let cr = self.config.recombination;
        let strategy = self.config.strategy;

        // Deferred updating: every trial is built from the same generation.
        let mut trials: Vec<Array1<f64>> = Vec::with_capacity(npop);
        for i in 0..npop {
            let m = mutant(strategy, i, &self.population, self.best_idx, f, rng);
            let target = self.population.row(i);
            let mut trial = match strategy.crossover() {
                Crossover::Binomial => crossover::binomial(target, &m, cr, rng),
                Crossover::Exponential => crossover::exponential(target, &m, cr, rng),
            };
            Zip::from(&mut trial)
                .and(&self.lower)
                .and(&self.upper)
                .for_each(|x, &lo, &hi| *x = (*x).max(lo).min(hi));
            trials.push(trial);
        }

        for (i, trial) in trials.into_iter().enumerate() {
            let energy = self.evaluate(objective, &trial);
            if energy <= self.energies[i] {
                self.population.row_mut(i).assign(&trial);
                self.energies[i] = energy;
            }
        }

        self.update_best();
        self.nit += 1;
    }

    fn best_cost(&self) -> f64 {
        self.best_f
    }

    fn best_params(&self) -> &Array1<f64> {
        &self.best_x
    }
}
