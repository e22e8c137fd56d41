//! The experiment driver: repeated trials of one optimizer over a catalog.

use std::time::{Duration, Instant};

use math_differential_evolution::StepOptimizer;
use math_test_functions::TestFunction;
use rand::Rng;

use crate::adapter::ObjectiveAdapter;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::outcome::TrialOutcome;
use crate::report::{BenchReport, FunctionReport};
use crate::stats::{AggregateAccumulator, FunctionStatistics};
use crate::ticks::{cpu_ticks, ticks_since};

/// Runs an optimizer over every function of a catalog and gathers
/// convergence statistics.
///
/// For each function, `trial_count` independent trials restart the
/// optimizer and step it until the best cost is within `cost_threshold` of
/// the known optimum (converged) or `inner_iteration_cap` steps have been
/// taken (rejected). Convergence is checked first, so a trial converging on
/// its last allowed step counts as converged.
///
/// ```rust
/// use math_differential_evolution::{DEConfig, DifferentialEvolution};
/// use math_optimizer_bench::{BenchConfig, Tester};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = [*math_test_functions::find("sphere").unwrap()];
/// let config = BenchConfig::default()
///     .with_default_dims(2)
///     .with_trial_count(3)
///     .with_cost_threshold(1e-4);
/// let mut tester =
///     Tester::new(&catalog, config, DifferentialEvolution::new(DEConfig::default())).unwrap();
///
/// let report = tester.run(&mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(report.functions[0].statistics.reject_rate, 0.0);
/// ```
pub struct Tester<'c, P> {
    catalog: &'c [TestFunction],
    config: BenchConfig,
    optimizer: P,
}

impl<'c, P: StepOptimizer> Tester<'c, P> {
    /// Creates a driver over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::EmptyCatalog` for an empty catalog and any error
    /// from [`BenchConfig::validate`].
    pub fn new(catalog: &'c [TestFunction], config: BenchConfig, optimizer: P) -> Result<Self> {
        if catalog.is_empty() {
            return Err(BenchError::EmptyCatalog);
        }
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            optimizer,
        })
    }

    /// Number of functions in the sweep.
    pub fn function_count(&self) -> usize {
        self.catalog.len()
    }

    /// Sweep settings.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The optimizer under test.
    pub fn optimizer(&self) -> &P {
        &self.optimizer
    }

    /// Gives the optimizer back.
    pub fn into_optimizer(self) -> P {
        self.optimizer
    }

    /// Runs the full sweep.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::NonFiniteCost` as soon as the objective yields
    /// NaN or an infinity; statistics gathered so far are discarded.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<BenchReport> {
        let catalog = self.catalog;
        let mut adapter = ObjectiveAdapter::new(&catalog[0]);
        let mut aggregate = AggregateAccumulator::new();
        let mut functions = Vec::with_capacity(catalog.len());

        log::info!(
            "Starting sweep: {} functions, {} trials each, cap {} steps, randomize={}",
            catalog.len(),
            self.config.trial_count,
            self.config.inner_iteration_cap,
            self.config.randomize
        );

        for function in catalog {
            let dims = function.resolve_dims(self.config.default_dims);
            adapter.set_function(function);
            adapter.configure(dims)?;
            adapter.set_randomize_range(self.config.randomize);
            if !self.config.randomize {
                adapter.reset_signs();
            }
            self.optimizer.resize(dims, self.config.fan_size);

            let mut outcomes = Vec::with_capacity(self.config.trial_count);
            for trial in 0..self.config.trial_count {
                let outcome = self.run_trial(&mut adapter, trial, &mut aggregate, rng)?;
                log::debug!("{}_{} trial {}: {:?}", function.name, dims, trial, outcome);
                outcomes.push(outcome);
            }

            let statistics = FunctionStatistics::from_outcomes(&outcomes);
            aggregate.add(&statistics);
            let report = FunctionReport {
                name: function.name.to_string(),
                dims,
                statistics,
                outcomes,
            };
            if self.config.verbose {
                log::info!("{}", report);
            } else {
                log::debug!("{}", report);
            }
            functions.push(report);
        }

        let aggregate = aggregate.finish();
        log::info!(
            "Sweep done: ItAvg={:.1}, RjAvg={:.2}%, ticks={}",
            aggregate.mean_convergence_time,
            aggregate.mean_reject_rate * 100.0,
            aggregate.total_cpu_ticks
        );

        Ok(BenchReport {
            functions,
            aggregate,
        })
    }

    fn run_trial<R: Rng + ?Sized>(
        &mut self,
        adapter: &mut ObjectiveAdapter<'c>,
        trial: usize,
        aggregate: &mut AggregateAccumulator,
        rng: &mut R,
    ) -> Result<TrialOutcome> {
        let function = adapter.function();
        if self.config.randomize {
            adapter.randomize_signs(rng);
        }

        self.optimizer.init(adapter, rng);
        check_fault(adapter, trial, 0)?;

        let deadline = self
            .config
            .trial_timeout_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .and_then(|limit| Instant::now().checked_add(limit));

        let mut iterations = 0usize;
        loop {
            let start = cpu_ticks();
            self.optimizer.step(adapter, rng);
            aggregate.add_ticks(ticks_since(start));
            iterations += 1;
            check_fault(adapter, trial, iterations)?;

            let best_cost = self.optimizer.best_cost();
            if best_cost - function.optimum < self.config.cost_threshold {
                return Ok(TrialOutcome::Converged {
                    iterations,
                    best_cost,
                });
            }
            if iterations >= self.config.inner_iteration_cap {
                return Ok(TrialOutcome::Rejected { best_cost });
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                log::warn!(
                    "{} trial {} timed out after {} steps, recording it as rejected",
                    function.name,
                    trial,
                    iterations
                );
                return Ok(TrialOutcome::Rejected { best_cost });
            }
        }
    }
}

fn check_fault(adapter: &mut ObjectiveAdapter<'_>, trial: usize, iteration: usize) -> Result<()> {
    match adapter.take_fault() {
        Some(value) => Err(BenchError::NonFiniteCost {
            function: adapter.function().name.to_string(),
            trial,
            iteration,
            value,
        }),
        None => Ok(()),
    }
}
