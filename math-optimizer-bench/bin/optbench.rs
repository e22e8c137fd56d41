use clap::{Parser, ValueEnum};
use math_differential_evolution::{DEConfigBuilder, DifferentialEvolution, Init, Mutation, Strategy};
use math_optimizer_bench::{BenchConfig, Tester};
use math_test_functions::{TestFunction, corpus, find};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "optbench",
    about = "Benchmark differential evolution over the test function catalog"
)]
struct Cli {
    /// JSON file with sweep settings; command line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Functions to run, comma separated (default: the whole catalog)
    #[arg(long, value_delimiter = ',')]
    functions: Vec<String>,

    /// Dimensionality of variable-dimension functions
    #[arg(long)]
    dims: Option<usize>,

    /// Convergence threshold on best_cost - optimum
    #[arg(long)]
    threshold: Option<f64>,

    /// Trials per function
    #[arg(long)]
    trials: Option<usize>,

    /// Optimizer steps before a trial is rejected
    #[arg(long)]
    cap: Option<usize>,

    /// Keep signs at +1 and use the nominal search range
    #[arg(long)]
    no_randomize: bool,

    /// Log per-function summaries at info level
    #[arg(long, short)]
    verbose: bool,

    /// Population size override (0 = popsize * dims)
    #[arg(long)]
    fan_size: Option<usize>,

    /// Wall-clock limit per trial, in seconds
    #[arg(long)]
    trial_timeout: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Differential evolution strategy (e.g. best1bin, rand1exp, currenttobest1bin)
    #[arg(long, default_value = "best1bin")]
    strategy: String,

    /// Population size factor (total population = popsize * dims)
    #[arg(long, default_value_t = 15)]
    popsize: usize,

    /// Minimum of the dithered mutation factor
    #[arg(long, default_value_t = 0.5)]
    mutation_min: f64,

    /// Maximum of the dithered mutation factor
    #[arg(long, default_value_t = 1.0)]
    mutation_max: f64,

    /// Crossover probability in [0, 1]
    #[arg(long, default_value_t = 0.9)]
    recombination: f64,

    /// Initialization scheme for the population
    #[arg(long, value_enum, default_value_t = InitChoice::LatinHypercube)]
    init: InitChoice,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum InitChoice {
    LatinHypercube,
    Random,
}

impl From<InitChoice> for Init {
    fn from(choice: InitChoice) -> Self {
        match choice {
            InitChoice::LatinHypercube => Init::LatinHypercube,
            InitChoice::Random => Init::Random,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(2);
}

fn bench_config(args: &Cli) -> BenchConfig {
    let mut cfg = match &args.config {
        Some(path) => BenchConfig::from_json_file(path)
            .unwrap_or_else(|err| fail(format!("cannot load {}: {err}", path.display()))),
        None => BenchConfig::default(),
    };
    if let Some(v) = args.dims {
        cfg.default_dims = v;
    }
    if let Some(v) = args.threshold {
        cfg.cost_threshold = v;
    }
    if let Some(v) = args.trials {
        cfg.trial_count = v;
    }
    if let Some(v) = args.cap {
        cfg.inner_iteration_cap = v;
    }
    if let Some(v) = args.fan_size {
        cfg.fan_size = v;
    }
    if args.trial_timeout.is_some() {
        cfg.trial_timeout_secs = args.trial_timeout;
    }
    if args.no_randomize {
        cfg.randomize = false;
    }
    if args.verbose {
        cfg.verbose = true;
    }
    cfg
}

fn select_functions(names: &[String]) -> Vec<TestFunction> {
    if names.is_empty() {
        return corpus().to_vec();
    }
    names
        .iter()
        .map(|name| match find(name.trim()) {
            Some(f) => *f,
            None => fail(format!(
                "function '{name}' not found. Use --list-functions to inspect available names."
            )),
        })
        .collect()
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if args.list_functions {
        for f in corpus() {
            let dims = if f.is_variable() {
                "N".to_string()
            } else {
                f.dims.to_string()
            };
            println!(
                "{:<26} dims={:<2} range=[{}, {}] optimum={}",
                f.name, dims, f.range_min, f.range_max, f.optimum
            );
        }
        return;
    }

    let config = bench_config(&args);
    let catalog = select_functions(&args.functions);

    let strategy = Strategy::from_str(&args.strategy)
        .unwrap_or_else(|err| fail(format!("cannot parse strategy '{}': {err}", args.strategy)));
    let de_config = DEConfigBuilder::new()
        .popsize(args.popsize)
        .mutation(Mutation::Range {
            min: args.mutation_min,
            max: args.mutation_max,
        })
        .recombination(args.recombination)
        .strategy(strategy)
        .init(args.init.into())
        .build()
        .unwrap_or_else(|err| fail(err));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut tester = Tester::new(&catalog, config, DifferentialEvolution::new(de_config))
        .unwrap_or_else(|err| fail(err));
    let report = match tester.run(&mut rng) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match args.format {
        Format::Text => println!("{report}"),
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => fail(err),
        },
    }
}
