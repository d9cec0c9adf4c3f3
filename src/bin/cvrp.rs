use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use u_cvrp::config::SolverConfig;
use u_cvrp::error::Result;
use u_cvrp::io::{format_solution, read_instance, BestKnownStore};
use u_cvrp::logging::init_logging;
use u_cvrp::solver::solve_seeded;

/// Solves capacitated vehicle routing instances and prints the solutions.
///
/// Each instance file holds `N V C` followed by `N` lines `demand x y`,
/// the first of which is the depot.
#[derive(Parser, Debug)]
#[command(name = "cvrp", version, about)]
struct Args {
    /// Instance files to solve.
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// JSON solver configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of relocate/swap trials.
    #[arg(long)]
    trials: Option<u64>,

    /// Wall-clock cap for the trial phase, in milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Wall-clock budget of each TSP run, in milliseconds.
    #[arg(long)]
    tsp_time_ms: Option<u64>,

    /// Move cap of each TSP run (0 = time limit only).
    #[arg(long)]
    tsp_iterations: Option<u64>,

    /// Directory of best-known solutions to update.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(trials) = self.trials {
            config.improvement.trials = trials;
        }
        if let Some(ms) = self.time_limit_ms {
            config.improvement.time_limit_ms = Some(ms);
        }
        if let Some(ms) = self.tsp_time_ms {
            config.improvement.tsp.time_limit_ms = ms;
        }
        if let Some(iterations) = self.tsp_iterations {
            config.improvement.tsp.max_iterations = (iterations > 0).then_some(iterations);
        }
        Ok(config)
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.solver_config()?;
    let store = args.store.as_ref().map(BestKnownStore::create).transpose()?;

    for path in &args.instances {
        info!(path = %path.display(), "reading instance");
        let instance = read_instance(path)?;
        let outcome = solve_seeded(&instance, &config)?;
        info!(
            initial = outcome.initial_distance,
            distance = outcome.solution.total_distance(),
            relocates = outcome.stats.relocate_accepts,
            swaps = outcome.stats.swap_accepts,
            "instance solved"
        );
        print!("{}", format_solution(&outcome.solution));

        if let Some(store) = &store {
            store.offer(instance.num_locations(), &outcome.solution)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
