//! Composite improvement loop for CVRP solutions.
//!
//! # Algorithm
//!
//! 1. **Tighten**: every non-empty route is re-optimized as a single-vehicle
//!    TSP instance and replaced only if strictly shorter.
//! 2. **Perturb**: for a fixed number of trials, draw a source and a
//!    destination vehicle uniformly at random and, with equal probability,
//!    try to relocate a customer from source to destination or swap one
//!    customer between them. See [`crate::local_search`].
//!
//! Both phases accept only strictly improving feasible moves, so the
//! objective is monotone non-increasing.
//!
//! # Complexity
//!
//! O(trials · t_tsp) where t_tsp is the TSP engine budget per call
//! (at most two calls per trial).

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::local_search::{tighten_all, try_relocate, try_swap, MoveOutcome};
use crate::models::{Instance, Solution};
use crate::tsp::TspConfig;

/// Configuration of the improvement loop.
///
/// # Examples
///
/// ```
/// use u_cvrp::improvement::ImprovementConfig;
///
/// let config = ImprovementConfig::default()
///     .with_trials(500)
///     .with_time_limit_ms(Some(1_000));
/// assert_eq!(config.trials, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementConfig {
    /// Number of relocate/swap trials.
    pub trials: u64,
    /// Optional wall-clock cap for the trial phase, in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Budget of each TSP engine call.
    pub tsp: TspConfig,
}

impl Default for ImprovementConfig {
    fn default() -> Self {
        Self {
            trials: 100_000,
            time_limit_ms: None,
            tsp: TspConfig::default(),
        }
    }
}

impl ImprovementConfig {
    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the wall-clock cap (`None` = trials only).
    pub fn with_time_limit_ms(mut self, ms: Option<u64>) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the TSP engine configuration.
    pub fn with_tsp(mut self, tsp: TspConfig) -> Self {
        self.tsp = tsp;
        self
    }
}

/// Counters collected by [`improve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImprovementStats {
    /// Trials started.
    pub trials: u64,
    /// Trials skipped (same vehicle or empty route).
    pub skipped: u64,
    /// Relocate moves evaluated.
    pub relocate_attempts: u64,
    /// Relocate moves applied.
    pub relocate_accepts: u64,
    /// Swap moves evaluated.
    pub swap_attempts: u64,
    /// Swap moves applied.
    pub swap_accepts: u64,
    /// Moves rejected for exceeding capacity.
    pub infeasible: u64,
    /// Distance saved by the tighten phase.
    pub tighten_gain: f64,
    /// Objective before the loop.
    pub initial_distance: f64,
    /// Objective after the loop.
    pub final_distance: f64,
}

impl ImprovementStats {
    /// Total number of applied inter-route moves.
    pub fn accepted(&self) -> u64 {
        self.relocate_accepts + self.swap_accepts
    }

    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Skipped => self.skipped += 1,
            MoveOutcome::Infeasible => self.infeasible += 1,
            MoveOutcome::Rejected | MoveOutcome::Accepted { .. } => {}
        }
    }
}

/// Improves a feasible solution in place and returns it with statistics.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance};
/// use u_cvrp::constructive::greedy_first_fit;
/// use u_cvrp::improvement::{improve, ImprovementConfig};
///
/// let instance = Instance::new(
///     vec![
///         (0, Point::new(0.0, 0.0)),
///         (3, Point::new(1.0, 0.0)),
///         (4, Point::new(0.0, 1.0)),
///         (2, Point::new(1.0, 1.0)),
///         (1, Point::new(2.0, 2.0)),
///     ],
///     Fleet::new(2, 5),
/// );
/// let initial = greedy_first_fit(&instance).unwrap();
/// let before = initial.total_distance();
/// let mut rng = StdRng::seed_from_u64(42);
/// let config = ImprovementConfig::default().with_trials(200);
/// let (solution, stats) = improve(&instance, initial, &config, &mut rng);
/// assert!(solution.total_distance() <= before);
/// assert_eq!(stats.trials, 200);
/// ```
pub fn improve<R: Rng>(
    instance: &Instance,
    mut solution: Solution,
    config: &ImprovementConfig,
    rng: &mut R,
) -> (Solution, ImprovementStats) {
    let mut stats = ImprovementStats {
        initial_distance: solution.total_distance(),
        ..ImprovementStats::default()
    };

    stats.tighten_gain = tighten_all(instance, &mut solution, &config.tsp, rng);
    debug!(
        gain = stats.tighten_gain,
        distance = solution.total_distance(),
        "routes tightened"
    );

    let vehicles = solution.num_routes();
    let deadline = config
        .time_limit_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    for trial in 0..config.trials {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            debug!(trial, "improvement time limit reached");
            break;
        }
        stats.trials += 1;

        if vehicles < 2 {
            stats.skipped += 1;
            continue;
        }
        let source = rng.random_range(0..vehicles);
        if solution.route(source).is_empty() {
            stats.skipped += 1;
            continue;
        }
        let dest = rng.random_range(0..vehicles);
        if source == dest {
            stats.skipped += 1;
            continue;
        }

        let outcome = if rng.random_bool(0.5) {
            stats.relocate_attempts += 1;
            let outcome = try_relocate(instance, &mut solution, source, dest, &config.tsp, rng);
            if outcome.is_accepted() {
                stats.relocate_accepts += 1;
            }
            outcome
        } else {
            stats.swap_attempts += 1;
            let outcome = try_swap(instance, &mut solution, source, dest, &config.tsp, rng);
            if outcome.is_accepted() {
                stats.swap_accepts += 1;
            }
            outcome
        };
        stats.record(outcome);

        if let MoveOutcome::Accepted { gain } = outcome {
            debug!(trial, gain, distance = solution.total_distance(), "move accepted");
        } else {
            trace!(trial, ?outcome, "move not applied");
        }
    }

    stats.final_distance = solution.total_distance();
    info!(
        initial_distance = stats.initial_distance,
        final_distance = stats.final_distance,
        trials = stats.trials,
        accepted = stats.accepted(),
        "improvement finished"
    );
    (solution, stats)
}
