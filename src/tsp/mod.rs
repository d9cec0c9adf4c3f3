//! Single-vehicle TSP local search.
//!
//! [`solve_tsp`] is a stateless function of `(points, config, rng)`: it builds
//! a nearest-neighbor tour from point 0 and improves it by simulated
//! annealing over 2-opt moves until a wall-clock deadline (and optional
//! iteration cap) is reached. The returned tour starts at point 0.
//!
//! - [`nearest_neighbor_order`] — greedy construction, O(n²)
//! - [`anneal_two_opt`] — SA-driven segment reversal with O(1) move gains
//! - [`tour_length`] — independent full recomputation of a cyclic tour

mod nearest_neighbor;
mod tour;
mod two_opt;

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::annealing::CoolingSchedule;
use crate::geometry::Point;

pub use nearest_neighbor::nearest_neighbor_order;
pub use tour::{tour_length, Tour};
pub use two_opt::{anneal_two_opt, two_opt_gain, TspBudget};

/// Configuration of one TSP engine run.
///
/// # Examples
///
/// ```
/// use u_cvrp::tsp::TspConfig;
///
/// let config = TspConfig::default()
///     .with_time_limit_ms(5)
///     .with_max_iterations(Some(1_000));
/// assert_eq!(config.time_limit_ms, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TspConfig {
    /// Wall-clock budget per run, in milliseconds.
    pub time_limit_ms: u64,
    /// Optional cap on drawn 2-opt moves per run.
    pub max_iterations: Option<u64>,
    /// Temperature schedule.
    pub schedule: CoolingSchedule,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 20,
            max_iterations: Some(10_000),
            schedule: CoolingSchedule::default(),
        }
    }
}

impl TspConfig {
    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the iteration cap (`None` = time limit only).
    pub fn with_max_iterations(mut self, max: Option<u64>) -> Self {
        self.max_iterations = max;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Budget for a run starting now.
    pub fn budget(&self) -> TspBudget {
        TspBudget {
            deadline: Instant::now() + Duration::from_millis(self.time_limit_ms),
            max_iterations: self.max_iterations,
        }
    }
}

/// Finds a short cyclic tour through `points`, anchored at point 0.
///
/// Fewer than two points yield a trivial tour of length zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cvrp::geometry::Point;
/// use u_cvrp::tsp::{solve_tsp, tour_length, TspConfig};
///
/// let pts = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = solve_tsp(&pts, &TspConfig::default(), &mut rng);
/// assert_eq!(tour.order()[0], 0);
/// assert!((tour.length() - 4.0).abs() < 1e-9);
/// assert!((tour.length() - tour_length(&pts, tour.order())).abs() < 1e-9);
/// ```
pub fn solve_tsp<R: Rng>(points: &[Point], config: &TspConfig, rng: &mut R) -> Tour {
    solve_tsp_with_budget(points, &config.schedule, config.budget(), rng)
}

/// Like [`solve_tsp`] with an explicit budget.
pub fn solve_tsp_with_budget<R: Rng>(
    points: &[Point],
    schedule: &CoolingSchedule,
    budget: TspBudget,
    rng: &mut R,
) -> Tour {
    if points.len() < 2 {
        return Tour::new((0..points.len()).collect(), 0.0);
    }
    let initial = Tour::from_order(points, nearest_neighbor_order(points));
    let mut tour = anneal_two_opt(points, initial, schedule, budget, rng);
    tour.rotate_to(0);
    tour
}
