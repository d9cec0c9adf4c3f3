//! End-to-end solve pipeline.
//!
//! validation → [`greedy_first_fit`] → [`improve`]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SolverConfig;
use crate::constructive::greedy_first_fit;
use crate::error::Result;
use crate::improvement::{improve, ImprovementStats};
use crate::models::{Instance, Solution};

/// Result of a full solve.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The improved solution.
    pub solution: Solution,
    /// Objective of the greedy construction.
    pub initial_distance: f64,
    /// Improvement loop counters.
    pub stats: ImprovementStats,
}

/// Validates, constructs and improves a solution using the given RNG.
///
/// # Errors
///
/// Returns [`RoutingError::InfeasibleInstance`](crate::error::RoutingError::InfeasibleInstance)
/// if the fleet cannot serve the instance.
pub fn solve<R: Rng>(instance: &Instance, config: &SolverConfig, rng: &mut R) -> Result<SolveOutcome> {
    instance.validate()?;
    info!(
        customers = instance.num_customers(),
        vehicles = instance.fleet().vehicles(),
        capacity = instance.fleet().capacity(),
        "solving instance"
    );

    let initial = greedy_first_fit(instance)?;
    let initial_distance = initial.total_distance();
    info!(distance = initial_distance, "greedy construction done");

    let (solution, stats) = improve(instance, initial, &config.improvement, rng);
    Ok(SolveOutcome {
        solution,
        initial_distance,
        stats,
    })
}

/// Like [`solve`], with a [`StdRng`] seeded from `config.seed`.
///
/// Identical seeds and iteration-capped budgets give identical solutions.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::SolverConfig;
/// use u_cvrp::geometry::Point;
/// use u_cvrp::improvement::ImprovementConfig;
/// use u_cvrp::models::{Fleet, Instance};
/// use u_cvrp::solver::solve_seeded;
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
/// let config = SolverConfig::default()
///     .with_seed(1)
///     .with_improvement(ImprovementConfig::default().with_trials(100));
/// let outcome = solve_seeded(&instance, &config).unwrap();
/// assert!(outcome.solution.total_distance() <= outcome.initial_distance);
/// ```
pub fn solve_seeded(instance: &Instance, config: &SolverConfig) -> Result<SolveOutcome> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    solve(instance, config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Infeasibility, RoutingError};
    use crate::evaluation::SolutionEvaluator;
    use crate::geometry::Point;
    use crate::improvement::ImprovementConfig;
    use crate::models::Fleet;
    use crate::tsp::TspConfig;

    fn quick(seed: u64) -> SolverConfig {
        SolverConfig::default().with_seed(seed).with_improvement(
            ImprovementConfig::default().with_trials(200).with_tsp(
                TspConfig::default()
                    .with_time_limit_ms(10_000)
                    .with_max_iterations(Some(300)),
            ),
        )
    }

    fn ring(n: usize, demand: u32) -> Instance {
        let mut sites = vec![(0, Point::new(0.0, 0.0))];
        for i in 0..n {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            sites.push((demand, Point::new(10.0 * angle.cos(), 10.0 * angle.sin())));
        }
        Instance::new(sites, Fleet::new(3, 4 * demand))
    }

    #[test]
    fn test_solve_produces_valid_solution() {
        let inst = ring(10, 1);
        let outcome = solve_seeded(&inst, &quick(5)).expect("feasible");
        assert!(SolutionEvaluator::new(&inst).is_valid(&outcome.solution));
        assert!(outcome.solution.total_distance() <= outcome.initial_distance + 1e-10);
        assert!(!outcome.solution.is_optimal());
    }

    #[test]
    fn test_same_seed_same_solution() {
        let inst = ring(9, 2);
        let a = solve_seeded(&inst, &quick(17)).expect("feasible");
        let b = solve_seeded(&inst, &quick(17)).expect("feasible");
        assert_eq!(a.solution.routes(), b.solution.routes());
        assert_eq!(a.solution.total_distance(), b.solution.total_distance());
    }

    #[test]
    fn test_infeasible_instance_rejected() {
        let inst = Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (4, Point::new(1.0, 0.0)),
                (3, Point::new(0.0, 1.0)),
                (3, Point::new(1.0, 1.0)),
            ],
            Fleet::new(2, 4),
        );
        let err = solve_seeded(&inst, &quick(1)).expect_err("infeasible");
        assert!(matches!(
            err,
            RoutingError::InfeasibleInstance(Infeasibility::DemandExceedsCapacity {
                total_demand: 10,
                total_capacity: 8
            })
        ));
    }
}
