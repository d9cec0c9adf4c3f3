//! First-fit decreasing constructive heuristic.
//!
//! Customers are sorted by descending demand and packed into the first
//! vehicle with enough remaining capacity, like bin packing. Within a route
//! customers keep their assignment order; no routing optimization happens
//! here.
//!
//! # Complexity
//!
//! O(n log n + n·V) where V = number of vehicles.

use tracing::{debug, warn};

use crate::error::{Infeasibility, Result};
use crate::models::{Instance, Route, Solution};

/// Builds an initial solution by first-fit decreasing packing.
///
/// Ties in demand keep input order. The objective is the sum of straight
/// depot-to-depot route lengths in assignment order.
///
/// # Errors
///
/// Returns [`Infeasibility::Unplaced`] if some customer fits in no vehicle.
/// Call [`Instance::validate`] first to get a more specific reason for
/// instances that are infeasible regardless of packing order.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance};
/// use u_cvrp::constructive::greedy_first_fit;
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
/// let solution = greedy_first_fit(&instance).unwrap();
/// assert_eq!(solution.route(0).customers(), &[2, 4]);
/// assert_eq!(solution.route(1).customers(), &[1, 3]);
/// ```
pub fn greedy_first_fit(instance: &Instance) -> Result<Solution> {
    let fleet = instance.fleet();
    let mut order: Vec<usize> = instance.customers().map(|c| c.id()).collect();
    order.sort_by_key(|&id| std::cmp::Reverse(instance.location(id).demand()));

    let mut remaining = vec![fleet.capacity(); fleet.vehicles()];
    let mut routes = vec![Route::empty(); fleet.vehicles()];
    let mut unplaced = Vec::new();

    for id in order {
        let demand = instance.location(id).demand();
        match remaining.iter().position(|&room| room >= demand) {
            Some(v) => {
                remaining[v] -= demand;
                routes[v].push_customer(id);
            }
            None => unplaced.push(id),
        }
    }

    if !unplaced.is_empty() {
        warn!(count = unplaced.len(), "first-fit packing left customers unplaced");
        return Err(Infeasibility::Unplaced {
            customers: unplaced,
        }
        .into());
    }

    let total = instance.total_distance(&routes);
    debug!(distance = total, "greedy solution built");
    Ok(Solution::new(routes, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::evaluation::SolutionEvaluator;
    use crate::geometry::Point;
    use crate::models::Fleet;

    fn scenario() -> Instance {
        Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (3, Point::new(1.0, 0.0)),
                (4, Point::new(0.0, 1.0)),
                (2, Point::new(1.0, 1.0)),
                (1, Point::new(2.0, 2.0)),
            ],
            Fleet::new(2, 5),
        )
    }

    #[test]
    fn test_scenario_packing() {
        let inst = scenario();
        let sol = greedy_first_fit(&inst).expect("feasible");
        // demand 4 goes first to vehicle 0, demand 1 fills it up
        assert_eq!(sol.route(0).stops(), &[0, 2, 4, 0]);
        // demands 3 and 2 share vehicle 1
        assert_eq!(sol.route(1).stops(), &[0, 1, 3, 0]);
        for route in sol.routes() {
            assert!(inst.route_load(route) <= 5);
        }
        assert!(SolutionEvaluator::new(&inst).is_valid(&sol));
    }

    #[test]
    fn test_objective_is_straight_line_sum() {
        let inst = scenario();
        let sol = greedy_first_fit(&inst).expect("feasible");
        let expected = inst.distances().path_length(&[0, 2, 4, 0])
            + inst.distances().path_length(&[0, 1, 3, 0]);
        assert!((sol.total_distance() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let inst = Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (2, Point::new(1.0, 0.0)),
                (2, Point::new(2.0, 0.0)),
                (2, Point::new(3.0, 0.0)),
            ],
            Fleet::new(1, 10),
        );
        let sol = greedy_first_fit(&inst).expect("feasible");
        assert_eq!(sol.route(0).customers(), &[1, 2, 3]);
    }

    #[test]
    fn test_unused_vehicles_are_empty() {
        let inst = Instance::new(
            vec![(0, Point::new(0.0, 0.0)), (1, Point::new(1.0, 0.0))],
            Fleet::new(3, 10),
        );
        let sol = greedy_first_fit(&inst).expect("feasible");
        assert_eq!(sol.num_routes(), 3);
        assert!(sol.route(1).is_empty());
        assert!(sol.route(2).is_empty());
        assert!((sol.total_distance() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_customers() {
        let inst = Instance::new(vec![(0, Point::new(0.0, 0.0))], Fleet::new(2, 10));
        let sol = greedy_first_fit(&inst).expect("feasible");
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.total_distance(), 0.0);
    }

    #[test]
    fn test_total_demand_too_large_is_reported() {
        // total demand 10 > 2 x 4
        let inst = Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (4, Point::new(1.0, 0.0)),
                (3, Point::new(0.0, 1.0)),
                (3, Point::new(1.0, 1.0)),
            ],
            Fleet::new(2, 4),
        );
        match greedy_first_fit(&inst) {
            Err(RoutingError::InfeasibleInstance(Infeasibility::Unplaced { customers })) => {
                assert!(!customers.is_empty());
            }
            other => panic!("expected unplaced customers, got {other:?}"),
        }
    }

    #[test]
    fn test_packing_failure_despite_enough_total_capacity() {
        // total demand 6 == 2 x 3, yet each vehicle holds only one demand-2 customer
        let inst = Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (2, Point::new(1.0, 0.0)),
                (2, Point::new(2.0, 0.0)),
                (2, Point::new(3.0, 0.0)),
            ],
            Fleet::new(2, 3),
        );
        assert!(inst.validate().is_ok());
        let err = greedy_first_fit(&inst).expect_err("cannot pack");
        assert!(matches!(
            err,
            RoutingError::InfeasibleInstance(Infeasibility::Unplaced { ref customers }) if customers == &vec![3]
        ));
    }
}
