//! Inter-route customer relocation.
//!
//! # Algorithm
//!
//! Removes one customer from a source route (the remaining order is kept)
//! and appends it to a destination route, which is then re-optimized by the
//! TSP engine. The move is applied only if the destination stays within
//! capacity and the combined distance of both routes strictly decreases.

use rand::Rng;
use tracing::trace;

use super::{reoptimize_route, MoveOutcome};
use crate::annealing::{AcceptanceCriterion, StrictImprovement};
use crate::models::{Instance, Solution};
use crate::tsp::TspConfig;

/// Relocates a uniformly random customer of `source` into `dest`.
///
/// Skipped when the vehicles coincide or the source route is empty.
pub fn try_relocate<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    source: usize,
    dest: usize,
    tsp: &TspConfig,
    rng: &mut R,
) -> MoveOutcome {
    let available = solution.route(source).num_customers();
    if source == dest || available == 0 {
        return MoveOutcome::Skipped;
    }
    let position = rng.random_range(0..available);
    relocate_customer(instance, solution, source, position, dest, tsp, rng)
}

/// Moves the customer at `position` of route `source` to the end of `dest`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
/// use u_cvrp::local_search::{relocate_customer, MoveOutcome};
/// use u_cvrp::tsp::TspConfig;
///
/// // Customer 2 sits next to customer 1 but is served by a second vehicle.
/// let instance = Instance::new(
///     vec![
///         (0, Point::new(0.0, 0.0)),
///         (1, Point::new(10.0, 0.0)),
///         (1, Point::new(10.0, 1.0)),
///     ],
///     Fleet::new(2, 5),
/// );
/// let routes = vec![Route::from_customers(&[1]), Route::from_customers(&[2])];
/// let mut solution = Solution::new(routes.clone(), instance.total_distance(&routes));
/// let mut rng = StdRng::seed_from_u64(42);
/// let outcome = relocate_customer(&instance, &mut solution, 1, 0, 0, &TspConfig::default(), &mut rng);
/// assert!(matches!(outcome, MoveOutcome::Accepted { .. }));
/// assert!(solution.route(1).is_empty());
/// ```
pub fn relocate_customer<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    source: usize,
    position: usize,
    dest: usize,
    tsp: &TspConfig,
    rng: &mut R,
) -> MoveOutcome {
    if source == dest || position >= solution.route(source).num_customers() {
        return MoveOutcome::Skipped;
    }

    let customer = solution.route(source).customers()[position];
    let demand = u64::from(instance.location(customer).demand());
    let capacity = u64::from(instance.fleet().capacity());
    if instance.route_load(solution.route(dest)) + demand > capacity {
        return MoveOutcome::Infeasible;
    }

    let old_source = instance.route_distance(solution.route(source));
    let old_dest = instance.route_distance(solution.route(dest));

    let mut new_source = solution.route(source).clone();
    new_source.remove_customer_at(position);
    let new_source_distance = instance.route_distance(&new_source);

    let mut appended = solution.route(dest).clone();
    appended.push_customer(customer);
    let (new_dest, new_dest_distance) = reoptimize_route(instance, &appended, tsp, rng);

    let old_combined = old_source + old_dest;
    let new_combined = new_source_distance + new_dest_distance;
    if !StrictImprovement.accept(old_combined, new_combined, 0.0, rng) {
        return MoveOutcome::Rejected;
    }

    solution.replace_route(source, new_source, old_source, new_source_distance);
    solution.replace_route(dest, new_dest, old_dest, new_dest_distance);
    trace!(customer, source, dest, gain = old_combined - new_combined, "relocate accepted");
    MoveOutcome::Accepted {
        gain: old_combined - new_combined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SolutionEvaluator;
    use crate::geometry::Point;
    use crate::models::{Fleet, Route};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tsp() -> TspConfig {
        TspConfig::default()
            .with_time_limit_ms(10_000)
            .with_max_iterations(Some(2_000))
    }

    fn solution_for(instance: &Instance, routes: Vec<Route>) -> Solution {
        let d = instance.total_distance(&routes);
        Solution::new(routes, d)
    }

    /// Customer 3 sits right next to customers 1 and 2 but rides alone far away.
    fn clustered(capacity: u32) -> Instance {
        Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (2, Point::new(10.0, 0.0)),
                (2, Point::new(10.0, 2.0)),
                (2, Point::new(11.0, 1.0)),
            ],
            Fleet::new(2, capacity),
        )
    }

    #[test]
    fn test_improving_relocate_accepted() {
        let inst = clustered(10);
        let mut sol = solution_for(
            &inst,
            vec![Route::from_customers(&[1, 2]), Route::from_customers(&[3])],
        );
        let before = sol.total_distance();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = relocate_customer(&inst, &mut sol, 1, 0, 0, &tsp(), &mut rng);
        let MoveOutcome::Accepted { gain } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert!(gain > 0.0);
        assert!((sol.total_distance() - (before - gain)).abs() < 1e-9);
        assert!(sol.route(1).is_empty());
        assert!(SolutionEvaluator::new(&inst).is_valid(&sol));
    }

    #[test]
    fn test_capacity_infeasible_relocate_never_applied() {
        // Same geometry, but capacity 4 leaves no room for customer 3 on route 0.
        let inst = clustered(4);
        let routes = vec![Route::from_customers(&[1, 2]), Route::from_customers(&[3])];
        let mut sol = solution_for(&inst, routes.clone());
        let before = sol.total_distance();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = relocate_customer(&inst, &mut sol, 1, 0, 0, &tsp(), &mut rng);
        assert_eq!(outcome, MoveOutcome::Infeasible);
        assert_eq!(sol.routes(), routes.as_slice());
        assert_eq!(sol.total_distance(), before);
    }

    #[test]
    fn test_worsening_relocate_rejected() {
        let inst = clustered(10);
        let routes = vec![Route::from_customers(&[1, 2, 3]), Route::empty()];
        let mut sol = solution_for(&inst, routes.clone());
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = relocate_customer(&inst, &mut sol, 0, 1, 1, &tsp(), &mut rng);
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(sol.routes(), routes.as_slice());
    }

    #[test]
    fn test_skips_degenerate_moves() {
        let inst = clustered(10);
        let mut sol = solution_for(&inst, vec![Route::from_customers(&[1, 2, 3]), Route::empty()]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            try_relocate(&inst, &mut sol, 1, 0, &tsp(), &mut rng),
            MoveOutcome::Skipped
        );
        assert_eq!(
            try_relocate(&inst, &mut sol, 0, 0, &tsp(), &mut rng),
            MoveOutcome::Skipped
        );
        assert_eq!(
            relocate_customer(&inst, &mut sol, 0, 7, 1, &tsp(), &mut rng),
            MoveOutcome::Skipped
        );
    }
}
