//! Inter-route customer swap.
//!
//! # Algorithm
//!
//! Exchanges one customer of a source route with one customer of a
//! destination route, re-optimizes both routes with the TSP engine and
//! applies the swap only if both loads stay within capacity and the combined
//! distance strictly decreases.

use rand::Rng;
use tracing::trace;

use super::{reoptimize_route, MoveOutcome};
use crate::annealing::{AcceptanceCriterion, StrictImprovement};
use crate::models::{Instance, Solution};
use crate::tsp::TspConfig;

/// Swaps a uniformly random customer of `source` with one of `dest`.
///
/// Skipped when the vehicles coincide or either route is empty.
pub fn try_swap<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    source: usize,
    dest: usize,
    tsp: &TspConfig,
    rng: &mut R,
) -> MoveOutcome {
    let n_source = solution.route(source).num_customers();
    let n_dest = solution.route(dest).num_customers();
    if source == dest || n_source == 0 || n_dest == 0 {
        return MoveOutcome::Skipped;
    }
    let pos_source = rng.random_range(0..n_source);
    let pos_dest = rng.random_range(0..n_dest);
    swap_customers(instance, solution, source, pos_source, dest, pos_dest, tsp, rng)
}

/// Exchanges the customers at the given positions of two routes.
///
/// Loads are checked on both routes after the exchange.
#[allow(clippy::too_many_arguments)]
pub fn swap_customers<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    source: usize,
    pos_source: usize,
    dest: usize,
    pos_dest: usize,
    tsp: &TspConfig,
    rng: &mut R,
) -> MoveOutcome {
    if source == dest
        || pos_source >= solution.route(source).num_customers()
        || pos_dest >= solution.route(dest).num_customers()
    {
        return MoveOutcome::Skipped;
    }

    let a = solution.route(source).customers()[pos_source];
    let b = solution.route(dest).customers()[pos_dest];
    let demand_a = u64::from(instance.location(a).demand());
    let demand_b = u64::from(instance.location(b).demand());
    let capacity = u64::from(instance.fleet().capacity());

    let source_load = instance.route_load(solution.route(source)) - demand_a + demand_b;
    let dest_load = instance.route_load(solution.route(dest)) - demand_b + demand_a;
    if source_load > capacity || dest_load > capacity {
        return MoveOutcome::Infeasible;
    }

    let old_source = instance.route_distance(solution.route(source));
    let old_dest = instance.route_distance(solution.route(dest));

    let mut swapped_source = solution.route(source).clone();
    swapped_source.replace_customer_at(pos_source, b);
    let mut swapped_dest = solution.route(dest).clone();
    swapped_dest.replace_customer_at(pos_dest, a);

    let (new_source, new_source_distance) = reoptimize_route(instance, &swapped_source, tsp, rng);
    let (new_dest, new_dest_distance) = reoptimize_route(instance, &swapped_dest, tsp, rng);

    let old_combined = old_source + old_dest;
    let new_combined = new_source_distance + new_dest_distance;
    if !StrictImprovement.accept(old_combined, new_combined, 0.0, rng) {
        return MoveOutcome::Rejected;
    }

    solution.replace_route(source, new_source, old_source, new_source_distance);
    solution.replace_route(dest, new_dest, old_dest, new_dest_distance);
    trace!(a, b, source, dest, gain = old_combined - new_combined, "swap accepted");
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

    /// Two clusters, east (1, 2) and west (3, 4), served crosswise.
    fn crossed(demands: [u32; 4], capacity: u32) -> Instance {
        Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (demands[0], Point::new(10.0, 0.0)),
                (demands[1], Point::new(10.0, 1.0)),
                (demands[2], Point::new(-10.0, 0.0)),
                (demands[3], Point::new(-10.0, 1.0)),
            ],
            Fleet::new(2, capacity),
        )
    }

    #[test]
    fn test_improving_swap_accepted() {
        let inst = crossed([1, 1, 1, 1], 2);
        let mut sol = solution_for(
            &inst,
            vec![Route::from_customers(&[1, 3]), Route::from_customers(&[2, 4])],
        );
        let before = sol.total_distance();
        let mut rng = StdRng::seed_from_u64(8);
        // swap customer 3 (source pos 1) with customer 2 (dest pos 0)
        let outcome = swap_customers(&inst, &mut sol, 0, 1, 1, 0, &tsp(), &mut rng);
        let MoveOutcome::Accepted { gain } = outcome else {
            panic!("expected acceptance, got {outcome:?}");
        };
        assert!((sol.total_distance() - (before - gain)).abs() < 1e-9);
        let mut east = sol.route(0).customers().to_vec();
        east.sort_unstable();
        assert_eq!(east, vec![1, 2]);
        assert!(SolutionEvaluator::new(&inst).is_valid(&sol));
    }

    #[test]
    fn test_swap_over_capacity_is_infeasible() {
        // Moving customer 2 (demand 3) into route 0 in exchange for customer 3
        // (demand 1) would load route 0 with 2 + 3 = 5 > 4.
        let inst = crossed([2, 3, 1, 1], 4);
        let routes = vec![Route::from_customers(&[1, 3]), Route::from_customers(&[2, 4])];
        let mut sol = solution_for(&inst, routes.clone());
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = swap_customers(&inst, &mut sol, 0, 1, 1, 0, &tsp(), &mut rng);
        assert_eq!(outcome, MoveOutcome::Infeasible);
        assert_eq!(sol.routes(), routes.as_slice());
    }

    #[test]
    fn test_worsening_swap_rejected() {
        let inst = crossed([1, 1, 1, 1], 2);
        let routes = vec![Route::from_customers(&[1, 2]), Route::from_customers(&[3, 4])];
        let mut sol = solution_for(&inst, routes.clone());
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = swap_customers(&inst, &mut sol, 0, 0, 1, 0, &tsp(), &mut rng);
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(sol.routes(), routes.as_slice());
    }

    #[test]
    fn test_swap_requires_two_non_empty_routes() {
        let inst = crossed([1, 1, 1, 1], 4);
        let mut sol = solution_for(&inst, vec![Route::from_customers(&[1, 2, 3, 4]), Route::empty()]);
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(
            try_swap(&inst, &mut sol, 0, 1, &tsp(), &mut rng),
            MoveOutcome::Skipped
        );
        assert_eq!(
            try_swap(&inst, &mut sol, 0, 0, &tsp(), &mut rng),
            MoveOutcome::Skipped
        );
    }
}
