//! Per-route re-optimization through the TSP engine.
//!
//! A route's customers plus the depot form a small TSP instance. The engine's
//! tour is re-anchored at the depot and replaces the route only when it is
//! strictly shorter than the current visiting order.

use rand::Rng;

use crate::models::{Instance, Route, Solution, DEPOT};
use crate::tsp::{solve_tsp, TspConfig};

/// Reorders the customers of `route` with the TSP engine.
///
/// Returns the shorter of the current order and the TSP tour, together
/// with its distance recomputed from the distance matrix.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance, Route};
/// use u_cvrp::local_search::reoptimize_route;
/// use u_cvrp::tsp::TspConfig;
///
/// let instance = Instance::new(
///     vec![
///         (0, Point::new(0.0, 0.0)),
///         (1, Point::new(1.0, 0.0)),
///         (1, Point::new(1.0, 1.0)),
///         (1, Point::new(0.0, 1.0)),
///     ],
///     Fleet::new(1, 10),
/// );
/// let crossed = Route::from_customers(&[1, 3, 2]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let (route, distance) = reoptimize_route(&instance, &crossed, &TspConfig::default(), &mut rng);
/// assert!((distance - 4.0).abs() < 1e-9);
/// assert_eq!(route.stops().first(), Some(&0));
/// ```
pub fn reoptimize_route<R: Rng>(
    instance: &Instance,
    route: &Route,
    tsp: &TspConfig,
    rng: &mut R,
) -> (Route, f64) {
    let current_distance = instance.route_distance(route);
    if route.num_customers() < 2 {
        return (route.clone(), current_distance);
    }

    let mut ids = Vec::with_capacity(route.num_customers() + 1);
    ids.push(DEPOT);
    ids.extend_from_slice(route.customers());
    let points = instance.points_of(&ids);

    let tour = solve_tsp(&points, tsp, rng);
    let customers: Vec<usize> = tour.order().iter().skip(1).map(|&i| ids[i]).collect();
    let candidate = Route::from_customers(&customers);
    let candidate_distance = instance.route_distance(&candidate);

    if candidate_distance < current_distance {
        (candidate, candidate_distance)
    } else {
        (route.clone(), current_distance)
    }
}

/// Re-optimizes the route of vehicle `index` in place.
///
/// Returns the distance saved (zero if the route was kept).
pub fn tighten_route<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    index: usize,
    tsp: &TspConfig,
    rng: &mut R,
) -> f64 {
    let route = solution.route(index);
    if route.is_empty() {
        return 0.0;
    }
    let old_distance = instance.route_distance(route);
    let (candidate, new_distance) = reoptimize_route(instance, route, tsp, rng);
    if new_distance < old_distance {
        solution.replace_route(index, candidate, old_distance, new_distance);
        old_distance - new_distance
    } else {
        0.0
    }
}

/// Re-optimizes every non-empty route. Returns the total distance saved.
pub fn tighten_all<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    tsp: &TspConfig,
    rng: &mut R,
) -> f64 {
    (0..solution.num_routes())
        .map(|index| tighten_route(instance, solution, index, tsp, rng))
        .sum()
}
