//! Solution evaluator that recomputes distances and checks invariants.

use crate::models::{Instance, Route, Solution, Violation, ViolationType, DEPOT};

/// Relative tolerance between the cached and recomputed objective.
pub const DISTANCE_TOLERANCE: f64 = 1e-6;

/// Recomputes route metrics from scratch and reports every invariant breach:
/// capacity, customer coverage, depot anchoring, route count and drift of
/// the cached objective.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
/// use u_cvrp::evaluation::SolutionEvaluator;
///
/// let instance = Instance::new(
///     vec![(0, Point::new(0.0, 0.0)), (3, Point::new(3.0, 4.0))],
///     Fleet::new(1, 10),
/// );
/// let solution = Solution::new(vec![Route::from_customers(&[1])], 10.0);
/// let evaluator = SolutionEvaluator::new(&instance);
/// let (distance, violations) = evaluator.evaluate(&solution);
/// assert!((distance - 10.0).abs() < 1e-10);
/// assert!(violations.is_empty());
/// ```
pub struct SolutionEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Checks one route, returning its recomputed distance and load.
    ///
    /// Unknown location ids are reported and excluded from the metrics.
    pub fn evaluate_route(
        &self,
        route_index: usize,
        route: &Route,
    ) -> (f64, u64, Vec<Violation>) {
        let mut violations = Vec::new();
        let stops = route.stops();
        let n = self.instance.num_locations();

        let anchored = stops.first() == Some(&DEPOT)
            && stops.last() == Some(&DEPOT)
            && route.customers().iter().all(|&c| c != DEPOT);
        if !anchored {
            violations.push(Violation::new(ViolationType::NotDepotAnchored {
                route_index,
            }));
        }

        if let Some(&bad) = stops.iter().find(|&&s| s >= n) {
            violations.push(Violation::new(ViolationType::UnknownLocation {
                route_index,
                location: bad,
            }));
            return (0.0, 0, violations);
        }

        let distance = self.instance.route_distance(route);
        let load = self.instance.route_load(route);
        let capacity = self.instance.fleet().capacity();
        if load > u64::from(capacity) {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            }));
        }

        (distance, load, violations)
    }

    /// Evaluates an entire solution, returning the recomputed total distance
    /// and all violations found.
    pub fn evaluate(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let mut total = 0.0;
        let mut all_violations = Vec::new();

        let vehicles = self.instance.fleet().vehicles();
        if solution.num_routes() != vehicles {
            all_violations.push(Violation::new(ViolationType::RouteCountMismatch {
                routes: solution.num_routes(),
                vehicles,
            }));
        }

        let n = self.instance.num_locations();
        let mut visits = vec![0usize; n];
        for (idx, route) in solution.routes().iter().enumerate() {
            let (distance, _, mut violations) = self.evaluate_route(idx, route);
            total += distance;
            all_violations.append(&mut violations);
            for &c in route.customers() {
                if c < n {
                    visits[c] += 1;
                }
            }
        }

        for (customer, &count) in visits.iter().enumerate().skip(1) {
            match count {
                1 => {}
                0 => all_violations.push(Violation::new(ViolationType::MissingCustomer {
                    customer,
                })),
                _ => all_violations.push(Violation::new(ViolationType::DuplicateCustomer {
                    customer,
                    visits: count,
                })),
            }
        }

        let cached = solution.total_distance();
        if !within_tolerance(cached, total) {
            all_violations.push(Violation::new(ViolationType::DistanceMismatch {
                cached,
                actual: total,
            }));
        }

        (total, all_violations)
    }

    /// Returns `true` if the solution has no violations.
    pub fn is_valid(&self, solution: &Solution) -> bool {
        self.evaluate(solution).1.is_empty()
    }
}

fn within_tolerance(a: f64, b: f64) -> bool {
    (a - b).abs() <= DISTANCE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
