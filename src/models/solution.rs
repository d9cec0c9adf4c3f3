//! Solution and violation types.

use serde::Serialize;

use super::Route;

/// A type of invariant breach found in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route load exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load carried by the route.
        load: u64,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// A customer is not visited by any route.
    MissingCustomer {
        /// Location id.
        customer: usize,
    },
    /// A customer is visited more than once.
    DuplicateCustomer {
        /// Location id.
        customer: usize,
        /// Number of visits found.
        visits: usize,
    },
    /// A route does not start and end at the depot, or visits it in between.
    NotDepotAnchored {
        /// Route index.
        route_index: usize,
    },
    /// A route references a location id outside the instance.
    UnknownLocation {
        /// Route index.
        route_index: usize,
        /// Offending id.
        location: usize,
    },
    /// Number of routes differs from the number of vehicles.
    RouteCountMismatch {
        /// Routes in the solution.
        routes: usize,
        /// Vehicles in the fleet.
        vehicles: usize,
    },
    /// Cached objective drifted from the recomputed one.
    DistanceMismatch {
        /// Value stored in the solution.
        cached: f64,
        /// Value recomputed from the routes.
        actual: f64,
    },
}

/// An invariant breach in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// One route per vehicle plus the cached total distance.
///
/// Routes are replaced wholesale; [`Solution::replace_route`] adjusts the
/// cached distance in the same call so the two cannot drift apart.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::from_customers(&[1]), Route::empty()], 10.0);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 1);
/// assert!(!sol.is_optimal());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    total_distance: f64,
    is_optimal: bool,
}

impl Solution {
    /// Creates a solution from routes and their summed distance.
    pub fn new(routes: Vec<Route>, total_distance: f64) -> Self {
        Self {
            routes,
            total_distance,
            is_optimal: false,
        }
    }

    /// Returns the routes, one per vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the route of vehicle `index`.
    pub fn route(&self, index: usize) -> &Route {
        &self.routes[index]
    }

    /// Number of routes (equal to the vehicle count).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Cached total distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Whether optimality was proven. Always `false` for this solver.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.num_customers()).sum()
    }

    /// Replaces the route of vehicle `index`, shifting the cached distance by
    /// `new_distance - old_distance`.
    pub fn replace_route(
        &mut self,
        index: usize,
        route: Route,
        old_distance: f64,
        new_distance: f64,
    ) {
        self.routes[index] = route;
        self.total_distance += new_distance - old_distance;
    }
}
