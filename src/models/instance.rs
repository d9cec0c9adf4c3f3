//! CVRP problem instance.

use tracing::debug;

use super::{Fleet, Location, Route};
use crate::distance::DistanceMatrix;
use crate::error::{Infeasibility, Result};
use crate::geometry::Point;

/// A capacitated vehicle routing instance: depot, customers and fleet.
///
/// Location 0 is the depot; locations `1..n` are customers. The distance
/// matrix is computed once at construction.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::{Fleet, Instance, Route};
///
/// let instance = Instance::new(
///     vec![(0, Point::new(0.0, 0.0)), (3, Point::new(3.0, 4.0))],
///     Fleet::new(1, 10),
/// );
/// assert_eq!(instance.num_customers(), 1);
/// let route = Route::from_customers(&[1]);
/// assert!((instance.route_distance(&route) - 10.0).abs() < 1e-10);
/// assert_eq!(instance.route_load(&route), 3);
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    locations: Vec<Location>,
    fleet: Fleet,
    distances: DistanceMatrix,
}

impl Instance {
    /// Builds an instance from `(demand, point)` pairs, the first being the depot.
    ///
    /// Location ids are the positions in `sites`.
    pub fn new(sites: Vec<(u32, Point)>, fleet: Fleet) -> Self {
        let locations: Vec<Location> = sites
            .into_iter()
            .enumerate()
            .map(|(id, (demand, point))| Location::new(id, demand, point))
            .collect();
        let distances = DistanceMatrix::from_locations(&locations);
        Self {
            locations,
            fleet,
            distances,
        }
    }

    /// All locations (index 0 = depot).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The location with the given id.
    pub fn location(&self, id: usize) -> &Location {
        &self.locations[id]
    }

    /// Fleet configuration.
    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    /// Precomputed pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of locations including the depot.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Number of customers (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    /// Iterates over customers (depot excluded).
    pub fn customers(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.is_customer())
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> u64 {
        self.customers().map(|c| u64::from(c.demand())).sum()
    }

    /// Coordinates of the given location ids, in order.
    pub fn points_of(&self, ids: &[usize]) -> Vec<Point> {
        ids.iter().map(|&id| self.locations[id].point()).collect()
    }

    /// Length of the route, depot to depot.
    pub fn route_distance(&self, route: &Route) -> f64 {
        self.distances.path_length(route.stops())
    }

    /// Sum of customer demands on the route.
    pub fn route_load(&self, route: &Route) -> u64 {
        route
            .customers()
            .iter()
            .map(|&c| u64::from(self.locations[c].demand()))
            .sum()
    }

    /// Recomputes the total distance of a set of routes.
    pub fn total_distance(&self, routes: &[Route]) -> f64 {
        routes.iter().map(|r| self.route_distance(r)).sum()
    }

    /// Checks that the fleet can possibly serve every customer.
    ///
    /// This rejects empty fleets, zero capacity, customers larger than a
    /// vehicle and total demand above total capacity. First-fit packing may
    /// still fail on an instance that passes; the constructor reports that.
    pub fn validate(&self) -> Result<()> {
        if self.fleet.vehicles() == 0 {
            return Err(Infeasibility::NoVehicles.into());
        }
        if self.fleet.capacity() == 0 {
            return Err(Infeasibility::ZeroCapacity.into());
        }
        if let Some(c) = self
            .customers()
            .find(|c| c.demand() > self.fleet.capacity())
        {
            return Err(Infeasibility::CustomerTooLarge {
                customer: c.id(),
                demand: c.demand(),
                capacity: self.fleet.capacity(),
            }
            .into());
        }
        let total_demand = self.total_demand();
        let total_capacity = self.fleet.total_capacity();
        if total_demand > total_capacity {
            return Err(Infeasibility::DemandExceedsCapacity {
                total_demand,
                total_capacity,
            }
            .into());
        }
        debug!(
            customers = self.num_customers(),
            vehicles = self.fleet.vehicles(),
            total_demand,
            total_capacity,
            "instance validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;

    fn square() -> Instance {
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
    fn test_ids_follow_positions() {
        let inst = square();
        for (i, loc) in inst.locations().iter().enumerate() {
            assert_eq!(loc.id(), i);
        }
        assert_eq!(inst.num_locations(), 5);
        assert_eq!(inst.num_customers(), 4);
        assert_eq!(inst.total_demand(), 10);
    }

    #[test]
    fn test_route_metrics() {
        let inst = square();
        let route = Route::from_customers(&[1, 3, 2]);
        // 0->1 (1) + 1->3 (1) + 3->2 (1) + 2->0 (1)
        assert!((inst.route_distance(&route) - 4.0).abs() < 1e-10);
        assert_eq!(inst.route_load(&route), 9);
        assert_eq!(inst.route_distance(&Route::empty()), 0.0);
        assert_eq!(inst.route_load(&Route::empty()), 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(square().validate().is_ok());
    }

    #[test]
    fn test_validate_no_vehicles() {
        let inst = Instance::new(vec![(0, Point::new(0.0, 0.0))], Fleet::new(0, 10));
        assert!(matches!(
            inst.validate(),
            Err(RoutingError::InfeasibleInstance(Infeasibility::NoVehicles))
        ));
    }

    #[test]
    fn test_validate_zero_capacity() {
        let inst = Instance::new(vec![(0, Point::new(0.0, 0.0))], Fleet::new(2, 0));
        assert!(matches!(
            inst.validate(),
            Err(RoutingError::InfeasibleInstance(Infeasibility::ZeroCapacity))
        ));
    }

    #[test]
    fn test_validate_total_demand() {
        let inst = Instance::new(
            vec![
                (0, Point::new(0.0, 0.0)),
                (4, Point::new(1.0, 0.0)),
                (3, Point::new(2.0, 0.0)),
                (3, Point::new(3.0, 0.0)),
            ],
            Fleet::new(2, 4),
        );
        assert!(matches!(
            inst.validate(),
            Err(RoutingError::InfeasibleInstance(
                Infeasibility::DemandExceedsCapacity {
                    total_demand: 10,
                    total_capacity: 8
                }
            ))
        ));
    }

    #[test]
    fn test_validate_customer_too_large() {
        let inst = Instance::new(
            vec![(0, Point::new(0.0, 0.0)), (6, Point::new(1.0, 0.0))],
            Fleet::new(3, 5),
        );
        assert!(matches!(
            inst.validate(),
            Err(RoutingError::InfeasibleInstance(
                Infeasibility::CustomerTooLarge { customer: 1, .. }
            ))
        ));
    }
}
