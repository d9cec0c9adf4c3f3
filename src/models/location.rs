//! Depot and customer locations.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identifier of the depot; every route starts and ends here.
pub const DEPOT: usize = 0;

/// A location (depot or customer) in a CVRP instance.
///
/// Location 0 is the depot. Locations are immutable once parsed.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::models::Location;
///
/// let depot = Location::new(0, 0, Point::new(35.0, 35.0));
/// assert!(!depot.is_customer());
///
/// let c = Location::new(1, 10, Point::new(41.0, 49.0));
/// assert!(c.is_customer());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    demand: u32,
    point: Point,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: usize, demand: u32, point: Point) -> Self {
        Self { id, demand, point }
    }

    /// Location ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Units to deliver at this location.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Coordinates.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns `true` for every location except the depot.
    pub fn is_customer(&self) -> bool {
        self.id != DEPOT
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.point.distance(&other.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let c = Location::new(3, 7, Point::new(10.0, 20.0));
        assert_eq!(c.id(), 3);
        assert_eq!(c.demand(), 7);
        assert_eq!(c.point(), Point::new(10.0, 20.0));
        assert!(c.is_customer());
    }

    #[test]
    fn test_depot_is_not_customer() {
        let d = Location::new(DEPOT, 0, Point::new(1.0, 1.0));
        assert!(!d.is_customer());
    }

    #[test]
    fn test_distance_to() {
        let a = Location::new(DEPOT, 0, Point::new(0.0, 0.0));
        let b = Location::new(1, 0, Point::new(3.0, 4.0));
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
