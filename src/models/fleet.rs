//! Homogeneous fleet description.

use serde::{Deserialize, Serialize};

/// A fleet of identical vehicles based at the depot.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Fleet;
///
/// let fleet = Fleet::new(3, 100);
/// assert_eq!(fleet.vehicles(), 3);
/// assert_eq!(fleet.capacity(), 100);
/// assert_eq!(fleet.total_capacity(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: usize,
    capacity: u32,
}

impl Fleet {
    /// Creates a fleet of `vehicles` vehicles, each carrying at most `capacity`.
    pub fn new(vehicles: usize, capacity: u32) -> Self {
        Self { vehicles, capacity }
    }

    /// Number of vehicles (and therefore routes).
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Maximum load per vehicle.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Load the whole fleet can carry, saturating at `u64::MAX`.
    pub fn total_capacity(&self) -> u64 {
        u64::try_from(self.vehicles)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(self.capacity))
    }
}
