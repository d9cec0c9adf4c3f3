//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Reasons an instance cannot be served by its fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// The fleet has no vehicles.
    #[error("fleet has no vehicles")]
    NoVehicles,
    /// Vehicles have zero capacity.
    #[error("vehicle capacity is zero")]
    ZeroCapacity,
    /// Total demand is larger than the whole fleet can carry.
    #[error("total demand {total_demand} exceeds fleet capacity {total_capacity}")]
    DemandExceedsCapacity {
        /// Sum of all customer demands.
        total_demand: u64,
        /// Vehicle count times capacity.
        total_capacity: u64,
    },
    /// A single customer does not fit into an empty vehicle.
    #[error("customer {customer} demands {demand}, more than vehicle capacity {capacity}")]
    CustomerTooLarge {
        /// Location id.
        customer: usize,
        /// Its demand.
        demand: u32,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// First-fit packing left customers without a vehicle.
    #[error("no vehicle has room for customers {customers:?}")]
    Unplaced {
        /// Location ids that could not be placed.
        customers: Vec<usize>,
    },
}

/// Errors produced while reading, solving or persisting CVRP instances.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The instance text could not be parsed.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number of the offending token.
        line: usize,
        /// What was wrong.
        reason: String,
    },

    /// The fleet cannot serve every customer.
    #[error("infeasible instance: {0}")]
    InfeasibleInstance(#[from] Infeasibility),

    /// Filesystem access failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RoutingError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for [`RoutingError::InfeasibleInstance`].
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleInstance(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_demand_exceeds() {
        let err: RoutingError = Infeasibility::DemandExceedsCapacity {
            total_demand: 10,
            total_capacity: 8,
        }
        .into();
        assert!(err.is_infeasible());
        assert_eq!(
            err.to_string(),
            "infeasible instance: total demand 10 exceeds fleet capacity 8"
        );
    }

    #[test]
    fn test_display_malformed() {
        let err = RoutingError::malformed(3, "expected demand");
        assert!(!err.is_infeasible());
        assert_eq!(err.to_string(), "malformed input at line 3: expected demand");
    }
}
