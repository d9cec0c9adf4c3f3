//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides the core abstractions: locations with demands, a homogeneous
//! fleet, depot-anchored routes, solutions with a cached objective, and the
//! instance that ties them together.

mod fleet;
mod instance;
mod location;
mod route;
mod solution;

pub use fleet::Fleet;
pub use instance::Instance;
pub use location::{Location, DEPOT};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
