//! Local search operators for improving CVRP solutions.
//!
//! - [`tighten_all`] / [`tighten_route`] — Intra-route re-optimization through the TSP engine
//! - [`try_relocate`] — Inter-route customer relocation
//! - [`try_swap`] — Inter-route customer swap
//!
//! Every operator applies a move only if it keeps all routes within capacity
//! and strictly lowers the combined distance of the routes it touches.

mod exchange;
mod relocate;
mod tighten;

pub use exchange::{swap_customers, try_swap};
pub use relocate::{relocate_customer, try_relocate};
pub use tighten::{reoptimize_route, tighten_all, tighten_route};

/// Result of attempting one inter-route move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The move was degenerate (same vehicle, empty route, bad position).
    Skipped,
    /// The move would exceed a vehicle's capacity.
    Infeasible,
    /// The move is feasible but does not shorten the routes.
    Rejected,
    /// The move was applied and saved `gain` distance.
    Accepted { gain: f64 },
}

impl MoveOutcome {
    /// Returns `true` if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
