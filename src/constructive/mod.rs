//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`greedy_first_fit`] — First-fit decreasing bin packing of customers
//!   into vehicles, O(n log n + n·V)

mod greedy;

pub use greedy::greedy_first_fit;
