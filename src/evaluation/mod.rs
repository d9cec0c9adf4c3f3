//! Solution checking.
//!
//! Recomputes distances and loads from scratch so tests and callers can
//! confirm that incremental bookkeeping never drifts.

mod evaluator;

pub use evaluator::{SolutionEvaluator, DISTANCE_TOLERANCE};
