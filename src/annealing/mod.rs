//! Simulated-annealing building blocks.
//!
//! - [`AcceptanceCriterion`] — accept/reject decision given old and new cost
//! - [`Metropolis`] / [`metropolis_accepts`] — probabilistic acceptance
//! - [`StrictImprovement`] — accepts only strictly better candidates
//! - [`CoolingSchedule`] — temperature evolution driven by accepted moves

mod acceptance;
mod schedule;

pub use acceptance::{metropolis_accepts, AcceptanceCriterion, Metropolis, StrictImprovement};
pub use schedule::{CoolingSchedule, Temperature, DEFAULT_ALPHA, DEFAULT_INITIAL_PER_POINT};
