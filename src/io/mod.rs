//! Reading instances and writing solutions.
//!
//! - [`parse_instance`] — whitespace-delimited instance text
//! - [`format_solution`] — solution text (objective line plus one line per vehicle)
//! - [`BestKnownStore`] — directory of best solutions keyed by instance size

mod format;
mod parser;
mod store;

pub use format::format_solution;
pub use parser::{parse_instance, read_instance, MAX_VEHICLES};
pub use store::BestKnownStore;
