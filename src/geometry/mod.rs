//! Planar geometry used by every distance computation in the crate.

mod point;

pub use point::Point;
