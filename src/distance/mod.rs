//! Distance matrix over instance locations.

mod matrix;

pub use matrix::DistanceMatrix;
