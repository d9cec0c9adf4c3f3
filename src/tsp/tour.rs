//! Cyclic tour over a point set.

use crate::geometry::Point;

/// A cyclic visiting order over a point set and its total length.
///
/// `order` is a permutation of `0..points.len()`; the edge from the last
/// position back to the first is included in `length`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from an order and its precomputed length.
    pub fn new(order: Vec<usize>, length: f64) -> Self {
        Self { order, length }
    }

    /// Creates a tour and computes its length.
    pub fn from_order(points: &[Point], order: Vec<usize>) -> Self {
        let length = tour_length(points, &order);
        Self { order, length }
    }

    /// Visiting order (indices into the input points).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cyclic length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the tour, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Rotates the cycle so that `anchor` comes first. No-op if absent.
    pub fn rotate_to(&mut self, anchor: usize) {
        if let Some(pos) = self.order.iter().position(|&i| i == anchor) {
            self.order.rotate_left(pos);
        }
    }
}

/// Cyclic length of `order` over `points`. Zero for fewer than two points.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::tsp::tour_length;
///
/// let pts = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
/// assert!((tour_length(&pts, &[0, 1, 2]) - 12.0).abs() < 1e-10);
/// ```
pub fn tour_length(points: &[Point], order: &[usize]) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[order[i]].distance(&points[order[(i + 1) % n]]))
        .sum()
}
