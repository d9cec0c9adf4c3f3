//! Nearest-neighbor tour construction.
//!
//! Starts at point 0 and repeatedly appends the unvisited point closest to
//! the last one. Ties go to the lower input index.
//!
//! # Complexity
//!
//! O(n²).

use crate::geometry::Point;

/// Builds a nearest-neighbor visiting order starting at point 0.
///
/// # Examples
///
/// ```
/// use u_cvrp::geometry::Point;
/// use u_cvrp::tsp::nearest_neighbor_order;
///
/// let pts = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// assert_eq!(nearest_neighbor_order(&pts), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_order(points: &[Point]) -> Vec<usize> {
    let n = points.len();
    let mut order = Vec::with_capacity(n);
    if n == 0 {
        return order;
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    order.push(0);
    let mut last = 0;

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = points[last].distance(point);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        last = next;
    }

    order
}
