//! Simulated-annealing 2-opt improvement.
//!
//! # Algorithm
//!
//! Each iteration draws two positions `e1 < e2` uniformly and evaluates the
//! reversal of `tour[e1..=e2]`. With `B = pred(e1)`, `C = tour[e1]`,
//! `E = tour[e2]`, `F = succ(e2)` (cyclic):
//!
//! ```text
//! gain = d(B,C) + d(E,F) - d(B,E) - d(C,F)
//! ```
//!
//! Positive gain shortens the tour. Moves are accepted by the Metropolis rule
//! and the temperature follows a [`CoolingSchedule`]. The best tour seen is
//! kept; its length is tracked from the gains rather than recomputed.
//!
//! # Complexity
//!
//! O(1) per evaluated move, O(n) per accepted move (segment reversal).
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use std::time::Instant;

use rand::Rng;
use tracing::trace;

use super::Tour;
use crate::annealing::{AcceptanceCriterion, CoolingSchedule, Metropolis};
use crate::geometry::Point;

/// Stopping rule for one annealing run: a wall-clock deadline and an
/// optional iteration cap, whichever comes first.
#[derive(Debug, Clone, Copy)]
pub struct TspBudget {
    /// Wall-clock deadline, checked at the top of every iteration.
    pub deadline: Instant,
    /// Maximum number of drawn moves, counting skipped no-op draws.
    pub max_iterations: Option<u64>,
}

impl TspBudget {
    fn exhausted(&self, iterations: u64) -> bool {
        if self.max_iterations.is_some_and(|max| iterations >= max) {
            return true;
        }
        Instant::now() >= self.deadline
    }
}

/// Length change from reversing `tour[e1..=e2]`, positive when shorter.
///
/// Requires `e1 < e2` and `(e1, e2) != (0, n - 1)`.
pub fn two_opt_gain(points: &[Point], tour: &[usize], e1: usize, e2: usize) -> f64 {
    let n = tour.len();
    let b = tour[(e1 + n - 1) % n];
    let c = tour[e1];
    let e = tour[e2];
    let f = tour[(e2 + 1) % n];
    let d = |i: usize, j: usize| points[i].distance(&points[j]);
    d(b, c) + d(e, f) - d(b, e) - d(c, f)
}

/// Anneals `initial` with random 2-opt moves until `budget` runs out.
///
/// Returns the best tour observed. Tours with fewer than four points are
/// returned unchanged since no reversal can alter a cycle of three.
pub fn anneal_two_opt<R: Rng>(
    points: &[Point],
    initial: Tour,
    schedule: &CoolingSchedule,
    budget: TspBudget,
    rng: &mut R,
) -> Tour {
    let n = initial.len();
    if n < 4 {
        return initial;
    }

    let acceptance = Metropolis;
    let mut temperature = schedule.start(n);
    let mut current_length = initial.length();
    let mut best_length = current_length;
    let mut current = initial.into_order();
    let mut best = current.clone();
    let mut iterations: u64 = 0;

    while !budget.exhausted(iterations) {
        iterations += 1;

        let mut e1 = rng.random_range(0..n);
        let mut e2 = rng.random_range(0..n);
        if e1 > e2 {
            std::mem::swap(&mut e1, &mut e2);
        }
        if e1 == e2 || (e1 == 0 && e2 == n - 1) {
            continue;
        }

        let gain = two_opt_gain(points, &current, e1, e2);
        if acceptance.accept(current_length, current_length - gain, temperature.value(), rng) {
            current[e1..=e2].reverse();
            current_length -= gain;
            temperature.on_accept();
            if current_length < best_length {
                best.clone_from(&current);
                best_length = current_length;
                trace!(iterations, length = best_length, "new best tour");
            }
        }
    }

    trace!(
        iterations,
        accepted = temperature.accepted(),
        length = best_length,
        "2-opt annealing finished"
    );
    Tour::new(best, best_length)
}
