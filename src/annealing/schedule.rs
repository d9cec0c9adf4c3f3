//! Cooling schedules for the 2-opt annealer.

use serde::{Deserialize, Serialize};

/// Default initial temperature per point of the tour.
pub const DEFAULT_INITIAL_PER_POINT: f64 = 500.0;

/// Default decay constant.
pub const DEFAULT_ALPHA: f64 = 0.994;

/// How the temperature evolves as moves are accepted.
///
/// Both schedules start at `T0 = n * initial_per_point` for an `n`-point tour
/// and only change when a move is accepted; rejected moves leave the
/// temperature untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoolingSchedule {
    /// `T = T0 * alpha / k` after the k-th accepted move.
    ///
    /// Non-monotone in wall-clock time: the temperature depends only on the
    /// accepted-move count.
    AcceptedMoves {
        /// Initial temperature per tour point.
        initial_per_point: f64,
        /// Decay constant in `(0, 1)`.
        alpha: f64,
    },
    /// `T = T * alpha` after every accepted move.
    Geometric {
        /// Initial temperature per tour point.
        initial_per_point: f64,
        /// Decay constant in `(0, 1)`.
        alpha: f64,
    },
}

impl CoolingSchedule {
    /// Initial temperature for an `n`-point tour.
    pub fn initial_temperature(&self, n: usize) -> f64 {
        let per_point = match *self {
            Self::AcceptedMoves {
                initial_per_point, ..
            }
            | Self::Geometric {
                initial_per_point, ..
            } => initial_per_point,
        };
        n as f64 * per_point
    }

    /// Starts tracking the temperature for an `n`-point tour.
    pub fn start(&self, n: usize) -> Temperature {
        let initial = self.initial_temperature(n);
        Temperature {
            schedule: *self,
            initial,
            current: initial,
            accepted: 0,
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        Self::AcceptedMoves {
            initial_per_point: DEFAULT_INITIAL_PER_POINT,
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Running temperature of one annealing run.
///
/// # Examples
///
/// ```
/// use u_cvrp::annealing::CoolingSchedule;
///
/// let mut t = CoolingSchedule::default().start(4);
/// assert_eq!(t.value(), 2000.0);
/// t.on_accept();
/// t.on_accept();
/// assert!((t.value() - 2000.0 * 0.994 / 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Temperature {
    schedule: CoolingSchedule,
    initial: f64,
    current: f64,
    accepted: u64,
}

impl Temperature {
    /// Current temperature.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Number of accepted moves so far.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Records an accepted move and cools accordingly.
    pub fn on_accept(&mut self) {
        self.accepted += 1;
        self.current = match self.schedule {
            CoolingSchedule::AcceptedMoves { alpha, .. } => {
                self.initial * alpha / self.accepted as f64
            }
            CoolingSchedule::Geometric { alpha, .. } => self.current * alpha,
        };
    }
}
