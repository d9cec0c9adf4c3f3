//! Move acceptance criteria.

use rand::Rng;

/// Decides whether a candidate replaces the current solution.
///
/// Costs are minimized. Implementations may consult `rng`; deterministic
/// criteria ignore it.
pub trait AcceptanceCriterion {
    /// Returns `true` if a move from `current_cost` to `candidate_cost`
    /// should be taken at the given temperature.
    fn accept<R: Rng>(
        &self,
        current_cost: f64,
        candidate_cost: f64,
        temperature: f64,
        rng: &mut R,
    ) -> bool;
}

/// Metropolis rule as a pure function of its inputs.
///
/// Improving moves are always accepted. Otherwise the move is accepted when
/// `draw < exp((current - candidate) / temperature)`, with `draw` uniform in
/// `[0, 1)`. A non-positive or NaN temperature rejects every non-improving
/// move.
///
/// # Examples
///
/// ```
/// use u_cvrp::annealing::metropolis_accepts;
///
/// assert!(metropolis_accepts(10.0, 9.0, 1.0, 0.999));
/// // exp(-1) ~= 0.368
/// assert!(metropolis_accepts(10.0, 11.0, 1.0, 0.3));
/// assert!(!metropolis_accepts(10.0, 11.0, 1.0, 0.4));
/// assert!(!metropolis_accepts(10.0, 11.0, 0.0, 0.0));
/// ```
pub fn metropolis_accepts(
    current_cost: f64,
    candidate_cost: f64,
    temperature: f64,
    draw: f64,
) -> bool {
    let gain = current_cost - candidate_cost;
    if gain > 0.0 {
        return true;
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return false;
    }
    draw < (gain / temperature).exp()
}

/// Simulated-annealing acceptance ([`metropolis_accepts`] with a fresh draw).
///
/// The uniform draw is taken only for non-improving moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Metropolis;

impl AcceptanceCriterion for Metropolis {
    fn accept<R: Rng>(
        &self,
        current_cost: f64,
        candidate_cost: f64,
        temperature: f64,
        rng: &mut R,
    ) -> bool {
        if candidate_cost < current_cost {
            return true;
        }
        let draw: f64 = rng.random();
        metropolis_accepts(current_cost, candidate_cost, temperature, draw)
    }
}

/// Accepts only strictly improving moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictImprovement;

impl AcceptanceCriterion for StrictImprovement {
    fn accept<R: Rng>(
        &self,
        current_cost: f64,
        candidate_cost: f64,
        _temperature: f64,
        _rng: &mut R,
    ) -> bool {
        candidate_cost < current_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_improving_always_accepted() {
        assert!(metropolis_accepts(5.0, 4.0, 0.0, 0.99));
        assert!(metropolis_accepts(5.0, 4.0, f64::NAN, 0.99));
    }

    #[test]
    fn test_equal_cost_accepted_when_hot() {
        // exp(0) = 1 > any draw in [0, 1)
        assert!(metropolis_accepts(5.0, 5.0, 1.0, 0.999_999));
    }

    #[test]
    fn test_worsening_threshold() {
        let t = 2.0;
        let p = (-1.0f64 / t).exp();
        assert!(metropolis_accepts(1.0, 2.0, t, p - 1e-9));
        assert!(!metropolis_accepts(1.0, 2.0, t, p + 1e-9));
    }

    #[test]
    fn test_cold_rejects_worsening() {
        assert!(!metropolis_accepts(1.0, 1.5, 0.0, 0.0));
        assert!(!metropolis_accepts(1.0, 1.5, -3.0, 0.0));
        assert!(!metropolis_accepts(1.0, 1.5, f64::NAN, 0.0));
        assert!(metropolis_accepts(1.0, 1.5, f64::INFINITY, 0.5));
    }

    #[test]
    fn test_metropolis_hot_accepts_most() {
        let mut rng = StdRng::seed_from_u64(42);
        let accepted = (0..1000)
            .filter(|_| Metropolis.accept(10.0, 10.001, 1e6, &mut rng))
            .count();
        assert!(accepted > 990);
    }

    #[test]
    fn test_metropolis_cold_rejects_most() {
        let mut rng = StdRng::seed_from_u64(42);
        let accepted = (0..1000)
            .filter(|_| Metropolis.accept(10.0, 20.0, 0.1, &mut rng))
            .count();
        assert_eq!(accepted, 0);
    }

    #[test]
    fn test_strict_improvement() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(StrictImprovement.accept(3.0, 2.0, 100.0, &mut rng));
        assert!(!StrictImprovement.accept(3.0, 3.0, 100.0, &mut rng));
        assert!(!StrictImprovement.accept(3.0, 4.0, 100.0, &mut rng));
    }
}
