//! Solver configuration.
//!
//! [`SolverConfig`] nests [`ImprovementConfig`] and, through it,
//! [`TspConfig`](crate::tsp::TspConfig). Every level uses `#[serde(default)]`
//! so a JSON file only needs the fields it overrides:
//!
//! ```json
//! { "seed": 7, "improvement": { "trials": 5000, "tsp": { "time_limit_ms": 5 } } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::improvement::ImprovementConfig;

/// Top-level configuration of one solve.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::SolverConfig;
///
/// let config = SolverConfig::from_json_str(r#"{ "seed": 7, "improvement": { "trials": 10 } }"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.improvement.trials, 10);
/// assert_eq!(config.improvement.tsp.time_limit_ms, 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Seed of the solver's random number generator.
    pub seed: u64,
    /// Improvement loop settings.
    pub improvement: ImprovementConfig,
}

impl SolverConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the improvement loop configuration.
    pub fn with_improvement(mut self, improvement: ImprovementConfig) -> Self {
        self.improvement = improvement;
        self
    }

    /// Decodes a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Config`] if the text is not a valid configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RoutingError::Config(e.to_string()))
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::Io`] if the file cannot be read and
    /// [`RoutingError::Config`] if its content does not decode.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RoutingError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Encodes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RoutingError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annealing::CoolingSchedule;

    #[test]
    fn test_empty_object_is_default() {
        let config = SolverConfig::from_json_str("{}").expect("valid");
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_schedule_is_tagged() {
        let text = r#"{
            "improvement": {
                "tsp": {
                    "max_iterations": null,
                    "schedule": { "kind": "geometric", "initial_per_point": 100.0, "alpha": 0.99 }
                }
            }
        }"#;
        let config = SolverConfig::from_json_str(text).expect("valid");
        assert_eq!(config.improvement.tsp.max_iterations, None);
        assert_eq!(
            config.improvement.tsp.schedule,
            CoolingSchedule::Geometric {
                initial_per_point: 100.0,
                alpha: 0.99
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = SolverConfig::default().with_seed(99);
        let text = config.to_json_string().expect("encodes");
        assert_eq!(SolverConfig::from_json_str(&text).expect("decodes"), config);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SolverConfig::from_json_str(r#"{ "seed": "seven" }"#).expect_err("invalid");
        assert!(matches!(err, RoutingError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SolverConfig::from_json_file("/nonexistent/solver.json").expect_err("missing");
        assert!(matches!(err, RoutingError::Io { .. }));
    }
}
