//! # u-cvrp
//!
//! Capacitated vehicle routing: a fixed fleet of identical vehicles leaves
//! from and returns to a single depot, serving every customer exactly once
//! without exceeding vehicle capacity, at minimum total travel distance.
//!
//! The pipeline is a first-fit decreasing construction followed by an
//! improvement loop that re-optimizes routes as single-vehicle TSP instances
//! (nearest neighbor + simulated-annealing 2-opt) and moves customers
//! between vehicles (relocate, swap).
//!
//! ## Modules
//!
//! - [`geometry`] — Planar points and Euclidean distance
//! - [`distance`] — Precomputed distance matrix
//! - [`models`] — Domain model types (Location, Fleet, Instance, Route, Solution)
//! - [`evaluation`] — Solution invariant checking
//! - [`annealing`] — Acceptance criteria and cooling schedules
//! - [`tsp`] — Single-vehicle tour engine
//! - [`constructive`] — First-fit decreasing construction
//! - [`local_search`] — Route moves (tighten, relocate, swap)
//! - [`improvement`] — Composite improvement loop
//! - [`solver`] — End-to-end pipeline
//! - [`config`] — Serde configuration
//! - [`io`] — Instance parsing, solution output, best-known store
//! - [`logging`] — `tracing` subscriber setup for binaries
//!
//! # Examples
//!
//! ```
//! use u_cvrp::config::SolverConfig;
//! use u_cvrp::evaluation::SolutionEvaluator;
//! use u_cvrp::improvement::ImprovementConfig;
//! use u_cvrp::io::parse_instance;
//! use u_cvrp::solver::solve_seeded;
//!
//! let instance = parse_instance("5 2 5\n0 0 0\n3 1 0\n4 0 1\n2 1 1\n1 2 2\n").unwrap();
//! let config = SolverConfig::default()
//!     .with_improvement(ImprovementConfig::default().with_trials(100));
//! let outcome = solve_seeded(&instance, &config).unwrap();
//! assert!(SolutionEvaluator::new(&instance).is_valid(&outcome.solution));
//! ```

pub mod annealing;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod improvement;
pub mod io;
pub mod local_search;
pub mod logging;
pub mod models;
pub mod solver;
pub mod tsp;
