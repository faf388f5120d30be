//! # ga-routing
//!
//! Multi-vehicle routing with a genetic algorithm. A candidate solution is
//! a permutation of all customer locations; permutation position `j` is
//! served by vehicle `j % num_vehicles`. Fitness minimizes total distance
//! first and the spread of per-vehicle distances second.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, VrpInstance)
//! - [`distance`] — Euclidean metric and distance matrix
//! - [`evaluation`] — Two-component fitness and its evaluator
//! - [`ga`] — Chromosome, decoder, operators, and the evolution engine
//! - [`solver`] — Seeded single-call solver facade
//! - [`tuning`] — Random and grid search over GA parameters
//!
//! ## Example
//!
//! ```
//! use ga_routing::ga::GaConfig;
//! use ga_routing::models::VrpInstance;
//!
//! let instance = VrpInstance::random(20, 3, (0, 1000), (0, 1000), 42).unwrap();
//! let config = GaConfig::default().with_population_size(50).with_generations(20);
//!
//! let result = ga_routing::solve(&instance, &config).unwrap();
//! assert_eq!(result.best_routes.len(), 3);
//! assert_eq!(result.stats_history.len(), 21);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod solver;
pub mod tuning;

pub use error::{Result, VrpError};
pub use solver::{solve, Solution, SolveResult, VrpSolver};
