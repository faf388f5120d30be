//! Genetic algorithm for multi-vehicle routing.
//!
//! - [`Individual`] — Permutation chromosome with a cached fitness
//! - [`decode()`] — Round-robin decoder from permutation to vehicle routes
//! - [`operators`] — PMX crossover, shuffle-index mutation, tournament selection
//! - [`EvolutionEngine`] — Generational loop with a single-slot hall-of-fame
//! - [`GaConfig`] — Run parameters

mod chromosome;
mod config;
pub(crate) mod decode;
mod engine;
mod hall_of_fame;
pub mod operators;
mod stats;

pub use chromosome::Individual;
pub use config::GaConfig;
pub use decode::{assign_vehicles, decode};
pub use engine::{EngineState, EvolutionEngine};
pub use hall_of_fame::HallOfFame;
pub use operators::{pmx_crossover, select_tournament, shuffle_indexes, vary_and};
pub use stats::{ComponentStats, GenerationStats, RunStatistics};
