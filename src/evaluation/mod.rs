//! Fitness type and evaluator for decoded multi-vehicle routes.

mod evaluator;
mod fitness;

pub use evaluator::FitnessEvaluator;
pub use fitness::Fitness;
