//! Single-slot hall-of-fame.

use serde::{Deserialize, Serialize};

use super::Individual;

/// Keeps a copy of the best individual seen across all generations.
///
/// The entry is replaced only by a strictly better fitness, so among equal
/// candidates the first one observed is kept. The copy is independent of
/// any population and survives generational replacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HallOfFame {
    best: Option<Individual>,
}

impl HallOfFame {
    /// Creates an empty hall-of-fame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers every evaluated individual of `population`.
    ///
    /// Returns `true` if the entry changed.
    pub fn update(&mut self, population: &[Individual]) -> bool {
        let mut improved = false;
        for candidate in population {
            let Some(fitness) = candidate.fitness() else {
                continue;
            };
            let replace = match self.best.as_ref().and_then(Individual::fitness) {
                Some(current) => fitness.is_better_than(&current),
                None => true,
            };
            if replace {
                self.best = Some(candidate.clone());
                improved = true;
            }
        }
        improved
    }

    /// The best individual so far, if any was offered.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.best.is_none()
    }
}
