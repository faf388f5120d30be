//! Permutation chromosome for multi-vehicle routing.
//!
//! An individual encodes a complete solution as a single permutation of
//! all location indices. The [`decode`](super::decode()) step assigns
//! permutation positions to vehicles round-robin.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::evaluation::Fitness;

/// A candidate solution: a permutation of `0..num_locations` plus its
/// cached fitness.
///
/// The fitness is absent until evaluated and is cleared whenever the
/// permutation is handed out mutably.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::Individual;
/// use ga_routing::evaluation::Fitness;
///
/// let mut ind = Individual::new(vec![2, 0, 1]);
/// assert!(ind.fitness().is_none());
///
/// ind.set_fitness(Fitness::new(12.0, 0.5));
/// assert!(ind.is_evaluated());
///
/// ind.genes_mut().swap(0, 2);
/// assert_eq!(ind.genes(), &[1, 0, 2]);
/// assert!(!ind.is_evaluated());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    genes: Vec<usize>,
    fitness: Option<Fitness>,
}

impl Individual {
    /// Creates an unevaluated individual from a permutation.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates a uniformly random permutation of `0..num_locations`.
    pub fn random<R: Rng + ?Sized>(num_locations: usize, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..num_locations).collect();
        genes.shuffle(rng);
        Self::new(genes)
    }

    /// Returns the permutation.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Returns the permutation for in-place editing and drops the cached
    /// fitness.
    pub fn genes_mut(&mut self) -> &mut [usize] {
        self.fitness = None;
        &mut self.genes
    }

    /// Cached fitness, if evaluated since the last change.
    pub fn fitness(&self) -> Option<Fitness> {
        self.fitness
    }

    /// Attaches an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = Some(fitness);
    }

    /// Drops the cached fitness.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Returns `true` if the cached fitness is valid.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Number of genes (locations).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_individual_new() {
        let ind = Individual::new(vec![1, 2, 0]);
        assert_eq!(ind.genes(), &[1, 2, 0]);
        assert_eq!(ind.len(), 3);
        assert!(!ind.is_empty());
        assert!(ind.fitness().is_none());
    }

    #[test]
    fn test_individual_random_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ind = Individual::random(25, &mut rng);
        let mut sorted = ind.genes().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_individual_random_seeded() {
        let a = Individual::random(30, &mut ChaCha8Rng::seed_from_u64(7));
        let b = Individual::random(30, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_individual_invalidate() {
        let mut ind = Individual::new(vec![0, 1]);
        ind.set_fitness(Fitness::new(1.0, 0.0));
        assert_eq!(ind.fitness(), Some(Fitness::new(1.0, 0.0)));
        ind.invalidate();
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_individual_clone_keeps_fitness() {
        let mut ind = Individual::new(vec![0, 1, 2]);
        ind.set_fitness(Fitness::new(10.0, 2.0));
        let cloned = ind.clone();
        assert_eq!(cloned.genes(), &[0, 1, 2]);
        assert_eq!(cloned.fitness(), Some(Fitness::new(10.0, 2.0)));
    }
}
