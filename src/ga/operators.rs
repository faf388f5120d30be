//! Genetic operators over permutation chromosomes.
//!
//! - [`pmx_crossover`] — partially-matched crossover
//! - [`shuffle_indexes`] — per-position swap mutation
//! - [`select_tournament`] — tournament selection with replacement
//! - [`vary_and`] — crossover then mutation over a mating pool
//!
//! Every operator draws from the generator it is handed and nothing else,
//! so a fixed seed replays the exact same sequence of decisions.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::{Result, VrpError};

use super::Individual;

/// Partially-matched crossover (PMX), applied in place.
///
/// Two cut points delimit a segment. For every position in the segment the
/// parents exchange values, and each parent moves the displaced value to
/// where the incoming value used to sit, so both children stay valid
/// permutations. Parents shorter than two genes are left unchanged.
///
/// # Panics
///
/// Panics if the parents are not permutations of `0..n` of the same length.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::pmx_crossover;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
/// let mut a = vec![0, 1, 2, 3, 4, 5];
/// let mut b = vec![5, 3, 1, 0, 4, 2];
/// pmx_crossover(&mut a, &mut b, &mut rng);
///
/// let mut sorted = a.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn pmx_crossover<R: Rng + ?Sized>(ind1: &mut [usize], ind2: &mut [usize], rng: &mut R) {
    assert_eq!(ind1.len(), ind2.len(), "PMX parents must have equal length");
    let size = ind1.len();
    if size < 2 {
        return;
    }

    // Position of each value in each parent.
    let mut pos1 = vec![0usize; size];
    let mut pos2 = vec![0usize; size];
    for i in 0..size {
        pos1[ind1[i]] = i;
        pos2[ind2[i]] = i;
    }

    let mut start = rng.random_range(0..=size);
    let mut end = rng.random_range(0..size);
    if end >= start {
        end += 1;
    } else {
        std::mem::swap(&mut start, &mut end);
    }

    for i in start..end {
        let v1 = ind1[i];
        let v2 = ind2[i];

        ind1[i] = v2;
        ind1[pos1[v2]] = v1;
        ind2[i] = v1;
        ind2[pos2[v1]] = v2;

        pos1.swap(v1, v2);
        pos2.swap(v1, v2);
    }
}

/// Shuffle-index mutation, applied in place.
///
/// Each position is, with probability `indpb`, swapped with a uniformly
/// chosen different position. Only swaps are performed, so a permutation
/// stays a permutation.
pub fn shuffle_indexes<R: Rng + ?Sized>(genes: &mut [usize], indpb: f64, rng: &mut R) {
    let size = genes.len();
    if size < 2 {
        return;
    }
    for i in 0..size {
        if rng.random::<f64>() < indpb {
            let mut j = rng.random_range(0..size - 1);
            if j >= i {
                j += 1;
            }
            genes.swap(i, j);
        }
    }
}

fn compare_individuals(a: &Individual, b: &Individual) -> Ordering {
    match (a.fitness(), b.fitness()) {
        (Some(fa), Some(fb)) => fa.compare(&fb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Tournament selection with replacement.
///
/// Runs `k` independent tournaments. Each samples `tournsize` members
/// uniformly with replacement and keeps the one with the best fitness;
/// among equals the first sampled wins. Unevaluated individuals lose to
/// evaluated ones. Returns indices into `population`.
///
/// # Errors
///
/// [`VrpError::InvalidConfig`] if `tournsize` is zero or larger than the
/// population.
pub fn select_tournament<R: Rng + ?Sized>(
    population: &[Individual],
    k: usize,
    tournsize: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if tournsize < 1 {
        return Err(VrpError::InvalidConfig(
            "tournsize must be at least 1".into(),
        ));
    }
    if population.len() < tournsize {
        return Err(VrpError::InvalidConfig(format!(
            "population of {} cannot host tournaments of size {}",
            population.len(),
            tournsize
        )));
    }

    let mut chosen = Vec::with_capacity(k);
    for _ in 0..k {
        let mut winner = rng.random_range(0..population.len());
        for _ in 1..tournsize {
            let aspirant = rng.random_range(0..population.len());
            if compare_individuals(&population[aspirant], &population[winner]) == Ordering::Less {
                winner = aspirant;
            }
        }
        chosen.push(winner);
    }
    Ok(chosen)
}

/// Applies crossover and mutation to a mating pool in place.
///
/// Consecutive pairs `(0, 1), (2, 3), ...` are crossed with probability
/// `cxpb`; with an odd pool the last member is never crossed. Afterwards
/// each member is mutated with probability `mutpb`. Any changed member has
/// its fitness dropped.
pub fn vary_and<R: Rng + ?Sized>(
    offspring: &mut [Individual],
    cxpb: f64,
    mutpb: f64,
    indpb: f64,
    rng: &mut R,
) {
    for pair in offspring.chunks_exact_mut(2) {
        if rng.random::<f64>() < cxpb {
            let (left, right) = pair.split_at_mut(1);
            pmx_crossover(left[0].genes_mut(), right[0].genes_mut(), rng);
        }
    }

    for ind in offspring.iter_mut() {
        if rng.random::<f64>() < mutpb {
            shuffle_indexes(ind.genes_mut(), indpb, rng);
        }
    }
}
