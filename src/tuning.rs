//! Parameter tuning drivers.
//!
//! Random search and grid search both treat the solver as a black box:
//! every trial is an independent seeded [`VrpSolver::solve`] call, compared
//! by the total distance of its best individual. Trials run on rayon's
//! pool; each is deterministic in its own seed, so the report does not
//! depend on scheduling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{check_probability, Result, VrpError};
use crate::ga::{GaConfig, Individual};
use crate::models::VrpInstance;
use crate::solver::VrpSolver;

/// Inclusive sampling ranges for [`random_search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRanges {
    pub pop_size: (usize, usize),
    pub cxpb: (f64, f64),
    pub mutpb: (f64, f64),
    pub tournsize: (usize, usize),
}

impl Default for ParamRanges {
    fn default() -> Self {
        Self {
            pop_size: (200, 800),
            cxpb: (0.5, 0.9),
            mutpb: (0.05, 0.25),
            tournsize: (2, 4),
        }
    }
}

impl ParamRanges {
    /// Checks every bound before anything is sampled.
    ///
    /// Probability bounds must lie in [0, 1], tournaments need at least one
    /// entrant, and the smallest population must host the largest
    /// tournament so that every sampled combination is runnable.
    fn validate(&self) -> Result<()> {
        for (name, (lo, hi)) in [("cxpb", self.cxpb), ("mutpb", self.mutpb)] {
            check_probability(name, lo)?;
            check_probability(name, hi)?;
            if lo > hi {
                return Err(VrpError::InvalidConfig(format!(
                    "{name} range must be ordered, got ({lo}, {hi})"
                )));
            }
        }
        if self.pop_size.0 > self.pop_size.1 || self.tournsize.0 > self.tournsize.1 {
            return Err(VrpError::InvalidConfig(format!(
                "size ranges must be ordered, got pop_size={:?} tournsize={:?}",
                self.pop_size, self.tournsize
            )));
        }
        if self.tournsize.0 < 1 {
            return Err(VrpError::InvalidConfig(
                "tournsize range must start at 1 or more".into(),
            ));
        }
        if self.pop_size.0 < self.tournsize.1 {
            return Err(VrpError::InvalidConfig(format!(
                "smallest pop_size ({}) is below largest tournsize ({})",
                self.pop_size.0, self.tournsize.1
            )));
        }
        Ok(())
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialParams {
        TrialParams {
            pop_size: rng.random_range(self.pop_size.0..=self.pop_size.1),
            cxpb: rng.random_range(self.cxpb.0..=self.cxpb.1),
            mutpb: rng.random_range(self.mutpb.0..=self.mutpb.1),
            tournsize: rng.random_range(self.tournsize.0..=self.tournsize.1),
        }
    }
}

/// Candidate values for [`grid_search`]; every combination is tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    pub pop_size: Vec<usize>,
    pub cxpb: Vec<f64>,
    pub mutpb: Vec<f64>,
    pub tournsize: Vec<usize>,
}

impl Default for ParamGrid {
    fn default() -> Self {
        Self {
            pop_size: vec![200, 400, 600],
            cxpb: vec![0.6, 0.8],
            mutpb: vec![0.1, 0.2],
            tournsize: vec![2, 3, 4],
        }
    }
}

impl ParamGrid {
    /// All combinations, varying `tournsize` fastest.
    pub fn combinations(&self) -> Vec<TrialParams> {
        let mut combos = Vec::new();
        for &pop_size in &self.pop_size {
            for &cxpb in &self.cxpb {
                for &mutpb in &self.mutpb {
                    for &tournsize in &self.tournsize {
                        combos.push(TrialParams {
                            pop_size,
                            cxpb,
                            mutpb,
                            tournsize,
                        });
                    }
                }
            }
        }
        combos
    }
}

/// The tuned subset of [`GaConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialParams {
    pub pop_size: usize,
    pub cxpb: f64,
    pub mutpb: f64,
    pub tournsize: usize,
}

impl TrialParams {
    fn config(&self, ngen: usize, seed: u64) -> GaConfig {
        GaConfig::default()
            .with_population_size(self.pop_size)
            .with_cxpb(self.cxpb)
            .with_mutpb(self.mutpb)
            .with_tournament_size(self.tournsize)
            .with_generations(ngen)
            .with_seed(seed)
    }
}

/// Outcome of one tuning trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 1-based trial number.
    pub trial: usize,
    pub params: TrialParams,
    pub seed: u64,
    /// Total distance of the trial's best individual.
    pub distance: f64,
    pub best: Individual,
}

/// Summary of a tuning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningReport {
    /// The trial with the smallest distance; the earliest wins ties.
    pub best: TrialRecord,
    /// Every trial in trial order.
    pub trials: Vec<TrialRecord>,
}

/// Samples `n_trials` configurations uniformly from `ranges`.
///
/// Parameters are drawn from a stream seeded with `seed_base`; trial `i`
/// (0-based) runs with seed `seed_base + i`.
pub fn random_search(
    instance: &VrpInstance,
    n_trials: usize,
    ranges: &ParamRanges,
    ngen: usize,
    seed_base: u64,
) -> Result<TuningReport> {
    ranges.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed_base);
    let params: Vec<TrialParams> = (0..n_trials).map(|_| ranges.sample(&mut rng)).collect();
    info!(trials = n_trials, ngen, "starting random search");
    run_trials(instance, &params, ngen, seed_base)
}

/// Tries every combination of `grid`; combination `i` runs with seed
/// `seed_base + i`.
pub fn grid_search(
    instance: &VrpInstance,
    grid: &ParamGrid,
    ngen: usize,
    seed_base: u64,
) -> Result<TuningReport> {
    let params = grid.combinations();
    info!(trials = params.len(), ngen, "starting grid search");
    run_trials(instance, &params, ngen, seed_base)
}

fn run_trials(
    instance: &VrpInstance,
    params: &[TrialParams],
    ngen: usize,
    seed_base: u64,
) -> Result<TuningReport> {
    let solver = VrpSolver::new(instance)?;

    let trials = params
        .par_iter()
        .enumerate()
        .map(|(i, p)| -> Result<TrialRecord> {
            let seed = seed_base.wrapping_add(i as u64);
            let solution = solver.solve(&p.config(ngen, seed))?;
            let distance = solution.best_fitness.total_distance;
            info!(trial = i + 1, distance, "trial finished");
            Ok(TrialRecord {
                trial: i + 1,
                params: *p,
                seed,
                distance,
                best: solution.best,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let Some((first, rest)) = trials.split_first() else {
        return Err(VrpError::InvalidConfig(
            "tuning needs at least one trial".into(),
        ));
    };
    let best = rest
        .iter()
        .fold(first, |best, t| if t.distance < best.distance { t } else { best })
        .clone();

    info!(
        distance = best.distance,
        pop_size = best.params.pop_size,
        cxpb = best.params.cxpb,
        mutpb = best.params.mutpb,
        tournsize = best.params.tournsize,
        "tuning finished"
    );
    Ok(TuningReport { best, trials })
}
