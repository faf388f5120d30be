//! GA configuration.

use serde::{Deserialize, Serialize};

use crate::error::{check_probability, Result, VrpError};

/// Configuration for the generational GA.
///
/// Defaults: population 300, crossover probability 0.7, mutation
/// probability 0.2, 300 generations, tournaments of 3, seed 42, and a
/// per-position shuffle probability of 0.05.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(20)
///     .with_tournament_size(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub pop_size: usize,

    /// Probability that a pair of parents is crossed.
    pub cxpb: f64,

    /// Probability that an offspring goes through the shuffle pass.
    pub mutpb: f64,

    /// Number of generations after the initial population.
    pub ngen: usize,

    /// Individuals sampled per tournament.
    pub tournsize: usize,

    /// Seed of the single random stream driving the run.
    pub seed: u64,

    /// Per-position swap probability inside the shuffle pass.
    pub indpb: f64,

    /// Log every generation record at `info` instead of `debug`.
    pub verbose: bool,

    /// Evaluate fitness in parallel using rayon.
    ///
    /// Evaluation draws no randomness, so the result is identical to a
    /// sequential run.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            pop_size: 300,
            cxpb: 0.7,
            mutpb: 0.2,
            ngen: 300,
            tournsize: 3,
            seed: 42,
            indpb: 0.05,
            verbose: false,
            parallel: false,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    pub fn with_cxpb(mut self, p: f64) -> Self {
        self.cxpb = p;
        self
    }

    pub fn with_mutpb(mut self, p: f64) -> Self {
        self.mutpb = p;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.ngen = n;
        self
    }

    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournsize = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_indpb(mut self, p: f64) -> Self {
        self.indpb = p;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tournsize < 1 {
            return Err(VrpError::InvalidConfig(
                "tournsize must be at least 1".into(),
            ));
        }
        if self.pop_size < self.tournsize {
            return Err(VrpError::InvalidConfig(format!(
                "pop_size ({}) must be at least tournsize ({})",
                self.pop_size, self.tournsize
            )));
        }
        check_probability("cxpb", self.cxpb)?;
        check_probability("mutpb", self.mutpb)?;
        check_probability("indpb", self.indpb)?;
        Ok(())
    }
}
