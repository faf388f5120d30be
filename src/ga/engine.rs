//! Generational evolution engine.
//!
//! The engine owns the population and drives it through
//! `Initialized → Running → Terminated`:
//!
//! 1. evaluate every individual without a cached fitness
//! 2. offer the population to the hall-of-fame
//! 3. record generation statistics
//! 4. tournament-select a mating pool of `pop_size`
//! 5. cross and mutate the pool ([`vary_and`])
//! 6. replace the population with the pool
//!
//! Steps 1-3 run once on the initial population (generation 0) and once
//! after every replacement, so a run of `ngen` generations records
//! `ngen + 1` statistics entries. Fitness evaluation draws no randomness
//! and may run on rayon's pool; everything that touches the generator is
//! sequential.

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::evaluation::FitnessEvaluator;
use crate::models::VrpInstance;

use super::operators::{select_tournament, vary_and};
use super::{GaConfig, HallOfFame, Individual, RunStatistics};

/// Lifecycle of an [`EvolutionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Random population created, nothing evaluated yet.
    Initialized,
    /// `generation` is the last generation fully evaluated and recorded.
    Running { generation: usize },
    /// All generations done; the engine no longer changes.
    Terminated,
}

/// Owns one GA run over a routing instance.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::{EngineState, EvolutionEngine, GaConfig};
/// use ga_routing::models::VrpInstance;
/// use rand::SeedableRng;
///
/// let instance = VrpInstance::random(10, 2, (0, 100), (0, 100), 1).unwrap();
/// let config = GaConfig::default().with_population_size(20).with_generations(5);
/// let rng = rand_chacha::ChaCha8Rng::seed_from_u64(config.seed);
///
/// let mut engine = EvolutionEngine::new(&instance, config, rng).unwrap();
/// engine.run().unwrap();
/// assert_eq!(engine.state(), EngineState::Terminated);
/// assert_eq!(engine.stats().len(), 6);
/// ```
pub struct EvolutionEngine<'a, R: Rng> {
    evaluator: FitnessEvaluator<'a>,
    config: GaConfig,
    rng: R,
    population: Vec<Individual>,
    hall_of_fame: HallOfFame,
    stats: RunStatistics,
    state: EngineState,
}

impl<'a, R: Rng> EvolutionEngine<'a, R> {
    /// Validates inputs and creates `pop_size` random permutations.
    ///
    /// Fails before drawing any random number if the instance or the
    /// configuration is invalid.
    pub fn new(instance: &'a VrpInstance, config: GaConfig, mut rng: R) -> Result<Self> {
        instance.validate()?;
        config.validate()?;

        let num_locations = instance.num_locations();
        let population = (0..config.pop_size)
            .map(|_| Individual::random(num_locations, &mut rng))
            .collect();

        Ok(Self {
            evaluator: FitnessEvaluator::new(instance),
            config,
            rng,
            population,
            hall_of_fame: HallOfFame::new(),
            stats: RunStatistics::new(),
            state: EngineState::Initialized,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual seen so far.
    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Statistics recorded so far.
    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    /// Advances one generation (or evaluates the initial population).
    ///
    /// A terminated engine is left untouched.
    pub fn step(&mut self) -> Result<EngineState> {
        match self.state {
            EngineState::Initialized => {
                let nevals = self.evaluate_invalid()?;
                self.observe(0, nevals);
                self.state = self.after(0);
            }
            EngineState::Running { generation } => {
                let chosen = select_tournament(
                    &self.population,
                    self.config.pop_size,
                    self.config.tournsize,
                    &mut self.rng,
                )?;
                let mut offspring: Vec<Individual> = chosen
                    .into_iter()
                    .map(|idx| self.population[idx].clone())
                    .collect();
                vary_and(
                    &mut offspring,
                    self.config.cxpb,
                    self.config.mutpb,
                    self.config.indpb,
                    &mut self.rng,
                );
                self.population = offspring;

                let next = generation + 1;
                let nevals = self.evaluate_invalid()?;
                self.observe(next, nevals);
                self.state = self.after(next);
            }
            EngineState::Terminated => {}
        }
        Ok(self.state)
    }

    /// Steps until terminated.
    pub fn run(&mut self) -> Result<()> {
        while self.state != EngineState::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Consumes the engine, returning the population, hall-of-fame and
    /// statistics.
    pub fn into_parts(self) -> (Vec<Individual>, HallOfFame, RunStatistics) {
        (self.population, self.hall_of_fame, self.stats)
    }

    fn after(&self, generation: usize) -> EngineState {
        if generation >= self.config.ngen {
            EngineState::Terminated
        } else {
            EngineState::Running { generation }
        }
    }

    /// Evaluates individuals lacking a fitness; returns how many.
    fn evaluate_invalid(&mut self) -> Result<usize> {
        let evaluator = &self.evaluator;
        let nevals = self
            .population
            .iter()
            .filter(|ind| !ind.is_evaluated())
            .count();

        if self.config.parallel {
            self.population
                .par_iter_mut()
                .filter(|ind| !ind.is_evaluated())
                .try_for_each(|ind| -> Result<()> {
                    let fitness = evaluator.evaluate(ind.genes())?;
                    ind.set_fitness(fitness);
                    Ok(())
                })?;
        } else {
            for ind in self.population.iter_mut().filter(|ind| !ind.is_evaluated()) {
                let fitness = evaluator.evaluate(ind.genes())?;
                ind.set_fitness(fitness);
            }
        }
        Ok(nevals)
    }

    fn observe(&mut self, generation: usize, nevals: usize) {
        if self.hall_of_fame.update(&self.population) {
            if let Some(fitness) = self.hall_of_fame.best().and_then(Individual::fitness) {
                trace!(
                    generation,
                    total_distance = fitness.total_distance,
                    balance_penalty = fitness.balance_penalty,
                    "new best"
                );
            }
        }

        let Some(rec) = self.stats.record(generation, nevals, &self.population) else {
            return;
        };
        if self.config.verbose {
            info!(
                generation = rec.generation,
                nevals = rec.nevals,
                avg = rec.avg,
                min = rec.min,
                max = rec.max,
                "generation"
            );
        } else {
            debug!(
                generation = rec.generation,
                nevals = rec.nevals,
                avg = rec.avg,
                min = rec.min,
                max = rec.max,
                "generation"
            );
        }
    }
}
