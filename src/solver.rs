//! Solver facade: one seeded GA run per call.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, VrpError};
use crate::evaluation::Fitness;
use crate::ga::{
    decode, EvolutionEngine, GaConfig, GenerationStats, HallOfFame, Individual, RunStatistics,
};
use crate::models::{Route, VrpInstance};

/// Everything a run produces.
///
/// `best` is the hall-of-fame entry, which need not be a member of the
/// final `population`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub best: Individual,
    pub best_fitness: Fitness,
    pub population: Vec<Individual>,
    pub stats: RunStatistics,
    pub hall_of_fame: HallOfFame,
}

/// Result view handed to visualization and tuning collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// One route per vehicle, decoded from the best individual.
    pub best_routes: Vec<Route>,
    pub best_fitness: Fitness,
    pub stats_history: Vec<GenerationStats>,
}

/// GA solver bound to a validated routing instance.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::GaConfig;
/// use ga_routing::models::VrpInstance;
/// use ga_routing::VrpSolver;
///
/// let instance = VrpInstance::random(15, 3, (0, 1000), (0, 1000), 42).unwrap();
/// let solver = VrpSolver::new(&instance).unwrap();
/// let config = GaConfig::default().with_population_size(40).with_generations(10);
///
/// let solution = solver.solve(&config).unwrap();
/// let routes = solver.vehicle_routes(&solution.best).unwrap();
/// assert_eq!(routes.len(), 3);
/// assert_eq!(solution.stats.len(), 11);
/// ```
pub struct VrpSolver<'a> {
    instance: &'a VrpInstance,
}

impl<'a> VrpSolver<'a> {
    /// Creates a solver, rejecting instances that cannot be solved.
    pub fn new(instance: &'a VrpInstance) -> Result<Self> {
        instance.validate()?;
        if instance.num_locations() < instance.num_vehicles() {
            warn!(
                locations = instance.num_locations(),
                vehicles = instance.num_vehicles(),
                "fewer locations than vehicles, some routes will be empty"
            );
        }
        Ok(Self { instance })
    }

    /// Runs the GA to completion.
    ///
    /// The random stream is seeded once from `config.seed`; the whole run
    /// is a deterministic function of the instance and the configuration.
    pub fn solve(&self, config: &GaConfig) -> Result<Solution> {
        config.validate()?;
        info!(
            locations = self.instance.num_locations(),
            vehicles = self.instance.num_vehicles(),
            pop_size = config.pop_size,
            ngen = config.ngen,
            cxpb = config.cxpb,
            mutpb = config.mutpb,
            tournsize = config.tournsize,
            seed = config.seed,
            "starting GA run"
        );

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut engine = EvolutionEngine::new(self.instance, config.clone(), rng)?;
        engine.run()?;
        let (population, hall_of_fame, stats) = engine.into_parts();

        let (best, best_fitness) = hall_of_fame
            .best()
            .and_then(|b| b.fitness().map(|f| (b.clone(), f)))
            .ok_or(VrpError::NoSolution)?;
        info!(
            total_distance = best_fitness.total_distance,
            balance_penalty = best_fitness.balance_penalty,
            "GA run finished"
        );

        Ok(Solution {
            best,
            best_fitness,
            population,
            stats,
            hall_of_fame,
        })
    }

    /// Decodes an individual into one route per vehicle.
    pub fn vehicle_routes(&self, individual: &Individual) -> Result<Vec<Route>> {
        decode(
            individual.genes(),
            self.instance.depot(),
            self.instance.locations(),
            self.instance.num_vehicles(),
        )
    }

    /// Builds the [`SolveResult`] view of a solution.
    pub fn result(&self, solution: &Solution) -> Result<SolveResult> {
        Ok(SolveResult {
            best_routes: self.vehicle_routes(&solution.best)?,
            best_fitness: solution.best_fitness,
            stats_history: solution.stats.records().to_vec(),
        })
    }
}

/// Solves `instance` with `config` and returns the result view.
///
/// # Errors
///
/// [`VrpError::EmptyInstance`] for an instance without locations,
/// [`VrpError::InvalidConfig`] for any out-of-range parameter. Both are
/// reported before the run starts.
pub fn solve(instance: &VrpInstance, config: &GaConfig) -> Result<SolveResult> {
    let solver = VrpSolver::new(instance)?;
    let solution = solver.solve(config)?;
    solver.result(&solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_generations(15)
            .with_seed(11)
    }

    #[test]
    fn test_solve_returns_consistent_result() {
        let inst = VrpInstance::random(12, 3, (0, 500), (0, 500), 9).expect("valid");
        let result = solve(&inst, &small_config()).expect("solved");
        assert_eq!(result.best_routes.len(), 3);
        assert_eq!(result.stats_history.len(), 16);

        let served: usize = result.best_routes.iter().map(Route::len).sum();
        assert_eq!(served, 12);

        let recomputed: f64 = result.best_routes.iter().map(Route::distance).sum();
        assert!((recomputed - result.best_fitness.total_distance).abs() < 1e-9);
    }

    #[test]
    fn test_best_is_hall_of_fame() {
        let inst = VrpInstance::random(10, 2, (0, 100), (0, 100), 1).expect("valid");
        let solver = VrpSolver::new(&inst).expect("valid");
        let solution = solver.solve(&small_config()).expect("solved");
        assert_eq!(solution.hall_of_fame.best(), Some(&solution.best));
        assert_eq!(solution.population.len(), 30);

        let best = solution.best_fitness;
        assert_eq!(solution.best.fitness(), Some(best));
        let last_min = solution.stats.last().map(|r| r.min).expect("recorded");
        assert!(best.total_distance <= last_min);
    }

    #[test]
    fn test_solve_square_no_evolution() {
        let inst = VrpInstance::new(
            vec![
                Location::new(0.0, 0.0),
                Location::new(10.0, 0.0),
                Location::new(10.0, 10.0),
                Location::new(0.0, 10.0),
            ],
            Location::new(0.0, 0.0),
            1,
        );
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(0);
        let result = solve(&inst, &config).expect("solved");
        // Visiting the square's corners in perimeter order is optimal.
        assert!(result.best_fitness.total_distance >= 40.0 - 1e-10);
        assert_eq!(result.best_fitness.balance_penalty, 0.0);
        assert_eq!(result.stats_history.len(), 1);
    }

    #[test]
    fn test_solve_rejects_before_running() {
        let empty = VrpInstance::new(vec![], Location::new(0.0, 0.0), 2);
        assert_eq!(
            solve(&empty, &small_config()).map(|_| ()),
            Err(VrpError::EmptyInstance)
        );

        let inst = VrpInstance::random(5, 1, (0, 10), (0, 10), 0).expect("valid");
        let bad = small_config().with_mutpb(2.0);
        assert!(matches!(solve(&inst, &bad), Err(VrpError::InvalidConfig(_))));
    }

    #[test]
    fn test_vehicle_routes_shape() {
        let inst = VrpInstance::random(2, 4, (0, 10), (0, 10), 0).expect("valid");
        let solver = VrpSolver::new(&inst).expect("valid");
        let routes = solver
            .vehicle_routes(&Individual::new(vec![1, 0]))
            .expect("valid");
        assert_eq!(routes.len(), 4);
        assert!(routes[2].is_empty() && routes[3].is_empty());
        assert!(solver.vehicle_routes(&Individual::new(vec![0])).is_err());
    }
}
