//! Fitness evaluation over round-robin vehicle assignment.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::ga::decode::check_permutation;
use crate::models::VrpInstance;

use super::Fitness;

/// Scores permutations against a routing instance.
///
/// Position `j` of the permutation is served by vehicle `j % num_vehicles`;
/// each vehicle drives depot → its stops in permutation order → depot.
/// Distances come from a matrix built once per evaluator, so evaluation is
/// a pure function of the permutation and safe to run from many threads.
///
/// # Examples
///
/// ```
/// use ga_routing::models::{Location, VrpInstance};
/// use ga_routing::evaluation::FitnessEvaluator;
///
/// let instance = VrpInstance::new(
///     vec![
///         Location::new(0.0, 0.0),
///         Location::new(10.0, 0.0),
///         Location::new(10.0, 10.0),
///         Location::new(0.0, 10.0),
///     ],
///     Location::new(0.0, 0.0),
///     1,
/// );
/// let evaluator = FitnessEvaluator::new(&instance);
/// let fitness = evaluator.evaluate(&[0, 1, 2, 3]).unwrap();
/// assert!((fitness.total_distance - 40.0).abs() < 1e-10);
/// assert_eq!(fitness.balance_penalty, 0.0);
/// ```
pub struct FitnessEvaluator<'a> {
    instance: &'a VrpInstance,
    distances: DistanceMatrix,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator, precomputing the instance's distance matrix.
    pub fn new(instance: &'a VrpInstance) -> Self {
        Self {
            instance,
            distances: DistanceMatrix::from_instance(instance),
        }
    }

    /// Length of each vehicle's closed route, indexed by vehicle.
    ///
    /// A vehicle with no stops has length zero.
    pub fn vehicle_distances(&self, genes: &[usize]) -> Result<Vec<f64>> {
        let num_vehicles = self.instance.num_vehicles();
        check_permutation(genes, self.instance.num_locations(), num_vehicles)?;

        let mut distances = Vec::with_capacity(num_vehicles);
        for vehicle in 0..num_vehicles {
            let mut total = 0.0;
            let mut prev: Option<usize> = None;
            for &loc in genes.iter().skip(vehicle).step_by(num_vehicles) {
                total += match prev {
                    None => self.distances.depot_to(loc),
                    Some(p) => self.distances.between(p, loc),
                };
                prev = Some(loc);
            }
            if let Some(last) = prev {
                total += self.distances.depot_to(last);
            }
            distances.push(total);
        }
        Ok(distances)
    }

    /// Computes `(total_distance, balance_penalty)` for a permutation.
    pub fn evaluate(&self, genes: &[usize]) -> Result<Fitness> {
        let distances = self.vehicle_distances(genes)?;
        let total: f64 = distances.iter().sum();
        Ok(Fitness::new(total, population_std_dev(&distances)))
    }
}

/// Standard deviation with divisor `n` (not `n - 1`).
///
/// Deviations are scaled by the largest one before squaring, so the result
/// stays finite whenever the inputs and their mean are.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|v| v / n).sum::<f64>();
    let scale = values
        .iter()
        .map(|v| (v - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let d = (v - mean) / scale;
            d * d
        })
        .sum::<f64>()
        / n;
    scale * variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VrpError;
    use crate::models::Location;

    fn square(num_vehicles: usize) -> VrpInstance {
        VrpInstance::new(
            vec![
                Location::new(0.0, 0.0),
                Location::new(10.0, 0.0),
                Location::new(10.0, 10.0),
                Location::new(0.0, 10.0),
            ],
            Location::new(0.0, 0.0),
            num_vehicles,
        )
    }

    #[test]
    fn test_single_vehicle_square() {
        let inst = square(1);
        let eval = FitnessEvaluator::new(&inst);
        let f = eval.evaluate(&[0, 1, 2, 3]).expect("valid");
        // depot→(0,0)→(10,0)→(10,10)→(0,10)→depot = 0+10+10+10+10
        assert!((f.total_distance - 40.0).abs() < 1e-10);
        assert_eq!(f.balance_penalty, 0.0);
    }

    #[test]
    fn test_two_vehicles_by_position() {
        let inst = square(2);
        let eval = FitnessEvaluator::new(&inst);
        let d = eval.vehicle_distances(&[0, 1, 2, 3]).expect("valid");
        // vehicle 0: depot→(0,0)→(10,10)→depot
        let diag = 200.0_f64.sqrt();
        assert!((d[0] - 2.0 * diag).abs() < 1e-10);
        // vehicle 1: depot→(10,0)→(0,10)→depot
        assert!((d[1] - (10.0 + diag + 10.0)).abs() < 1e-10);

        let f = eval.evaluate(&[0, 1, 2, 3]).expect("valid");
        assert!((f.total_distance - (d[0] + d[1])).abs() < 1e-10);
        assert!((f.balance_penalty - (d[0] - d[1]).abs() / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_routes_cost_zero() {
        let inst = VrpInstance::new(vec![Location::new(3.0, 4.0)], Location::new(0.0, 0.0), 3);
        let eval = FitnessEvaluator::new(&inst);
        let d = eval.vehicle_distances(&[0]).expect("valid");
        assert_eq!(d.len(), 3);
        assert!((d[0] - 10.0).abs() < 1e-10);
        assert_eq!(d[1], 0.0);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn test_overlapping_points_zero() {
        let p = Location::new(1.0, 1.0);
        let inst = VrpInstance::new(vec![p, p], p, 2);
        let eval = FitnessEvaluator::new(&inst);
        let f = eval.evaluate(&[1, 0]).expect("valid");
        assert_eq!(f.total_distance, 0.0);
        assert_eq!(f.balance_penalty, 0.0);
    }

    #[test]
    fn test_rejects_invalid_permutation() {
        let inst = square(2);
        let eval = FitnessEvaluator::new(&inst);
        assert!(matches!(
            eval.evaluate(&[0, 1, 2]),
            Err(VrpError::InvalidConfig(_))
        ));
        assert!(matches!(
            eval.evaluate(&[0, 1, 2, 4]),
            Err(VrpError::InvalidConfig(_))
        ));
        assert!(matches!(
            eval.evaluate(&[0, 1, 1, 3]),
            Err(VrpError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_huge_coordinates_stay_finite() {
        let inst = VrpInstance::new(
            vec![Location::new(1e200, 0.0), Location::new(-1e200, 0.0)],
            Location::new(0.0, 0.0),
            2,
        );
        assert!(inst.validate().is_ok());
        let eval = FitnessEvaluator::new(&inst);
        let f = eval.evaluate(&[0, 1]).expect("valid");
        assert!((f.total_distance - 4e200).abs() < 1e186);
        assert_eq!(f.balance_penalty, 0.0);

        let inst = VrpInstance::new(
            vec![Location::new(1e200, 0.0), Location::new(1.0, 0.0)],
            Location::new(0.0, 0.0),
            2,
        );
        let f = FitnessEvaluator::new(&inst).evaluate(&[0, 1]).expect("valid");
        assert!(f.total_distance.is_finite());
        assert!(f.balance_penalty.is_finite());
        assert!(f.balance_penalty > 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[5.0]), 0.0);
        // mean 5, deviations ±3 → std 3 (sample std would be ~4.24)
        assert!((population_std_dev(&[2.0, 8.0]) - 3.0).abs() < 1e-10);
        assert!((population_std_dev(&[4.0, 4.0, 4.0]) - 0.0).abs() < 1e-10);
        assert!(population_std_dev(&[1e300, -1e300]).is_finite());
    }
}
