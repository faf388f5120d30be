//! Per-generation population statistics.

use serde::{Deserialize, Serialize};

use super::Individual;

/// Mean, minimum and maximum of one objective component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl ComponentStats {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        (count > 0).then(|| Self {
            avg: sum / count as f64,
            min,
            max,
        })
    }
}

/// Statistics of one generation.
///
/// `avg`, `min` and `max` summarize total distance; `balance` summarizes
/// the balance penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    /// Individuals evaluated during this generation.
    pub nevals: usize,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub balance: ComponentStats,
}

/// Append-only history of [`GenerationStats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    records: Vec<GenerationStats>,
}

impl RunStatistics {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarizes the evaluated members of `population` and appends the
    /// record. Returns `None` (recording nothing) if no member has a
    /// fitness.
    pub fn record(
        &mut self,
        generation: usize,
        nevals: usize,
        population: &[Individual],
    ) -> Option<&GenerationStats> {
        let fitnesses: Vec<_> = population.iter().filter_map(Individual::fitness).collect();
        let distance = ComponentStats::from_values(fitnesses.iter().map(|f| f.total_distance))?;
        let balance = ComponentStats::from_values(fitnesses.iter().map(|f| f.balance_penalty))?;
        self.records.push(GenerationStats {
            generation,
            nevals,
            avg: distance.avg,
            min: distance.min,
            max: distance.max,
            balance,
        });
        self.records.last()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[GenerationStats] {
        &self.records
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&GenerationStats> {
        self.records.last()
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum total distance per generation, for convergence plots.
    pub fn min_curve(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.min).collect()
    }
}
