//! Two-component minimization objective.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Fitness of an individual: total distance and balance penalty, both
/// minimized.
///
/// Comparison is lexicographic: `total_distance` first, `balance_penalty`
/// breaks ties. Both components carry equal weight, so the raw values are
/// compared directly even though one is a distance and the other a standard
/// deviation of distances.
///
/// # Examples
///
/// ```
/// use ga_routing::evaluation::Fitness;
///
/// let a = Fitness::new(100.0, 5.0);
/// let b = Fitness::new(100.0, 7.0);
/// let c = Fitness::new(90.0, 50.0);
/// assert!(a.is_better_than(&b));
/// assert!(c.is_better_than(&a));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fitness {
    /// Sum of all vehicle route lengths.
    pub total_distance: f64,
    /// Population standard deviation of the per-vehicle route lengths.
    pub balance_penalty: f64,
}

impl Fitness {
    /// Creates a fitness value.
    pub fn new(total_distance: f64, balance_penalty: f64) -> Self {
        Self {
            total_distance,
            balance_penalty,
        }
    }

    /// Total order used by selection and the hall-of-fame.
    ///
    /// `Less` means `self` is the better (smaller) objective.
    pub fn compare(&self, other: &Fitness) -> Ordering {
        self.total_distance
            .total_cmp(&other.total_distance)
            .then_with(|| self.balance_penalty.total_cmp(&other.balance_penalty))
    }

    /// Returns `true` if `self` strictly beats `other`.
    pub fn is_better_than(&self, other: &Fitness) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// The pair as a tuple, `(total_distance, balance_penalty)`.
    pub fn values(&self) -> (f64, f64) {
        (self.total_distance, self.balance_penalty)
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_dominates() {
        let a = Fitness::new(10.0, 100.0);
        let b = Fitness::new(11.0, 0.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert!(a < b);
    }

    #[test]
    fn test_balance_breaks_ties() {
        let a = Fitness::new(10.0, 1.0);
        let b = Fitness::new(10.0, 2.0);
        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
    }

    #[test]
    fn test_equal_not_better() {
        let a = Fitness::new(10.0, 1.0);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert!(!a.is_better_than(&a));
    }

    #[test]
    fn test_eq_agrees_with_ordering() {
        let pos = Fitness::new(0.0, 1.0);
        let neg = Fitness::new(-0.0, 1.0);
        assert_eq!(pos == neg, pos.partial_cmp(&neg) == Some(Ordering::Equal));

        let nan = Fitness::new(f64::NAN, 0.0);
        assert_eq!(nan == nan, nan.partial_cmp(&nan) == Some(Ordering::Equal));

        let a = Fitness::new(5.0, 2.0);
        assert_eq!(a, Fitness::new(5.0, 2.0));
        assert_ne!(a, Fitness::new(5.0, 2.5));
    }

    #[test]
    fn test_values() {
        assert_eq!(Fitness::new(3.0, 4.0).values(), (3.0, 4.0));
    }
}
