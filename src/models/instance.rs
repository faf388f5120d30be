//! Routing instance definition.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::{Result, VrpError};

/// Default depot position used by [`VrpInstance::random`].
pub const DEFAULT_DEPOT: Location = Location::new(550.0, 470.0);

/// A multi-vehicle routing instance: customer locations, a depot, and a
/// fleet size.
///
/// Every vehicle leaves from and returns to the depot. Customers are
/// identified by their index in `locations`.
///
/// # Examples
///
/// ```
/// use ga_routing::models::{Location, VrpInstance};
///
/// let instance = VrpInstance::new(
///     vec![Location::new(10.0, 0.0), Location::new(0.0, 10.0)],
///     Location::new(0.0, 0.0),
///     2,
/// );
/// assert_eq!(instance.num_locations(), 2);
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrpInstance {
    locations: Vec<Location>,
    depot: Location,
    num_vehicles: usize,
}

impl VrpInstance {
    /// Creates a new instance.
    pub fn new(locations: Vec<Location>, depot: Location, num_vehicles: usize) -> Self {
        Self {
            locations,
            depot,
            num_vehicles,
        }
    }

    /// Generates an instance with integer-valued coordinates drawn
    /// uniformly from the inclusive ranges, depot at [`DEFAULT_DEPOT`].
    ///
    /// The draw uses its own seeded stream and never touches solver state.
    pub fn random(
        num_locations: usize,
        num_vehicles: usize,
        x_range: (i64, i64),
        y_range: (i64, i64),
        seed: u64,
    ) -> Result<Self> {
        if x_range.0 > x_range.1 || y_range.0 > y_range.1 {
            return Err(VrpError::InvalidConfig(format!(
                "coordinate ranges must be ordered, got x={x_range:?} y={y_range:?}"
            )));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let locations = (0..num_locations)
            .map(|_| {
                let x = rng.random_range(x_range.0..=x_range.1);
                let y = rng.random_range(y_range.0..=y_range.1);
                Location::new(x as f64, y as f64)
            })
            .collect();
        Ok(Self::new(locations, DEFAULT_DEPOT, num_vehicles))
    }

    /// Customer locations (depot excluded).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The depot every route starts and ends at.
    pub fn depot(&self) -> Location {
        self.depot
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Number of customer locations.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Checks that the instance can be solved.
    ///
    /// Fewer locations than vehicles is accepted; the surplus routes stay
    /// empty. Coordinates must be finite and spread little enough that the
    /// longest possible plan still has a finite length: every leg is at
    /// most twice the farthest depot distance, and a plan has at most
    /// `num_locations + num_vehicles` legs.
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            return Err(VrpError::EmptyInstance);
        }
        if self.num_vehicles < 1 {
            return Err(VrpError::InvalidConfig(
                "num_vehicles must be at least 1".into(),
            ));
        }
        if !self.depot.is_finite() {
            return Err(VrpError::InvalidConfig(
                "depot coordinates must be finite".into(),
            ));
        }
        if let Some(idx) = self.locations.iter().position(|l| !l.is_finite()) {
            return Err(VrpError::InvalidConfig(format!(
                "location {idx} has non-finite coordinates"
            )));
        }

        let farthest = self
            .locations
            .iter()
            .map(|l| self.depot.distance_to(l))
            .fold(0.0, f64::max);
        let legs = (self.locations.len() + self.num_vehicles) as f64;
        if !(2.0 * farthest * legs).is_finite() {
            return Err(VrpError::InvalidConfig(format!(
                "coordinates too far apart: depot distance {farthest:e} overflows route lengths"
            )));
        }
        Ok(())
    }
}
