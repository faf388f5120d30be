//! Vehicle route type.

use serde::{Deserialize, Serialize};

use super::Location;

/// An ordered sequence of stops assigned to a single vehicle.
///
/// A route starts and ends at the depot. The depot is not stored in
/// `stops`; [`points`](Route::points) expands the full closed path.
///
/// # Examples
///
/// ```
/// use ga_routing::models::{Location, Route};
///
/// let depot = Location::new(0.0, 0.0);
/// let route = Route::new(0, depot, vec![1], vec![Location::new(3.0, 4.0)]);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.points().len(), 3);
/// assert!((route.distance() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    depot: Location,
    location_ids: Vec<usize>,
    stops: Vec<Location>,
}

impl Route {
    /// Creates a route for the given vehicle.
    ///
    /// `location_ids[k]` is the instance index of `stops[k]`.
    pub fn new(
        vehicle_id: usize,
        depot: Location,
        location_ids: Vec<usize>,
        stops: Vec<Location>,
    ) -> Self {
        debug_assert_eq!(location_ids.len(), stops.len());
        Self {
            vehicle_id,
            depot,
            location_ids,
            stops,
        }
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Instance indices of the visited locations, in visit order.
    pub fn location_ids(&self) -> &[usize] {
        &self.location_ids
    }

    /// Visited locations, in visit order (depot excluded).
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Returns the number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The closed path: depot, stops, depot.
    pub fn points(&self) -> Vec<Location> {
        let mut points = Vec::with_capacity(self.stops.len() + 2);
        points.push(self.depot);
        points.extend_from_slice(&self.stops);
        points.push(self.depot);
        points
    }

    /// Length of the closed path. An empty route has distance zero.
    pub fn distance(&self) -> f64 {
        let mut total = 0.0;
        let mut prev = &self.depot;
        for stop in &self.stops {
            total += prev.distance_to(stop);
            prev = stop;
        }
        total + prev.distance_to(&self.depot)
    }
}
