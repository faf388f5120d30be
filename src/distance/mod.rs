//! Distance metric and precomputed distance matrix.

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Location;

/// Euclidean distance between two points in the plane.
///
/// Finite for any finite coordinates whose true distance fits in an `f64`.
///
/// # Examples
///
/// ```
/// use ga_routing::distance::euclidean;
/// use ga_routing::models::Location;
///
/// let d = euclidean(&Location::new(0.0, 0.0), &Location::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: &Location, b: &Location) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}
