//! Dense distance matrix.

use crate::models::{Location, VrpInstance};

use super::euclidean;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built from an instance, node 0 is the depot and node `i + 1` is
/// location `i`, so the fitness loop never recomputes a square root.
///
/// # Examples
///
/// ```
/// use ga_routing::models::{Location, VrpInstance};
/// use ga_routing::distance::DistanceMatrix;
///
/// let instance = VrpInstance::new(
///     vec![Location::new(3.0, 4.0), Location::new(6.0, 8.0)],
///     Location::new(0.0, 0.0),
///     1,
/// );
/// let dm = DistanceMatrix::from_instance(&instance);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.depot_to(0) - 5.0).abs() < 1e-10);
/// assert!((dm.between(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix over an arbitrary list of points.
    pub fn from_points(points: &[Location]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = euclidean(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Computes the matrix over the depot followed by every location.
    pub fn from_instance(instance: &VrpInstance) -> Self {
        let mut points = Vec::with_capacity(instance.num_locations() + 1);
        points.push(instance.depot());
        points.extend_from_slice(instance.locations());
        Self::from_points(&points)
    }

    /// Returns the distance between matrix nodes `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance from the depot to location `loc`.
    pub fn depot_to(&self, loc: usize) -> f64 {
        self.get(0, loc + 1)
    }

    /// Distance between locations `a` and `b`.
    pub fn between(&self, a: usize, b: usize) -> f64 {
        self.get(a + 1, b + 1)
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> VrpInstance {
        VrpInstance::new(
            vec![Location::new(3.0, 4.0), Location::new(0.0, 8.0)],
            Location::new(0.0, 0.0),
            1,
        )
    }

    #[test]
    fn test_from_instance() {
        let dm = DistanceMatrix::from_instance(&sample_instance());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(dm.get(0, 0).abs() < 1e-10);
    }

    #[test]
    fn test_depot_and_location_offsets() {
        let dm = DistanceMatrix::from_instance(&sample_instance());
        assert!((dm.depot_to(1) - 8.0).abs() < 1e-10);
        assert!((dm.between(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.between(1, 0) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_instance(&sample_instance());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_overlapping_points() {
        let p = Location::new(2.0, 2.0);
        let dm = DistanceMatrix::from_points(&[p, p]);
        assert_eq!(dm.get(0, 1), 0.0);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
    }
}
