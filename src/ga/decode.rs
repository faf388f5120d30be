//! Route decoder: permutation to per-vehicle routes.
//!
//! Permutation position `j` is served by vehicle `j % num_vehicles`, so
//! vehicle `i` visits the locations at positions `i, i + k, i + 2k, ...`
//! in that order, where `k` is the fleet size. Assignment depends on the
//! position, never on the location index stored there.

use crate::error::{Result, VrpError};
use crate::models::{Location, Route};

/// Checks that `genes` is a permutation of `0..num_locations` and that the
/// fleet is non-empty.
pub(crate) fn check_permutation(
    genes: &[usize],
    num_locations: usize,
    num_vehicles: usize,
) -> Result<()> {
    if num_vehicles < 1 {
        return Err(VrpError::InvalidConfig(
            "num_vehicles must be at least 1".into(),
        ));
    }
    if genes.len() != num_locations {
        return Err(VrpError::InvalidConfig(format!(
            "permutation has {} genes but instance has {} locations",
            genes.len(),
            num_locations
        )));
    }
    let mut seen = vec![false; num_locations];
    for &g in genes {
        match seen.get_mut(g) {
            None => {
                return Err(VrpError::InvalidConfig(format!(
                    "location index {g} out of range 0..{num_locations}"
                )))
            }
            Some(true) => {
                return Err(VrpError::InvalidConfig(format!(
                    "location index {g} appears more than once"
                )))
            }
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}

/// Location indices assigned to each vehicle, in visit order.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::assign_vehicles;
///
/// let assignment = assign_vehicles(&[0, 1, 2, 3], 2);
/// assert_eq!(assignment, vec![vec![0, 2], vec![1, 3]]);
/// ```
pub fn assign_vehicles(genes: &[usize], num_vehicles: usize) -> Vec<Vec<usize>> {
    let mut assignment = vec![Vec::new(); num_vehicles];
    if num_vehicles == 0 {
        return assignment;
    }
    for (pos, &loc) in genes.iter().enumerate() {
        assignment[pos % num_vehicles].push(loc);
    }
    assignment
}

/// Decodes a permutation into one route per vehicle.
///
/// Returns exactly `num_vehicles` routes; vehicles without stops get an
/// empty route.
///
/// # Errors
///
/// [`VrpError::InvalidConfig`] if `num_vehicles` is zero or `genes` is not
/// a permutation of `0..locations.len()`.
///
/// # Examples
///
/// ```
/// use ga_routing::ga::decode;
/// use ga_routing::models::Location;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(10.0, 0.0),
///     Location::new(10.0, 10.0),
///     Location::new(0.0, 10.0),
/// ];
/// let routes = decode(&[3, 2, 1, 0], Location::new(0.0, 0.0), &locations, 2).unwrap();
/// assert_eq!(routes[0].location_ids(), &[3, 1]);
/// assert_eq!(routes[1].location_ids(), &[2, 0]);
/// ```
pub fn decode(
    genes: &[usize],
    depot: Location,
    locations: &[Location],
    num_vehicles: usize,
) -> Result<Vec<Route>> {
    check_permutation(genes, locations.len(), num_vehicles)?;

    let routes = assign_vehicles(genes, num_vehicles)
        .into_iter()
        .enumerate()
        .map(|(vehicle_id, ids)| {
            let stops = ids.iter().map(|&i| locations[i]).collect();
            Route::new(vehicle_id, depot, ids, stops)
        })
        .collect();
    Ok(routes)
}
