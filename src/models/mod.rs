//! Domain model types for multi-vehicle routing.
//!
//! Locations are plain coordinates, a routing instance bundles them with a
//! depot and a fleet size, and routes are the decoded per-vehicle paths.

mod instance;
mod location;
mod route;

pub use instance::{VrpInstance, DEFAULT_DEPOT};
pub use location::Location;
pub use route::Route;
