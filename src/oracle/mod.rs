//! Routing oracle interface and per-run leg memoization.
//!
//! - [`RoutingOracle`]: distance, travel time, and geometry between two points
//! - [`HaversineOracle`]: great-circle reference oracle at constant speed
//! - [`MatrixOracle`]: dense precomputed matrix over a fixed set of points
//! - [`DistanceCache`]: lazily filled leg cache owned by a single run

mod cache;
mod haversine;
mod leg;
mod matrix;

pub use cache::{DistanceCache, LocationKey};
pub use haversine::HaversineOracle;
pub use leg::{Leg, RoutingOracle};
pub use matrix::MatrixOracle;
