//! Great-circle reference oracle.

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::models::Location;

use super::{Leg, RoutingOracle};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Straight-line oracle: great-circle distance at a constant speed.
///
/// Useful when no road graph is available and as a deterministic oracle in
/// tests. Geometry is the two endpoints.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
/// use u_dispatch::oracle::{HaversineOracle, RoutingOracle};
///
/// let oracle = HaversineOracle::new(10.0);
/// let leg = oracle
///     .shortest_path(Location::new(0.0, 0.0), Location::new(0.0, 1.0))
///     .unwrap();
/// assert!((leg.distance - 111_195.0).abs() < 1.0);
/// assert!((leg.travel_time - leg.distance / 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaversineOracle {
    speed_mps: f64,
}

impl HaversineOracle {
    /// Creates an oracle travelling at `speed_mps` meters per second.
    pub fn new(speed_mps: f64) -> Self {
        Self { speed_mps }
    }

    /// Travel speed in meters per second.
    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    /// Great-circle distance in meters.
    pub fn distance(a: Location, b: Location) -> f64 {
        let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (b.lon - a.lon).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
    }
}

impl Default for HaversineOracle {
    /// 30 km/h, a typical urban delivery average.
    fn default() -> Self {
        Self::new(30.0 / 3.6)
    }
}

impl RoutingOracle for HaversineOracle {
    fn shortest_path(&self, origin: Location, destination: Location) -> Result<Leg, OracleError> {
        if !origin.is_valid() || !destination.is_valid() {
            return Err(OracleError::NoPath {
                origin,
                destination,
            });
        }
        if !(self.speed_mps.is_finite() && self.speed_mps > 0.0) {
            return Err(OracleError::Unavailable(format!(
                "invalid speed {}",
                self.speed_mps
            )));
        }
        let distance = Self::distance(origin, destination);
        Ok(Leg {
            distance,
            travel_time: distance / self.speed_mps,
            geometry: vec![origin, destination],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = Location::new(50.45, 30.52);
        assert_eq!(HaversineOracle::distance(p, p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Location::new(50.45, 30.52);
        let b = Location::new(50.40, 30.61);
        let ab = HaversineOracle::distance(a, b);
        let ba = HaversineOracle::distance(b, a);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_rejects_invalid_points() {
        let oracle = HaversineOracle::default();
        let err = oracle
            .shortest_path(Location::new(f64::NAN, 0.0), Location::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, OracleError::NoPath { .. }));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let oracle = HaversineOracle::new(0.0);
        let err = oracle
            .shortest_path(Location::new(0.0, 0.0), Location::new(0.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, OracleError::Unavailable(_)));
    }

    #[test]
    fn test_geometry_endpoints() {
        let a = Location::new(1.0, 2.0);
        let b = Location::new(3.0, 4.0);
        let leg = HaversineOracle::default().shortest_path(a, b).expect("valid");
        assert_eq!(leg.geometry, vec![a, b]);
    }
}
