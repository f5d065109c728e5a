//! Oracle trait and leg type.

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::models::Location;

/// Travel between two points as reported by a [`RoutingOracle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Travel distance (meters).
    pub distance: f64,
    /// Travel time (seconds).
    pub travel_time: f64,
    /// Polyline from origin to destination.
    pub geometry: Vec<Location>,
}

/// Source of shortest paths between geographic points.
///
/// Implementations are shared infrastructure: independent optimization runs
/// may query the same oracle concurrently, so queries take `&self`.
/// An implementation must return an error when no path exists rather than a
/// zero-cost leg. Timeouts and retries belong to the implementation.
///
/// # Examples
///
/// ```
/// use u_dispatch::error::OracleError;
/// use u_dispatch::models::Location;
/// use u_dispatch::oracle::{Leg, RoutingOracle};
///
/// struct Straight;
///
/// impl RoutingOracle for Straight {
///     fn shortest_path(&self, origin: Location, destination: Location) -> Result<Leg, OracleError> {
///         let d = (origin.lat - destination.lat).hypot(origin.lon - destination.lon);
///         Ok(Leg { distance: d, travel_time: d, geometry: vec![origin, destination] })
///     }
/// }
///
/// let leg = Straight.shortest_path(Location::new(0.0, 0.0), Location::new(3.0, 4.0)).unwrap();
/// assert_eq!(leg.distance, 5.0);
/// ```
pub trait RoutingOracle: Send + Sync {
    /// Shortest path from `origin` to `destination`.
    fn shortest_path(&self, origin: Location, destination: Location) -> Result<Leg, OracleError>;
}

impl<O: RoutingOracle + ?Sized> RoutingOracle for &O {
    fn shortest_path(&self, origin: Location, destination: Location) -> Result<Leg, OracleError> {
        (**self).shortest_path(origin, destination)
    }
}
