//! Error types for dispatch optimization.

use thiserror::Error;

use crate::models::{Location, RequestId, VehicleId};

/// Failure reported by a [`RoutingOracle`](crate::oracle::RoutingOracle).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// No path exists between the two points.
    #[error("no path from {origin} to {destination}")]
    NoPath {
        /// Leg origin.
        origin: Location,
        /// Leg destination.
        destination: Location,
    },
    /// The routing backend could not be reached.
    #[error("routing oracle unavailable: {0}")]
    Unavailable(String),
    /// The query did not complete within the backend's time limit.
    #[error("routing oracle query timed out")]
    TimedOut,
}

/// Errors that abort an optimization run.
///
/// Capacity shortfalls are not errors: requests that fit nowhere are left
/// out of the solution and reported as unrouted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A route references a request the problem does not contain.
    #[error("route references unknown request {0}")]
    UnknownRequest(RequestId),
    /// The routing oracle failed for a leg.
    #[error(transparent)]
    Oracle(#[from] OracleError),
    /// Two requests share the same identifier.
    /// A solution route names a vehicle the problem does not have.
    #[error("solution references unknown vehicle {0}")]
    UnknownVehicle(VehicleId),
    #[error("duplicate request id {0}")]
    DuplicateRequest(RequestId),
    #[error("duplicate vehicle id {0}")]
    DuplicateVehicle(VehicleId),
    /// A request volume is negative or not finite.
    #[error("request {id} has invalid volume {volume}")]
    InvalidVolume {
        /// Offending request.
        id: RequestId,
        /// Its volume.
        volume: f64,
    },
    /// A vehicle capacity is not strictly positive.
    #[error("vehicle {id} has invalid capacity {capacity}")]
    InvalidCapacity {
        /// Offending vehicle.
        id: VehicleId,
        /// Its capacity.
        capacity: f64,
    },
    /// A coordinate is outside the valid latitude/longitude range.
    #[error("invalid coordinate {0}")]
    InvalidCoordinate(Location),
    /// There is nothing to deliver.
    #[error("no requests to route")]
    NoRequests,
    /// The fleet is empty.
    #[error("no vehicles available")]
    NoVehicles,
    /// The explicit vehicle selection matched no available vehicle.
    #[error("no selected vehicles")]
    NoSelectedVehicles,
    /// A search parameter is out of range.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
