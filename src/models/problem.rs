//! Immutable problem model for one optimization run.

use fxhash::FxHashMap;

use crate::error::RoutingError;

use super::{Location, Request, RequestId, VehicleId, VehicleProfile};

/// Depot, requests, and vehicles for a single run.
///
/// Requests and vehicles are stored in arenas indexed by ID so lookups
/// inside the repair loop are constant time. Vehicle order is fixed and
/// defines the route order of [`Solution::empty`](super::Solution::empty).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Location, Problem, Request, VehicleProfile};
///
/// let problem = Problem::new(
///     Location::new(50.45, 30.52),
///     vec![Request::new(1, "A", 4.0, Location::new(50.46, 30.50))],
///     vec![VehicleProfile::new(0, "Van", 10.0)],
/// )
/// .unwrap();
/// assert_eq!(problem.num_requests(), 1);
/// assert_eq!(problem.request(1).unwrap().volume(), 4.0);
/// assert!(problem.request(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depot: Location,
    requests: Vec<Request>,
    index: FxHashMap<RequestId, usize>,
    vehicles: Vec<VehicleProfile>,
    vehicle_index: FxHashMap<VehicleId, usize>,
}

impl Problem {
    /// Builds and validates a problem.
    ///
    /// Fails on duplicate request or vehicle IDs, negative or non-finite
    /// volumes, non-positive capacities, and out-of-range coordinates.
    pub fn new(
        depot: Location,
        requests: Vec<Request>,
        vehicles: Vec<VehicleProfile>,
    ) -> Result<Self, RoutingError> {
        if !depot.is_valid() {
            return Err(RoutingError::InvalidCoordinate(depot));
        }

        let mut index = FxHashMap::default();
        for (i, request) in requests.iter().enumerate() {
            if !request.volume().is_finite() || request.volume() < 0.0 {
                return Err(RoutingError::InvalidVolume {
                    id: request.id(),
                    volume: request.volume(),
                });
            }
            if !request.location().is_valid() {
                return Err(RoutingError::InvalidCoordinate(request.location()));
            }
            if index.insert(request.id(), i).is_some() {
                return Err(RoutingError::DuplicateRequest(request.id()));
            }
        }

        let mut vehicle_index = FxHashMap::default();
        for (i, vehicle) in vehicles.iter().enumerate() {
            if vehicle.capacity().is_nan() || vehicle.capacity() <= 0.0 {
                return Err(RoutingError::InvalidCapacity {
                    id: vehicle.id(),
                    capacity: vehicle.capacity(),
                });
            }
            if vehicle_index.insert(vehicle.id(), i).is_some() {
                return Err(RoutingError::DuplicateVehicle(vehicle.id()));
            }
        }

        Ok(Self {
            depot,
            requests,
            index,
            vehicles,
            vehicle_index,
        })
    }

    /// Depot location (start and end of every route).
    pub fn depot(&self) -> Location {
        self.depot
    }

    /// All requests, in input order.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Vehicles, in route order.
    pub fn vehicles(&self) -> &[VehicleProfile] {
        &self.vehicles
    }

    /// Number of requests.
    pub fn num_requests(&self) -> usize {
        self.requests.len()
    }

    /// Looks up a request by ID.
    pub fn request(&self, id: RequestId) -> Result<&Request, RoutingError> {
        self.index
            .get(&id)
            .map(|&i| &self.requests[i])
            .ok_or(RoutingError::UnknownRequest(id))
    }

    /// Looks up a vehicle by ID.
    pub fn vehicle(&self, id: VehicleId) -> Result<&VehicleProfile, RoutingError> {
        self.vehicle_index
            .get(&id)
            .map(|&i| &self.vehicles[i])
            .ok_or(RoutingError::UnknownVehicle(id))
    }

    /// Sum of volumes along a route.
    pub fn load(&self, route: &[RequestId]) -> Result<f64, RoutingError> {
        route
            .iter()
            .try_fold(0.0, |acc, &id| Ok(acc + self.request(id)?.volume()))
    }

    /// Sum of all request volumes.
    pub fn total_demand(&self) -> f64 {
        self.requests.iter().map(Request::volume).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depot() -> Location {
        Location::new(50.45, 30.52)
    }

    fn req(id: RequestId, volume: f64) -> Request {
        Request::new(id, format!("R{id}"), volume, Location::new(50.4, 30.5))
    }

    #[test]
    fn test_lookup_and_load() {
        let problem = Problem::new(
            depot(),
            vec![req(10, 1.5), req(20, 2.5)],
            vec![VehicleProfile::new(0, "Van", 5.0)],
        )
        .expect("valid");
        assert_eq!(problem.request(20).expect("exists").volume(), 2.5);
        assert_eq!(problem.load(&[10, 20]).expect("known ids"), 4.0);
        assert_eq!(problem.total_demand(), 4.0);
    }

    #[test]
    fn test_load_unknown_request() {
        let problem = Problem::new(depot(), vec![req(1, 1.0)], vec![]).expect("valid");
        assert_eq!(problem.load(&[1, 99]), Err(RoutingError::UnknownRequest(99)));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Problem::new(depot(), vec![req(1, 1.0), req(1, 2.0)], vec![]).unwrap_err();
        assert_eq!(err, RoutingError::DuplicateRequest(1));
    }

    #[test]
    fn test_rejects_duplicate_vehicles() {
        let vehicles = vec![VehicleProfile::new(7, "Van", 5.0), VehicleProfile::new(7, "Truck", 9.0)];
        let err = Problem::new(depot(), vec![req(1, 1.0)], vehicles).unwrap_err();
        assert_eq!(err, RoutingError::DuplicateVehicle(7));
    }

    #[test]
    fn test_vehicle_lookup() {
        let vehicles = vec![VehicleProfile::new(4, "Van", 5.0), VehicleProfile::new(2, "Truck", 9.0)];
        let problem = Problem::new(depot(), vec![], vehicles).expect("valid");
        assert_eq!(problem.vehicle(2).expect("exists").capacity(), 9.0);
        assert_eq!(problem.vehicle(3).unwrap_err(), RoutingError::UnknownVehicle(3));
    }

    #[test]
    fn test_rejects_negative_volume() {
        let err = Problem::new(depot(), vec![req(1, -1.0)], vec![]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidVolume { id: 1, .. }));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = Problem::new(depot(), vec![], vec![VehicleProfile::new(3, "Bike", 0.0)])
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidCapacity { id: 3, .. }));
    }

    #[test]
    fn test_rejects_bad_depot() {
        let err = Problem::new(Location::new(100.0, 0.0), vec![], vec![]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidCoordinate(_)));
    }
}
