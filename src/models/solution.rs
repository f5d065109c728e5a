//! Solution representation: one ordered request sequence per vehicle.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{Problem, RequestId, VehicleId, VehicleProfile};

/// Assignment of ordered request sequences to vehicles.
///
/// Routes are stored in the problem's vehicle order. The depot is implicit
/// at both ends of every route. A request ID appears in at most one route;
/// requests that could not be placed are simply absent.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Solution, VehicleProfile};
///
/// let vehicles = vec![VehicleProfile::new(7, "Van", 10.0), VehicleProfile::new(9, "Truck", 20.0)];
/// let mut sol = Solution::empty(&vehicles);
/// sol.routes_mut()[1].push(42);
/// assert_eq!(sol.route_for(9), Some(&[42][..]));
/// assert_eq!(sol.num_routed(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    vehicle_ids: Vec<VehicleId>,
    routes: Vec<Vec<RequestId>>,
}

impl Solution {
    /// Creates a solution with one empty route per vehicle.
    pub fn empty(vehicles: &[VehicleProfile]) -> Self {
        Self {
            vehicle_ids: vehicles.iter().map(VehicleProfile::id).collect(),
            routes: vec![Vec::new(); vehicles.len()],
        }
    }

    /// Creates a solution from `(vehicle, route)` pairs.
    pub fn from_routes(routes: Vec<(VehicleId, Vec<RequestId>)>) -> Self {
        let (vehicle_ids, routes) = routes.into_iter().unzip();
        Self {
            vehicle_ids,
            routes,
        }
    }

    /// Vehicle IDs, aligned with [`routes`](Self::routes).
    pub fn vehicle_ids(&self) -> &[VehicleId] {
        &self.vehicle_ids
    }

    /// Routes as request ID sequences.
    pub fn routes(&self) -> &[Vec<RequestId>] {
        &self.routes
    }

    /// Mutable routes.
    pub fn routes_mut(&mut self) -> &mut [Vec<RequestId>] {
        &mut self.routes
    }

    /// Route driven by the given vehicle.
    pub fn route_for(&self, vehicle_id: VehicleId) -> Option<&[RequestId]> {
        self.vehicle_ids
            .iter()
            .position(|&v| v == vehicle_id)
            .map(|i| self.routes[i].as_slice())
    }

    /// Number of routes (one per vehicle, possibly empty).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of routed requests.
    pub fn num_routed(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// All routed request IDs in route order.
    pub fn routed(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.routes.iter().flat_map(|r| r.iter().copied())
    }

    /// Requests of the problem that appear in no route, in problem order.
    pub fn unrouted(&self, problem: &Problem) -> Vec<RequestId> {
        let routed: FxHashSet<RequestId> = self.routed().collect();
        problem
            .requests()
            .iter()
            .map(|r| r.id())
            .filter(|id| !routed.contains(id))
            .collect()
    }

    /// Removes the given requests from whichever route holds them.
    ///
    /// Returns the IDs actually removed, in route order.
    pub fn remove_all(&mut self, ids: &FxHashSet<RequestId>) -> Vec<RequestId> {
        let mut removed = Vec::with_capacity(ids.len());
        for route in &mut self.routes {
            route.retain(|id| {
                if ids.contains(id) {
                    removed.push(*id);
                    false
                } else {
                    true
                }
            });
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, Request};

    #[test]
    fn test_empty_solution() {
        let vehicles = vec![VehicleProfile::new(1, "A", 5.0), VehicleProfile::new(2, "B", 5.0)];
        let sol = Solution::empty(&vehicles);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_routed(), 0);
        assert_eq!(sol.vehicle_ids(), &[1, 2]);
    }

    #[test]
    fn test_remove_all() {
        let mut sol = Solution::from_routes(vec![(1, vec![1, 2, 3]), (2, vec![4, 5])]);
        let ids: FxHashSet<RequestId> = [2, 5].into_iter().collect();
        let removed = sol.remove_all(&ids);
        assert_eq!(removed, vec![2, 5]);
        assert_eq!(sol.routes(), &[vec![1, 3], vec![4]]);
        assert_eq!(sol.num_routed(), 3);
    }

    #[test]
    fn test_unrouted() {
        let loc = Location::new(50.0, 30.0);
        let problem = Problem::new(
            loc,
            (1..=4).map(|id| Request::new(id, "", 1.0, loc)).collect(),
            vec![VehicleProfile::new(1, "A", 5.0)],
        )
        .expect("valid");
        let sol = Solution::from_routes(vec![(1, vec![3, 1])]);
        assert_eq!(sol.unrouted(&problem), vec![2, 4]);
    }

    #[test]
    fn test_route_for_unknown_vehicle() {
        let sol = Solution::from_routes(vec![(1, vec![1])]);
        assert!(sol.route_for(2).is_none());
    }
}
