//! End-to-end planning of one dispatch request.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::alns::{Search, SearchConfig, SearchStatistics};
use crate::error::RoutingError;
use crate::fleet::select_vehicle_set;
use crate::models::{Location, Problem, Request, RequestId, Route, VehicleId, VehicleProfile};
use crate::oracle::RoutingOracle;

/// Everything needed to plan one run, as supplied by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Depot location.
    pub depot: Location,
    /// Requests to serve.
    pub requests: Vec<Request>,
    /// Active vehicles.
    pub vehicles: Vec<VehicleProfile>,
    /// Restrict the run to these vehicles; `None` or empty means all.
    #[serde(default)]
    pub vehicle_ids: Option<Vec<VehicleId>>,
    /// Use every (selected) vehicle instead of a minimal capacity cover.
    #[serde(default)]
    pub force_all: bool,
}

/// Outcome of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// One route per vehicle used, in selection order.
    pub routes: Vec<Route>,
    /// Requests that fit in no vehicle.
    pub unrouted: Vec<RequestId>,
    /// Sum of route travel distances, without lateness penalties.
    pub total_distance: f64,
    /// Penalized objective of the returned solution.
    pub best_cost: f64,
    /// Search counters.
    pub statistics: SearchStatistics,
}

/// Plans routes for `input`.
///
/// Rejects inputs with no requests, no vehicles, or a vehicle restriction
/// that matches nothing. Demand above fleet capacity is not an error: the
/// excess shows up in [`PlanResult::unrouted`].
///
/// # Examples
///
/// ```
/// use u_dispatch::alns::SearchConfig;
/// use u_dispatch::models::{Location, Request, VehicleProfile};
/// use u_dispatch::oracle::HaversineOracle;
/// use u_dispatch::planner::{plan_routes, PlanInput};
///
/// let input = PlanInput {
///     depot: Location::new(50.45, 30.52),
///     requests: vec![
///         Request::new(1, "A", 4.0, Location::new(50.46, 30.50)),
///         Request::new(2, "B", 5.0, Location::new(50.44, 30.55)),
///     ],
///     vehicles: vec![VehicleProfile::new(1, "Van", 10.0), VehicleProfile::new(2, "Bike", 3.0)],
///     vehicle_ids: None,
///     force_all: false,
/// };
/// let result = plan_routes(&input, &HaversineOracle::default(), SearchConfig::default().with_seed(1)).unwrap();
/// assert_eq!(result.routes.len(), 1);
/// assert_eq!(result.routes[0].len(), 2);
/// assert!(result.unrouted.is_empty());
/// ```
#[instrument(
    skip_all,
    fields(requests = input.requests.len(), vehicles = input.vehicles.len(), force_all = input.force_all)
)]
pub fn plan_routes<O: RoutingOracle + ?Sized>(
    input: &PlanInput,
    oracle: &O,
    config: SearchConfig,
) -> Result<PlanResult, RoutingError> {
    if input.requests.is_empty() {
        return Err(RoutingError::NoRequests);
    }
    if input.vehicles.is_empty() {
        return Err(RoutingError::NoVehicles);
    }

    let available: Vec<VehicleProfile> = match &input.vehicle_ids {
        Some(ids) if !ids.is_empty() => input
            .vehicles
            .iter()
            .filter(|v| ids.contains(&v.id()))
            .cloned()
            .collect(),
        _ => input.vehicles.clone(),
    };
    if available.is_empty() {
        return Err(RoutingError::NoSelectedVehicles);
    }

    let total_demand: f64 = input.requests.iter().map(Request::volume).sum();
    let vehicles = select_vehicle_set(&available, total_demand, input.force_all);
    let problem = Problem::new(input.depot, input.requests.clone(), vehicles)?;

    let outcome = Search::new(&problem, oracle, config)?.run()?;
    let total_distance = outcome.routes.iter().map(Route::distance).sum();

    info!(
        vehicles = outcome.routes.len(),
        unrouted = outcome.unrouted.len(),
        total_distance,
        "routes planned"
    );

    Ok(PlanResult {
        routes: outcome.routes,
        unrouted: outcome.unrouted,
        total_distance,
        best_cost: outcome.best_cost,
        statistics: outcome.statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::HaversineOracle;

    fn input(volumes: &[f64], capacities: &[f64]) -> PlanInput {
        PlanInput {
            depot: Location::new(50.45, 30.52),
            requests: volumes
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let id = i as u64 + 1;
                    let loc = Location::new(50.40 + i as f64 * 0.01, 30.50);
                    Request::new(id, format!("ORD-{id}"), v, loc)
                })
                .collect(),
            vehicles: capacities
                .iter()
                .enumerate()
                .map(|(i, &c)| VehicleProfile::new(i as u64 + 1, format!("V{}", i + 1), c))
                .collect(),
            vehicle_ids: None,
            force_all: false,
        }
    }

    fn config() -> SearchConfig {
        SearchConfig::default().with_iterations(40).with_seed(42)
    }

    #[test]
    fn test_rejects_empty_requests() {
        let err = plan_routes(&input(&[], &[10.0]), &HaversineOracle::default(), config());
        assert_eq!(err, Err(RoutingError::NoRequests));
    }

    #[test]
    fn test_rejects_empty_fleet() {
        let err = plan_routes(&input(&[1.0], &[]), &HaversineOracle::default(), config());
        assert_eq!(err, Err(RoutingError::NoVehicles));
    }

    #[test]
    fn test_rejects_unmatched_selection() {
        let mut plan = input(&[1.0], &[10.0]);
        plan.vehicle_ids = Some(vec![99]);
        let err = plan_routes(&plan, &HaversineOracle::default(), config());
        assert_eq!(err, Err(RoutingError::NoSelectedVehicles));
    }

    #[test]
    fn test_vehicle_restriction() {
        let mut plan = input(&[1.0, 1.0], &[10.0, 10.0, 10.0]);
        plan.vehicle_ids = Some(vec![2, 3]);
        plan.force_all = true;
        let result = plan_routes(&plan, &HaversineOracle::default(), config()).expect("plannable");
        let ids: Vec<VehicleId> = result.routes.iter().map(|r| r.vehicle().id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_infeasible_demand_is_partial() {
        let result = plan_routes(
            &input(&[4.0, 4.0, 4.0], &[5.0, 5.0]),
            &HaversineOracle::default(),
            config(),
        )
        .expect("not an error");
        assert_eq!(result.routes.len(), 2);
        assert_eq!(result.unrouted.len(), 1);
        let routed: usize = result.routes.iter().map(Route::len).sum();
        assert_eq!(routed, 2);
    }

    #[test]
    fn test_total_distance_matches_routes() {
        let result = plan_routes(
            &input(&[1.0, 2.0, 3.0, 1.0], &[4.0, 4.0]),
            &HaversineOracle::default(),
            config(),
        )
        .expect("plannable");
        let sum: f64 = result.routes.iter().map(|r| r.distance()).sum();
        assert!((result.total_distance - sum).abs() < 1e-9);
        assert!(result.unrouted.is_empty());
        // No windows, so nothing is penalized.
        assert!((result.best_cost - result.total_distance).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let mut plan = input(&[1.0], &[10.0]);
        plan.requests.push(plan.requests[0].clone());
        let err = plan_routes(&plan, &HaversineOracle::default(), config());
        assert_eq!(err, Err(RoutingError::DuplicateRequest(1)));
    }

    #[test]
    fn test_duplicate_vehicle_rejected() {
        let mut plan = input(&[1.0], &[10.0]);
        plan.vehicles.push(plan.vehicles[0].clone());
        plan.force_all = true;
        let err = plan_routes(&plan, &HaversineOracle::default(), config());
        assert_eq!(err, Err(RoutingError::DuplicateVehicle(1)));
    }

    #[test]
    fn test_result_serializes() {
        let result = plan_routes(&input(&[1.0], &[10.0]), &HaversineOracle::default(), config())
            .expect("plannable");
        let json = serde_json::to_value(&result).expect("serializable");
        assert_eq!(json["routes"][0]["visits"][0]["external_ref"], "ORD-1");
        assert_eq!(json["routes"][0]["geometry"].as_array().map(Vec::len), Some(2));
        assert!(json["best_cost"].as_f64().is_some_and(|c| c > 0.0));
    }
}
