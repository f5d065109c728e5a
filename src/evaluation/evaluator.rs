//! Route cost evaluator with soft time windows.

use crate::error::RoutingError;
use crate::models::{Location, Problem, RequestId, Route, Solution, Visit};
use crate::oracle::{DistanceCache, RoutingOracle};

/// Penalty added to a route's distance for each stop served after its
/// window closes. Far above any realistic route length in meters.
pub const DEFAULT_LATE_PENALTY: f64 = 1_000_000.0;

/// Result of walking a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteCost {
    /// Travel distance plus lateness penalties.
    pub distance: f64,
    /// Elapsed time back at the depot, waiting included.
    pub elapsed_time: f64,
}

/// Evaluates routes of one problem against a routing oracle.
///
/// Owns the run's [`DistanceCache`]; every leg is queried at most once.
///
/// # Examples
///
/// ```
/// use u_dispatch::evaluation::CostEvaluator;
/// use u_dispatch::models::{Location, Problem, Request, VehicleProfile};
/// use u_dispatch::oracle::HaversineOracle;
///
/// let depot = Location::new(0.0, 0.0);
/// let problem = Problem::new(
///     depot,
///     vec![Request::new(1, "A", 1.0, Location::new(0.0, 0.01))],
///     vec![VehicleProfile::new(0, "Van", 10.0)],
/// )
/// .unwrap();
/// let oracle = HaversineOracle::default();
/// let mut eval = CostEvaluator::new(&problem, &oracle);
///
/// let cost = eval.route_cost(&[1]).unwrap();
/// assert!((cost.distance - 2.0 * 1111.95).abs() < 1.0);
/// ```
pub struct CostEvaluator<'a, O: RoutingOracle + ?Sized> {
    problem: &'a Problem,
    oracle: &'a O,
    cache: DistanceCache,
    late_penalty: f64,
}

impl<'a, O: RoutingOracle + ?Sized> CostEvaluator<'a, O> {
    /// Creates an evaluator with an empty cache and the default penalty.
    pub fn new(problem: &'a Problem, oracle: &'a O) -> Self {
        Self {
            problem,
            oracle,
            cache: DistanceCache::new(),
            late_penalty: DEFAULT_LATE_PENALTY,
        }
    }

    /// Sets the lateness penalty.
    pub fn with_late_penalty(mut self, penalty: f64) -> Self {
        self.late_penalty = penalty;
        self
    }

    /// The problem being evaluated.
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    /// The lateness penalty in use.
    pub fn late_penalty(&self) -> f64 {
        self.late_penalty
    }

    /// The run's leg cache.
    pub fn cache(&self) -> &DistanceCache {
        &self.cache
    }

    fn leg_cost(&mut self, from: Location, to: Location) -> Result<(f64, f64), RoutingError> {
        let leg = self.cache.leg(self.oracle, from, to)?;
        Ok((leg.distance, leg.travel_time))
    }

    /// Walks `route` from the depot and back.
    ///
    /// Arriving before a window opens waits until it opens; serving after it
    /// closes adds the lateness penalty to the distance.
    pub fn route_cost(&mut self, route: &[RequestId]) -> Result<RouteCost, RoutingError> {
        let problem = self.problem;
        let depot = problem.depot();
        let mut distance = 0.0;
        let mut time = 0.0;
        let mut prev = depot;

        for &id in route {
            let request = problem.request(id)?;
            let (d, t) = self.leg_cost(prev, request.location())?;
            distance += d;
            time = request.time_window().service_start(time + t);
            if request.time_window().is_late(time) {
                distance += self.late_penalty;
            }
            prev = request.location();
        }

        let (d, t) = self.leg_cost(prev, depot)?;
        Ok(RouteCost {
            distance: distance + d,
            elapsed_time: time + t,
        })
    }

    /// Sum of penalized route distances. Elapsed times are not aggregated.
    pub fn solution_cost(&mut self, solution: &Solution) -> Result<f64, RoutingError> {
        let mut total = 0.0;
        for route in solution.routes() {
            total += self.route_cost(route)?.distance;
        }
        Ok(total)
    }

    /// Builds fully computed routes, one per solution route, each paired
    /// with the vehicle its ID names.
    ///
    /// Distances here are pure travel distances; lateness shows up as
    /// [`Visit::late`] instead of a penalty. Travel time is the sum of leg
    /// times; waiting for windows only shows in [`Route::elapsed_time`].
    /// Empty routes cost nothing and have no geometry.
    pub fn materialize(&mut self, solution: &Solution) -> Result<Vec<Route>, RoutingError> {
        let problem = self.problem;
        let depot = problem.depot();
        let mut routes = Vec::with_capacity(solution.num_routes());

        for (&vehicle_id, stops) in solution.vehicle_ids().iter().zip(solution.routes()) {
            let vehicle = problem.vehicle(vehicle_id)?;
            let mut visits = Vec::with_capacity(stops.len());
            let mut geometry = Vec::with_capacity(stops.len() + 1);
            let mut distance = 0.0;
            let mut travel_time = 0.0;
            let mut time = 0.0;

            if !stops.is_empty() {
                let mut prev = depot;
                for &id in stops {
                    let request = problem.request(id)?;
                    let leg = self.cache.leg(self.oracle, prev, request.location())?;
                    distance += leg.distance;
                    travel_time += leg.travel_time;
                    geometry.push(leg.geometry.clone());
                    let arrival = time + leg.travel_time;
                    time = request.time_window().service_start(arrival);
                    visits.push(Visit {
                        request_id: id,
                        external_ref: request.external_ref().to_owned(),
                        arrival_time: arrival,
                        service_start: time,
                        late: request.time_window().is_late(time),
                    });
                    prev = request.location();
                }
                let leg = self.cache.leg(self.oracle, prev, depot)?;
                distance += leg.distance;
                travel_time += leg.travel_time;
                time += leg.travel_time;
                geometry.push(leg.geometry.clone());
            }

            routes.push(
                Route::new(vehicle.clone(), visits, distance, travel_time, geometry)
                    .with_elapsed_time(time),
            );
        }

        Ok(routes)
    }
}
