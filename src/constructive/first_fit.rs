//! First-fit construction ordered by time window start.
//!
//! Requests are taken in ascending order of earliest service time (requests
//! without a lower bound first, ties in input order) and packed into the
//! first vehicle with room left. Sequencing within a route is left to the
//! destroy/repair search.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n requests and m vehicles.

use tracing::debug;

use crate::models::{Problem, Request, Solution};

/// Builds the starting solution for the search.
///
/// Every route respects its vehicle's capacity. Requests that fit in no
/// vehicle are left out.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::initial_solution;
/// use u_dispatch::models::{Location, Problem, Request, TimeWindow, VehicleProfile};
///
/// let loc = Location::new(50.45, 30.52);
/// let problem = Problem::new(
///     loc,
///     vec![
///         Request::new(1, "late", 4.0, loc)
///             .with_time_window(TimeWindow::new(Some(600.0), None).unwrap()),
///         Request::new(2, "early", 5.0, loc)
///             .with_time_window(TimeWindow::new(Some(60.0), None).unwrap()),
///     ],
///     vec![VehicleProfile::new(0, "Van", 10.0)],
/// )
/// .unwrap();
///
/// let sol = initial_solution(&problem);
/// assert_eq!(sol.routes()[0], vec![2, 1]);
/// ```
pub fn initial_solution(problem: &Problem) -> Solution {
    let vehicles = problem.vehicles();
    let mut solution = Solution::empty(vehicles);
    let mut loads = vec![0.0; vehicles.len()];

    let mut order: Vec<&Request> = problem.requests().iter().collect();
    // None sorts before Some, so requests without a lower bound come first.
    order.sort_by(|a, b| {
        let (a, b) = (a.time_window().earliest(), b.time_window().earliest());
        match (a, b) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => a.is_some().cmp(&b.is_some()),
        }
    });

    let mut dropped = 0;
    for request in order {
        let slot = vehicles
            .iter()
            .zip(&loads)
            .position(|(v, &load)| load + request.volume() <= v.capacity());
        match slot {
            Some(vi) => {
                solution.routes_mut()[vi].push(request.id());
                loads[vi] += request.volume();
            }
            None => dropped += 1,
        }
    }

    debug!(
        routed = solution.num_routed(),
        dropped, "initial solution built"
    );
    solution
}
