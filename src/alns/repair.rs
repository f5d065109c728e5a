//! Repair operators.
//!
//! - [`GreedyInsertion`]: Cheapest feasible insertion, requests in random order

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::RoutingError;
use crate::evaluation::CostEvaluator;
use crate::models::{RequestId, Solution};
use crate::oracle::RoutingOracle;

use super::operator::RepairOperator;

/// Finds the capacity-feasible `(route_index, position)` whose resulting
/// route has the lowest penalized distance. Each route's capacity comes
/// from the vehicle its ID names, not from its position.
///
/// Every position of every vehicle with room is evaluated exactly. Ties go
/// to the first candidate found.
fn best_insertion<O: RoutingOracle + ?Sized>(
    solution: &Solution,
    loads: &[f64],
    request_id: RequestId,
    volume: f64,
    evaluator: &mut CostEvaluator<'_, O>,
) -> Result<Option<(usize, usize, f64)>, RoutingError> {
    let problem = evaluator.problem();
    let mut best: Option<(usize, usize, f64)> = None;
    let mut candidate = Vec::new();

    let routes = solution.vehicle_ids().iter().zip(solution.routes());
    for (ri, (&vehicle_id, route)) in routes.enumerate() {
        if loads[ri] + volume > problem.vehicle(vehicle_id)?.capacity() {
            continue;
        }

        for pos in 0..=route.len() {
            candidate.clear();
            candidate.extend_from_slice(&route[..pos]);
            candidate.push(request_id);
            candidate.extend_from_slice(&route[pos..]);

            let cost = evaluator.route_cost(&candidate)?.distance;
            if best.is_none_or(|b| cost < b.2) {
                best = Some((ri, pos, cost));
            }
        }
    }

    Ok(best)
}

/// Reinserts `removed` into `partial`, one request at a time in shuffled
/// order, each at its cheapest capacity-feasible position.
///
/// Requests that fit in no vehicle are left out of the result. Because the
/// order is random, a request placed early can take the room a later one
/// was removed from, so a repair may route fewer requests than were
/// routed before the destroy.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::alns::greedy_repair;
/// use u_dispatch::evaluation::CostEvaluator;
/// use u_dispatch::models::{Location, Problem, Request, Solution, VehicleProfile};
/// use u_dispatch::oracle::HaversineOracle;
///
/// let depot = Location::new(0.0, 0.0);
/// let problem = Problem::new(
///     depot,
///     vec![
///         Request::new(1, "A", 1.0, Location::new(0.0, 0.01)),
///         Request::new(2, "B", 1.0, Location::new(0.0, 0.02)),
///     ],
///     vec![VehicleProfile::new(0, "Van", 10.0)],
/// )
/// .unwrap();
/// let oracle = HaversineOracle::default();
/// let mut eval = CostEvaluator::new(&problem, &oracle);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let repaired = greedy_repair(Solution::empty(problem.vehicles()), &[1, 2], &mut eval, &mut rng).unwrap();
/// assert_eq!(repaired.num_routed(), 2);
/// ```
pub fn greedy_repair<O, R>(
    partial: Solution,
    removed: &[RequestId],
    evaluator: &mut CostEvaluator<'_, O>,
    rng: &mut R,
) -> Result<Solution, RoutingError>
where
    O: RoutingOracle + ?Sized,
    R: Rng + ?Sized,
{
    let problem = evaluator.problem();
    let mut solution = partial;
    let mut loads = solution
        .routes()
        .iter()
        .map(|route| problem.load(route))
        .collect::<Result<Vec<_>, _>>()?;

    let mut order = removed.to_vec();
    order.shuffle(rng);

    for id in order {
        let volume = problem.request(id)?.volume();
        match best_insertion(&solution, &loads, id, volume, evaluator)? {
            Some((ri, pos, _)) => {
                solution.routes_mut()[ri].insert(pos, id);
                loads[ri] += volume;
            }
            None => trace!(request = id, "no vehicle has room; left unrouted"),
        }
    }

    Ok(solution)
}

/// Greedy cheapest insertion as a [`RepairOperator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyInsertion;

impl RepairOperator for GreedyInsertion {
    fn name(&self) -> &str {
        "greedy_insertion"
    }

    fn repair<O, R>(
        &self,
        partial: Solution,
        removed: &[RequestId],
        evaluator: &mut CostEvaluator<'_, O>,
        rng: &mut R,
    ) -> Result<Solution, RoutingError>
    where
        O: RoutingOracle + ?Sized,
        R: Rng + ?Sized,
    {
        greedy_repair(partial, removed, evaluator, rng)
    }
}
