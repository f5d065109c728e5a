//! Destroy/repair search under simulated-annealing acceptance.
//!
//! Each iteration destroys the current solution, repairs it, and compares
//! the candidate against the best cost seen so far. Improvements are always
//! accepted; a worse candidate is accepted with probability
//! `exp(-delta / T)`. The temperature cools geometrically every iteration,
//! accepted or not, and the loop runs for a fixed number of iterations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::constructive::initial_solution;
use crate::error::RoutingError;
use crate::evaluation::CostEvaluator;
use crate::models::{Problem, RequestId, Route, Solution};
use crate::oracle::RoutingOracle;

use super::config::SearchConfig;
use super::destroy::RandomRemoval;
use super::operator::{DestroyOperator, RepairOperator};
use super::repair::GreedyInsertion;

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Iterations actually run.
    pub iterations: usize,
    /// Candidates accepted as the new current solution.
    pub accepted: usize,
    /// Candidates that became the new best.
    pub improvements: usize,
    /// Best cost after each iteration; never increases.
    pub best_cost_history: Vec<f64>,
    /// Temperature after the last iteration.
    pub final_temperature: f64,
    /// Leg lookups served from the run's cache.
    pub cache_hits: usize,
    /// Leg lookups that queried the oracle.
    pub cache_misses: usize,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best solution found.
    pub best: Solution,
    /// Its penalized cost.
    pub best_cost: f64,
    /// The best solution materialized, one route per vehicle.
    pub routes: Vec<Route>,
    /// Requests absent from every route of the best solution.
    pub unrouted: Vec<RequestId>,
    /// Run counters.
    pub statistics: SearchStatistics,
}

/// A configured search over one problem.
///
/// # Examples
///
/// ```
/// use u_dispatch::alns::{Search, SearchConfig};
/// use u_dispatch::models::{Location, Problem, Request, VehicleProfile};
/// use u_dispatch::oracle::HaversineOracle;
///
/// let depot = Location::new(50.45, 30.52);
/// let requests = (1..=6)
///     .map(|i| Request::new(i, format!("R{i}"), 2.0, Location::new(50.45 + i as f64 * 0.01, 30.52)))
///     .collect();
/// let vehicles = vec![VehicleProfile::new(0, "Van", 8.0), VehicleProfile::new(1, "Van", 8.0)];
/// let problem = Problem::new(depot, requests, vehicles).unwrap();
/// let oracle = HaversineOracle::default();
///
/// let config = SearchConfig::default().with_iterations(50).with_seed(42);
/// let outcome = Search::new(&problem, &oracle, config).unwrap().run().unwrap();
/// assert!(outcome.unrouted.is_empty());
/// assert_eq!(outcome.routes.len(), 2);
/// ```
pub struct Search<'a, O: RoutingOracle + ?Sized> {
    problem: &'a Problem,
    oracle: &'a O,
    config: SearchConfig,
    stop: Option<Arc<AtomicBool>>,
}

impl<'a, O: RoutingOracle + ?Sized> Search<'a, O> {
    /// Creates a search, validating the configuration.
    pub fn new(problem: &'a Problem, oracle: &'a O, config: SearchConfig) -> Result<Self, RoutingError> {
        config.validate()?;
        Ok(Self {
            problem,
            oracle,
            config,
            stop: None,
        })
    }

    /// Installs a flag that aborts the run between iterations when set.
    ///
    /// An aborted run still returns the best solution found so far.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs with [`RandomRemoval`] and [`GreedyInsertion`].
    pub fn run(&self) -> Result<SearchOutcome, RoutingError> {
        let destroy = RandomRemoval::new(self.config.destroy_fraction);
        self.run_with(&destroy, &GreedyInsertion)
    }

    fn should_stop(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs with the given operators.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            requests = self.problem.num_requests(),
            vehicles = self.problem.vehicles().len(),
            destroy = destroy.name(),
            repair = repair.name(),
        )
    )]
    pub fn run_with<D, P>(&self, destroy: &D, repair: &P) -> Result<SearchOutcome, RoutingError>
    where
        D: DestroyOperator,
        P: RepairOperator,
    {
        let config = &self.config;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut evaluator =
            CostEvaluator::new(self.problem, self.oracle).with_late_penalty(config.late_penalty);

        let mut current = initial_solution(self.problem);
        let mut best = current.clone();
        let mut best_cost = evaluator.solution_cost(&best)?;
        let mut temperature = config.initial_temperature;
        let mut stats = SearchStatistics {
            best_cost_history: Vec::with_capacity(config.iterations),
            ..SearchStatistics::default()
        };
        debug!(cost = best_cost, routed = best.num_routed(), "initial solution");

        for iteration in 0..config.iterations {
            if self.should_stop() {
                debug!(iteration, "stop requested");
                break;
            }

            let (partial, removed) = destroy.destroy(&current, &mut rng);
            let candidate = repair.repair(partial, &removed, &mut evaluator, &mut rng)?;
            let candidate_cost = evaluator.solution_cost(&candidate)?;

            // Energy reference is the best cost, not the current one.
            let delta = candidate_cost - best_cost;
            let accept = delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp();
            trace!(iteration, candidate_cost, delta, temperature, accept, "candidate evaluated");

            if accept {
                stats.accepted += 1;
                if candidate_cost < best_cost {
                    best = candidate.clone();
                    best_cost = candidate_cost;
                    stats.improvements += 1;
                    debug!(iteration, cost = best_cost, "new best");
                }
                current = candidate;
            }

            temperature *= config.cooling_rate;
            stats.iterations += 1;
            stats.best_cost_history.push(best_cost);
        }

        stats.final_temperature = temperature;
        let routes = evaluator.materialize(&best)?;
        let unrouted = best.unrouted(self.problem);
        stats.cache_hits = evaluator.cache().hits();
        stats.cache_misses = evaluator.cache().misses();

        if !unrouted.is_empty() {
            warn!(count = unrouted.len(), "requests left unrouted");
        }
        debug!(
            cost = best_cost,
            iterations = stats.iterations,
            accepted = stats.accepted,
            improvements = stats.improvements,
            "search finished"
        );

        Ok(SearchOutcome {
            best,
            best_cost,
            routes,
            unrouted,
            statistics: stats,
        })
    }
}

/// Runs the default search over `problem`.
pub fn optimize<O: RoutingOracle + ?Sized>(
    problem: &Problem,
    oracle: &O,
    config: SearchConfig,
) -> Result<SearchOutcome, RoutingError> {
    Search::new(problem, oracle, config)?.run()
}
