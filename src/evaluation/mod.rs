//! Cost evaluation and route materialization.
//!
//! Distances and times come from a [`RoutingOracle`](crate::oracle::RoutingOracle)
//! through a per-run [`DistanceCache`](crate::oracle::DistanceCache). Time
//! windows are soft: lateness adds a fixed penalty to a route's distance.

mod evaluator;

pub use evaluator::{CostEvaluator, RouteCost, DEFAULT_LATE_PENALTY};
