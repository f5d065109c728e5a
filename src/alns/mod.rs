//! Destroy/repair large neighborhood search for delivery dispatch.
//!
//! - [`random_destroy`] / [`RandomRemoval`]: Remove a random fraction of routed requests
//! - [`greedy_repair`] / [`GreedyInsertion`]: Cheapest feasible reinsertion in random order
//! - [`Search`] / [`optimize`]: Simulated-annealing driver over a fixed iteration budget
//! - [`SearchConfig`]: Loop parameters, seed, and lateness penalty
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

mod config;
mod destroy;
mod operator;
mod repair;
mod search;

pub use config::SearchConfig;
pub use destroy::{random_destroy, RandomRemoval};
pub use operator::{DestroyOperator, RepairOperator};
pub use repair::{greedy_repair, GreedyInsertion};
pub use search::{optimize, Search, SearchOutcome, SearchStatistics};
