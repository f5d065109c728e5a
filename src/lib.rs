//! # u-dispatch
//!
//! Delivery dispatch optimization: assigns volume-bearing requests with
//! preferred time windows to a capacity-limited fleet leaving from and
//! returning to one depot, minimizing travel distance. Capacity is a hard
//! constraint; time windows are soft and penalized.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Request, VehicleProfile, Problem, Solution, Route)
//! - [`oracle`]: Routing oracle interface, reference oracles and the per-run leg cache
//! - [`evaluation`]: Soft time-window route cost and route materialization
//! - [`constructive`]: First-fit initial solution
//! - [`alns`]: Destroy/repair operators and the simulated-annealing search loop
//! - [`fleet`]: Vehicle set selection
//! - [`planner`]: Problem assembly and result interface
//! - [`error`]: Error types

pub mod alns;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod fleet;
pub mod models;
pub mod oracle;
pub mod planner;
