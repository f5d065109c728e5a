//! Domain model types for delivery dispatch.
//!
//! Requests with volumes, locations, and soft time windows; vehicles with
//! capacities; the immutable per-run problem; the mutable solution
//! representation; and the materialized routes handed back to callers.

mod problem;
mod request;
mod route;
mod solution;
mod vehicle;

pub use problem::Problem;
pub use request::{Location, Request, RequestId, TimeWindow};
pub use route::{Route, Visit};
pub use solution::Solution;
pub use vehicle::{VehicleId, VehicleProfile};
