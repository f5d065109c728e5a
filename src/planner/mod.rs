//! Problem assembly and result interface for callers such as an HTTP layer.
//!
//! - [`PlanInput`]: depot, requests and fleet, with an optional vehicle restriction
//! - [`plan_routes`]: selects vehicles and runs the search
//! - [`PlanResult`]: per-vehicle routes plus the requests left unrouted

mod plan;

pub use plan::{plan_routes, PlanInput, PlanResult};
