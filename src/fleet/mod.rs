//! Fleet sizing for a dispatch run.
//!
//! - [`select_vehicle_set`]: Largest-first capacity cover of the demand

mod selector;

pub use selector::select_vehicle_set;
