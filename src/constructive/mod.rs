//! Constructive heuristics for building the initial dispatch solution.
//!
//! - [`initial_solution`]: First-fit packing in time-window order, O(n log n + n·m)

mod first_fit;

pub use first_fit::initial_solution;
