//! Destroy and repair operator traits.

use rand::Rng;

use crate::error::RoutingError;
use crate::evaluation::CostEvaluator;
use crate::models::{RequestId, Solution};
use crate::oracle::RoutingOracle;

/// Removes part of a solution to open up a neighborhood.
pub trait DestroyOperator {
    /// Operator name, for logs.
    fn name(&self) -> &str;

    /// Returns the reduced solution and the IDs that were removed.
    ///
    /// Must not fail on a solution with no routed requests; it returns the
    /// solution unchanged and an empty removal list instead.
    fn destroy<R: Rng + ?Sized>(
        &self,
        solution: &Solution,
        rng: &mut R,
    ) -> (Solution, Vec<RequestId>);
}

/// Puts removed requests back into a partial solution.
pub trait RepairOperator {
    /// Operator name, for logs.
    fn name(&self) -> &str;

    /// Reinserts `removed` into `partial`.
    ///
    /// Requests that fit in no vehicle stay out of the result.
    fn repair<O, R>(
        &self,
        partial: Solution,
        removed: &[RequestId],
        evaluator: &mut CostEvaluator<'_, O>,
        rng: &mut R,
    ) -> Result<Solution, RoutingError>
    where
        O: RoutingOracle + ?Sized,
        R: Rng + ?Sized;
}
