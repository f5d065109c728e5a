//! Destroy operators.
//!
//! - [`RandomRemoval`]: Removes a uniformly random fraction of routed requests

use fxhash::FxHashSet;
use rand::seq::index;
use rand::Rng;

use crate::models::{RequestId, Solution};

use super::operator::DestroyOperator;

/// Removes `max(1, floor(routed · fraction))` distinct routed requests,
/// drawn uniformly without replacement.
///
/// A solution with nothing routed is returned unchanged with an empty
/// removal list.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::alns::random_destroy;
/// use u_dispatch::models::Solution;
///
/// let sol = Solution::from_routes(vec![(0, (1..=6).collect()), (1, (7..=10).collect())]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let (partial, removed) = random_destroy(&sol, 0.2, &mut rng);
/// assert_eq!(removed.len(), 2);
/// assert_eq!(partial.num_routed(), 8);
/// ```
pub fn random_destroy<R: Rng + ?Sized>(
    solution: &Solution,
    fraction: f64,
    rng: &mut R,
) -> (Solution, Vec<RequestId>) {
    let routed: Vec<RequestId> = solution.routed().collect();
    if routed.is_empty() {
        return (solution.clone(), Vec::new());
    }

    let num_remove = ((routed.len() as f64 * fraction).floor() as usize)
        .max(1)
        .min(routed.len());
    let targets: FxHashSet<RequestId> = index::sample(rng, routed.len(), num_remove)
        .into_iter()
        .map(|i| routed[i])
        .collect();

    let mut partial = solution.clone();
    let removed = partial.remove_all(&targets);
    (partial, removed)
}

/// [`random_destroy`] with a fixed removal fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomRemoval {
    fraction: f64,
}

impl RandomRemoval {
    /// Creates the operator with the given removal fraction.
    pub fn new(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Fraction of routed requests removed per call.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl Default for RandomRemoval {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl DestroyOperator for RandomRemoval {
    fn name(&self) -> &str {
        "random_removal"
    }

    fn destroy<R: Rng + ?Sized>(
        &self,
        solution: &Solution,
        rng: &mut R,
    ) -> (Solution, Vec<RequestId>) {
        random_destroy(solution, self.fraction, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn ten_routed() -> Solution {
        Solution::from_routes(vec![
            (0, vec![1, 2, 3, 4]),
            (1, vec![5, 6, 7]),
            (2, vec![8, 9, 10]),
        ])
    }

    #[test]
    fn test_removes_fraction() {
        let sol = ten_routed();
        let mut rng = StdRng::seed_from_u64(42);
        let (partial, removed) = random_destroy(&sol, 0.2, &mut rng);
        assert_eq!(removed.len(), 2);
        assert_eq!(partial.num_routed(), 8);
    }

    #[test]
    fn test_removes_at_least_one() {
        let sol = Solution::from_routes(vec![(0, vec![1, 2])]);
        let mut rng = StdRng::seed_from_u64(7);
        let (partial, removed) = random_destroy(&sol, 0.2, &mut rng);
        assert_eq!(removed.len(), 1);
        assert_eq!(partial.num_routed(), 1);
    }

    #[test]
    fn test_empty_solution_is_noop() {
        let sol = Solution::from_routes(vec![(0, vec![]), (1, vec![])]);
        let mut rng = StdRng::seed_from_u64(1);
        let (partial, removed) = random_destroy(&sol, 0.2, &mut rng);
        assert!(removed.is_empty());
        assert_eq!(partial, sol);
    }

    #[test]
    fn test_removal_preserves_all_requests() {
        let sol = ten_routed();
        let mut rng = StdRng::seed_from_u64(3);
        let (partial, removed) = RandomRemoval::new(0.5).destroy(&sol, &mut rng);
        assert_eq!(removed.len(), 5);
        let mut all: Vec<RequestId> = partial.routed().chain(removed.iter().copied()).collect();
        all.sort();
        assert_eq!(all, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_relative_order_kept() {
        let sol = ten_routed();
        let mut rng = StdRng::seed_from_u64(11);
        let (partial, _) = random_destroy(&sol, 0.3, &mut rng);
        for route in partial.routes() {
            assert!(route.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_same_seed_same_removal() {
        let sol = ten_routed();
        let a = random_destroy(&sol, 0.4, &mut StdRng::seed_from_u64(5));
        let b = random_destroy(&sol, 0.4, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_fraction_empties_solution() {
        let sol = ten_routed();
        let mut rng = StdRng::seed_from_u64(9);
        let (partial, removed) = random_destroy(&sol, 1.0, &mut rng);
        assert_eq!(removed.len(), 10);
        assert_eq!(partial.num_routed(), 0);
    }
}
