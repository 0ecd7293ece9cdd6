//! Uniformly random starting solution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Instance, Solution};

/// Selects `ceil(N / 2)` nodes uniformly at random, in random order.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::constructive::random_solution;
/// use u_selective_tsp::random::create_rng;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 1), (3.0, 4.0, 2), (6.0, 8.0, 3), (9.0, 12.0, 4), (1.0, 1.0, 5),
/// ]).unwrap();
/// let sol = random_solution(&inst, &mut create_rng(42));
/// assert_eq!(sol.len(), 3);
/// assert!(sol.is_consistent(&inst));
/// ```
pub fn random_solution<R: Rng>(instance: &Instance, rng: &mut R) -> Solution {
    let mut ids: Vec<usize> = (0..instance.len()).collect();
    ids.shuffle(rng);
    ids.truncate(instance.target_size());

    let mut solution = Solution::empty(instance);
    for (pos, id) in ids.into_iter().enumerate() {
        solution.insert(instance, pos, id);
    }
    solution
}
