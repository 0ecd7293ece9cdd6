//! Hybrid perturbation for iterated local search.
//!
//! Two phases, both scaled by `strength`:
//!
//! 1. `strength / 2` **exchanges**: sample a few cycle positions and drop the
//!    node with the highest cost among them, then sample a few unselected
//!    nodes and put the cheapest one in its place.
//! 2. `strength` **swaps** of two random cycle positions.
//!
//! A node dropped during phase 1 is not offered again in the same call.

use rand::Rng;

use crate::models::{Instance, Solution};
use crate::moves::Move;

/// Perturbs `solution` in place. Returns the number of moves applied.
///
/// A strength of zero leaves the solution untouched.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::ils::perturb;
/// use u_selective_tsp::models::{Instance, Solution};
/// use u_selective_tsp::random::create_rng;
///
/// let points: Vec<(f64, f64, i64)> = (0..12)
///     .map(|i| (i as f64, (i * i % 7) as f64, i))
///     .collect();
/// let inst = Instance::from_points(&points).unwrap();
/// let mut sol = Solution::from_cycle(&inst, vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let mut rng = create_rng(42);
/// perturb(&inst, &mut sol, 4, 3, 3, &mut rng);
/// assert_eq!(sol.len(), 6);
/// assert!(sol.is_consistent(&inst));
/// ```
pub fn perturb<R: Rng>(
    instance: &Instance,
    solution: &mut Solution,
    strength: usize,
    removal_samples: usize,
    addition_samples: usize,
    rng: &mut R,
) -> usize {
    let mut available = solution.unselected(instance);
    if solution.is_empty() || available.is_empty() {
        return 0;
    }

    let mut applied = 0;
    let exchanges = (strength / 2).min(solution.len()).min(available.len());
    for _ in 0..exchanges {
        if available.is_empty() {
            break;
        }
        let cycle = solution.cycle();
        let mut drop = cycle[rng.random_range(0..cycle.len())];
        for _ in 1..removal_samples {
            let id = cycle[rng.random_range(0..cycle.len())];
            if instance.cost(id) > instance.cost(drop) {
                drop = id;
            }
        }

        let mut pick = rng.random_range(0..available.len());
        for _ in 1..addition_samples {
            let k = rng.random_range(0..available.len());
            if instance.cost(available[k]) < instance.cost(available[pick]) {
                pick = k;
            }
        }
        let add = available.swap_remove(pick);

        if solution.apply(instance, &Move::inter(drop, add)).is_some() {
            applied += 1;
        }
    }

    let n = solution.len();
    if n >= 2 {
        for _ in 0..strength {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if i == j {
                continue;
            }
            if solution.apply(instance, &Move::node_exchange(i, j)).is_some() {
                applied += 1;
            }
        }
    }

    log::trace!("perturbation strength {strength}: {applied} moves");
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn setup() -> (Instance, Solution) {
        let points: Vec<(f64, f64, i64)> = (0..16)
            .map(|i| (((i * 5) % 13) as f64, ((i * 3) % 7) as f64, i as i64))
            .collect();
        let inst = Instance::from_points(&points).expect("valid");
        let sol = Solution::from_cycle(&inst, (0..8).collect()).expect("valid");
        (inst, sol)
    }

    #[test]
    fn test_zero_strength_is_noop() {
        let (inst, mut sol) = setup();
        let before = sol.clone();
        let mut rng = create_rng(1);
        assert_eq!(perturb(&inst, &mut sol, 0, 3, 3, &mut rng), 0);
        assert_eq!(sol, before);
    }

    #[test]
    fn test_exchanges_change_selection() {
        let (inst, mut sol) = setup();
        let mut rng = create_rng(7);
        perturb(&inst, &mut sol, 8, 3, 3, &mut rng);
        let outside = (8..16).filter(|&id| sol.contains(id)).count();
        assert!(outside >= 1);
        assert_eq!(sol.len(), 8);
        assert!(sol.is_consistent(&inst));
    }

    #[test]
    fn test_single_samples_still_exchange() {
        let (inst, mut sol) = setup();
        let mut rng = create_rng(3);
        perturb(&inst, &mut sol, 2, 1, 1, &mut rng);
        assert_eq!((8..16).filter(|&id| sol.contains(id)).count(), 1);
    }

    #[test]
    fn test_complete_instance_without_unselected() {
        let inst = Instance::from_points(&[(0.0, 0.0, 0), (1.0, 0.0, 0)]).expect("valid");
        let mut sol = Solution::from_cycle(&inst, vec![0]).expect("valid");
        let mut rng = create_rng(5);
        // One unselected node: at most one exchange, swaps need two positions.
        perturb(&inst, &mut sol, 6, 3, 3, &mut rng);
        assert_eq!(sol.cycle(), &[1]);
    }

    proptest! {
        #[test]
        fn prop_perturb_keeps_size_and_caches(seed in 0u64..500, strength in 0usize..14) {
            let (inst, mut sol) = setup();
            let mut rng = create_rng(seed);
            perturb(&inst, &mut sol, strength, 3, 3, &mut rng);
            prop_assert_eq!(sol.len(), 8);
            prop_assert!(sol.is_consistent(&inst));
        }
    }
}
