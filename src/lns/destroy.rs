//! Destroy operators for large neighbourhood search.
//!
//! # Operators
//!
//! - [`ScatteredRemoval`]: Endpoints of random edges, biased toward long edges
//! - [`SubpathRemoval`]: One contiguous run of the cycle
//! - [`MultiSubpathRemoval`]: Two to four shorter runs
//!
//! [`DestroyStrategy`] picks one of them at random for each iteration.
//!
//! # Reference
//!
//! Shaw, P. (1998). "Using Constraint Programming and Local Search Methods
//! to Solve Vehicle Routing Problems", *CP-98*, LNCS 1520, 417-431.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Instance, Solution};

/// Number of nodes to remove from a cycle of `len` nodes.
///
/// `floor(len * fraction)`, at least one when `fraction > 0`, and never the
/// whole cycle. A fraction of zero (or less) removes nothing.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::lns::removal_count;
///
/// assert_eq!(removal_count(100, 0.3), 30);
/// assert_eq!(removal_count(2, 0.3), 1);
/// assert_eq!(removal_count(100, 0.0), 0);
/// assert_eq!(removal_count(10, 1.0), 9);
/// ```
pub fn removal_count(len: usize, fraction: f64) -> usize {
    if fraction <= 0.0 || len < 2 {
        return 0;
    }
    let count = ((len as f64 * fraction).floor() as usize).max(1);
    count.min(len - 1)
}

/// A rule for choosing which selected nodes to remove.
pub trait DestroyOperator {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Picks up to `count` distinct selected nodes to remove.
    fn select<R: Rng>(
        &self,
        instance: &Instance,
        solution: &Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize>;

    /// Removes the selected nodes and returns how many were removed.
    fn destroy<R: Rng>(
        &self,
        instance: &Instance,
        solution: &mut Solution,
        count: usize,
        rng: &mut R,
    ) -> usize {
        let removed = self.select(instance, solution, count, rng);
        solution.remove_nodes(instance, &removed)
    }
}

/// Removes endpoints of random edges.
///
/// Draws a random cycle edge; if it is shorter than the average edge, it is
/// skipped with probability one half. Otherwise one of its two endpoints,
/// chosen by a coin flip, is marked for removal.
pub struct ScatteredRemoval;

impl DestroyOperator for ScatteredRemoval {
    fn name(&self) -> &'static str {
        "scattered_removal"
    }

    fn select<R: Rng>(
        &self,
        instance: &Instance,
        solution: &Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let cycle = solution.cycle();
        let n = cycle.len();
        let count = count.min(n);
        if count == 0 {
            return Vec::new();
        }
        let average = solution.total_distance() as f64 / n as f64;

        let mut marked = vec![false; instance.len()];
        let mut removed = Vec::with_capacity(count);
        while removed.len() < count {
            let idx = rng.random_range(0..n);
            let u = cycle[idx];
            let v = cycle[(idx + 1) % n];
            if (instance.distance(u, v) as f64) < average && rng.random_bool(0.5) {
                continue;
            }
            let pick = if rng.random_bool(0.5) { u } else { v };
            if !marked[pick] {
                marked[pick] = true;
                removed.push(pick);
            }
        }
        removed
    }
}

/// Removes one contiguous run of `count` nodes starting at a random position.
pub struct SubpathRemoval;

impl DestroyOperator for SubpathRemoval {
    fn name(&self) -> &'static str {
        "subpath_removal"
    }

    fn select<R: Rng>(
        &self,
        _instance: &Instance,
        solution: &Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let cycle = solution.cycle();
        let n = cycle.len();
        if n == 0 || count == 0 {
            return Vec::new();
        }
        let start = rng.random_range(0..n);
        (0..count.min(n)).map(|k| cycle[(start + k) % n]).collect()
    }
}

/// Removes two to four runs of `max(1, count / runs)` nodes each, stopping
/// once `count` distinct nodes are marked.
pub struct MultiSubpathRemoval;

impl DestroyOperator for MultiSubpathRemoval {
    fn name(&self) -> &'static str {
        "multi_subpath_removal"
    }

    fn select<R: Rng>(
        &self,
        instance: &Instance,
        solution: &Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        let cycle = solution.cycle();
        let n = cycle.len();
        let count = count.min(n);
        if count == 0 {
            return Vec::new();
        }
        let runs = rng.random_range(2..=4);
        let per_run = (count / runs).max(1);

        let mut marked = vec![false; instance.len()];
        let mut removed = Vec::with_capacity(count);
        for _ in 0..runs {
            if removed.len() >= count {
                break;
            }
            let start = rng.random_range(0..n);
            for k in 0..per_run {
                if removed.len() >= count {
                    break;
                }
                let id = cycle[(start + k) % n];
                if !marked[id] {
                    marked[id] = true;
                    removed.push(id);
                }
            }
        }
        removed
    }
}

/// The destroy operator used for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestroyStrategy {
    /// [`ScatteredRemoval`].
    Scattered,
    /// [`SubpathRemoval`].
    Subpath,
    /// [`MultiSubpathRemoval`].
    MultiSubpath,
}

impl DestroyStrategy {
    /// Draws a strategy: scattered 40%, single subpath 30%, multiple 30%.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        let roll: f64 = rng.random();
        if roll < 0.4 {
            Self::Scattered
        } else if roll < 0.7 {
            Self::Subpath
        } else {
            Self::MultiSubpath
        }
    }

    /// Identifier of the underlying operator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scattered => ScatteredRemoval.name(),
            Self::Subpath => SubpathRemoval.name(),
            Self::MultiSubpath => MultiSubpathRemoval.name(),
        }
    }

    /// Removes `count` nodes with the chosen operator.
    pub fn destroy<R: Rng>(
        &self,
        instance: &Instance,
        solution: &mut Solution,
        count: usize,
        rng: &mut R,
    ) -> usize {
        match self {
            Self::Scattered => ScatteredRemoval.destroy(instance, solution, count, rng),
            Self::Subpath => SubpathRemoval.destroy(instance, solution, count, rng),
            Self::MultiSubpath => MultiSubpathRemoval.destroy(instance, solution, count, rng),
        }
    }
}
