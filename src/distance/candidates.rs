//! Candidate lists: each node's k most promising neighbours.

use crate::models::Instance;

/// Per-node list of the `k` nodes with the smallest `distance + cost`.
///
/// Built once per instance in O(N² log N) and read-only afterwards. Local
/// search uses it to cut each scan from O(N²) to O(N·k) moves.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
/// use u_selective_tsp::distance::CandidateTable;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 0),
///     (1.0, 0.0, 100),
///     (5.0, 0.0, 0),
///     (9.0, 0.0, 0),
/// ]).unwrap();
/// let table = CandidateTable::build(&inst, 2);
/// // Node 1 is closest but expensive.
/// assert_eq!(table.neighbors(0), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateTable {
    neighbors: Vec<Vec<usize>>,
    k: usize,
}

impl CandidateTable {
    /// Computes the candidate lists, keeping at most `k` per node.
    ///
    /// Ties are broken by node id so the table is deterministic.
    pub fn build(instance: &Instance, k: usize) -> Self {
        let n = instance.len();
        let neighbors = (0..n)
            .map(|i| {
                let mut others: Vec<(i64, usize)> = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| (instance.distance(i, j) + instance.cost(j), j))
                    .collect();
                others.sort_unstable();
                others.truncate(k);
                others.into_iter().map(|(_, j)| j).collect()
            })
            .collect();
        Self { neighbors, k }
    }

    /// Candidates of a node, best first.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }

    /// Requested list size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the table covers no nodes.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
