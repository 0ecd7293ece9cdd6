//! Problem instance: nodes plus their distance matrix.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

use super::Node;

/// An immutable selective-TSP instance.
///
/// Holds the node list, the all-pairs distance matrix, and the number of
/// nodes a tour must select (`ceil(N / 2)`). An `Instance` is shared
/// read-only by every engine and is safe to use from many threads at once.
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Instance;
///
/// let inst = Instance::from_points(&[
///     (0.0, 0.0, 5),
///     (0.0, 10.0, 3),
///     (10.0, 10.0, 1),
/// ])
/// .unwrap();
/// assert_eq!(inst.len(), 3);
/// assert_eq!(inst.target_size(), 2);
/// assert_eq!(inst.distance(0, 1), 10);
/// assert_eq!(inst.cost(2), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    target_size: usize,
}

impl Instance {
    /// Builds an instance and computes the rounded Euclidean distance matrix.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than two nodes, if a node id differs from
    /// its index, or if a node has a negative cost or non-finite coordinate.
    pub fn new(nodes: Vec<Node>) -> Result<Self> {
        validate_nodes(&nodes)?;
        let distances = DistanceMatrix::from_nodes(&nodes);
        Ok(Self::assemble(nodes, distances))
    }

    /// Builds an instance from nodes and a precomputed distance matrix.
    ///
    /// # Errors
    ///
    /// Same node checks as [`Instance::new`], plus
    /// [`Error::MatrixSizeMismatch`] when the matrix dimension differs from
    /// the node count. The matrix must have a zero diagonal, no negative
    /// entries, and be symmetric; move deltas rely on all three.
    pub fn with_distances(nodes: Vec<Node>, distances: DistanceMatrix) -> Result<Self> {
        validate_nodes(&nodes)?;
        if distances.size() != nodes.len() {
            return Err(Error::MatrixSizeMismatch {
                expected: nodes.len(),
                found: distances.size(),
            });
        }
        validate_matrix(&distances)?;
        Ok(Self::assemble(nodes, distances))
    }

    /// Builds an instance from `(x, y, cost)` triples, assigning ids by position.
    pub fn from_points(points: &[(f64, f64, i64)]) -> Result<Self> {
        let nodes = points
            .iter()
            .enumerate()
            .map(|(id, &(x, y, cost))| Node::new(id, x, y, cost))
            .collect();
        Self::new(nodes)
    }

    fn assemble(nodes: Vec<Node>, distances: DistanceMatrix) -> Self {
        let target_size = nodes.len().div_ceil(2);
        Self {
            nodes,
            distances,
            target_size,
        }
    }

    /// All nodes, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes (N).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; instances hold at least two nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes a complete tour selects: `ceil(N / 2)`.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Distance between two nodes.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> i64 {
        self.distances.get(a, b)
    }

    /// Visit cost of a node.
    #[inline]
    pub fn cost(&self, id: usize) -> i64 {
        self.nodes[id].cost()
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Length of the closed cycle visiting `cycle` in order.
    pub fn cycle_distance(&self, cycle: &[usize]) -> i64 {
        let n = cycle.len();
        (0..n)
            .map(|i| self.distance(cycle[i], cycle[(i + 1) % n]))
            .sum()
    }
}

fn validate_nodes(nodes: &[Node]) -> Result<()> {
    if nodes.len() < 2 {
        return Err(Error::TooFewNodes { found: nodes.len() });
    }
    for (index, node) in nodes.iter().enumerate() {
        if node.id() != index {
            return Err(Error::NodeIdMismatch {
                index,
                id: node.id(),
            });
        }
        if node.cost() < 0 {
            return Err(Error::NegativeCost {
                id: node.id(),
                cost: node.cost(),
            });
        }
        if !node.x().is_finite() || !node.y().is_finite() {
            return Err(Error::NonFiniteCoordinate { id: node.id() });
        }
    }
    Ok(())
}

fn validate_matrix(distances: &DistanceMatrix) -> Result<()> {
    let n = distances.size();
    for from in 0..n {
        let diagonal = distances.get(from, from);
        if diagonal != 0 {
            return Err(Error::NonZeroDiagonal {
                id: from,
                distance: diagonal,
            });
        }
        for to in 0..n {
            let distance = distances.get(from, to);
            if distance < 0 {
                return Err(Error::NegativeDistance { from, to, distance });
            }
        }
    }
    if !distances.is_symmetric() {
        return Err(Error::AsymmetricMatrix);
    }
    Ok(())
}
