//! Node type.

use serde::{Deserialize, Serialize};

/// A point that may be visited by the tour.
///
/// Nodes are immutable after creation. The id is a stable small integer
/// equal to the node's index in its [`Instance`](super::Instance).
///
/// # Examples
///
/// ```
/// use u_selective_tsp::models::Node;
///
/// let a = Node::new(0, 0.0, 0.0, 10);
/// let b = Node::new(1, 3.0, 4.0, 20);
/// assert_eq!(a.distance_to(&b), 5);
/// assert_eq!(b.cost(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
    cost: i64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64, cost: i64) -> Self {
        Self { id, x, y, cost }
    }

    /// Node id (index in the instance).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Cost paid when this node is part of the tour.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Euclidean distance to another node, rounded to the nearest integer.
    pub fn distance_to(&self, other: &Node) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round() as i64
    }
}
