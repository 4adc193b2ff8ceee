//! Undirected weighted edges with symmetric equality.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::Node;

/// Edge weight. Weights are non-negative integers.
pub type Weight = u32;

/// An undirected edge joining two nodes with an integer weight.
///
/// Equality is symmetric: `(a, b, w)` equals `(b, a, w)`, and the weights
/// must match. Hashing and ordering agree with that equality, so the two
/// adjacency-list copies of one logical edge collapse under de-duplication.
///
/// # Examples
/// ```
/// use weft_core::{Edge, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// assert_eq!(Edge::new(a.clone(), b.clone(), 3), Edge::new(b.clone(), a.clone(), 3));
/// assert_ne!(Edge::new(a.clone(), b.clone(), 3), Edge::new(a, b, 4));
/// ```
#[derive(Clone, Debug)]
pub struct Edge {
    first: Node,
    second: Node,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `first` and `second`.
    #[must_use]
    pub fn new(first: Node, second: Node, weight: Weight) -> Self {
        Self {
            first,
            second,
            weight,
        }
    }

    /// Returns the endpoint supplied first at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn first(&self) -> &Node { &self.first }

    /// Returns the endpoint supplied second at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn second(&self) -> &Node { &self.second }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the endpoints ordered by label, `(min, max)`.
    #[must_use]
    pub fn canonical_endpoints(&self) -> (&Node, &Node) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub fn has_endpoint(&self, node: &Node) -> bool {
        self.first == *node || self.second == *node
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint. A self-loop returns the node itself.
    #[must_use]
    pub fn other_endpoint(&self, node: &Node) -> Option<&Node> {
        if self.first == *node {
            Some(&self.second)
        } else if self.second == *node {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Returns `true` when the edge joins `left` and `right`, in either order.
    #[must_use]
    pub fn joins(&self, left: &Node, right: &Node) -> bool {
        (self.first == *left && self.second == *right)
            || (self.first == *right && self.second == *left)
    }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.first == self.second
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.joins(&other.first, &other.second)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (low, high) = self.canonical_endpoints();
        low.hash(state);
        high.hash(state);
        self.weight.hash(state);
    }
}

/// Orders by weight, then by canonical endpoints.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        let (low, high) = self.canonical_endpoints();
        let (other_low, other_high) = other.canonical_endpoints();
        self.weight
            .cmp(&other.weight)
            .then_with(|| low.cmp(other_low))
            .then_with(|| high.cmp(other_high))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -- {} [weight = {}]",
            self.first, self.second, self.weight
        )
    }
}
