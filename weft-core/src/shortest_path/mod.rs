//! Single-source shortest paths over non-negative integer weights.
//!
//! Two interchangeable implementations of Dijkstra's algorithm are provided:
//! [`quadratic_shortest_paths`] scans every unvisited node for the next
//! minimum, while [`heap_shortest_paths`] keeps a binary min-heap with lazy
//! decrease-key. Both produce identical [`DistanceMap`]s.

mod distance;
mod heap;
mod quadratic;

use std::fmt;

use crate::graph::{Graph, Node, Weight};

pub use self::{
    distance::{Distance, DistanceMap},
    heap::heap_shortest_paths,
    quadratic::quadratic_shortest_paths,
};

/// Selects the shortest-path implementation used by [`shortest_paths`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ShortestPathAlgorithm {
    /// Linear minimum scan over the unvisited nodes, `O(V²)`.
    Quadratic,
    /// Binary heap with lazy decrease-key, `O((V + E) log V)`.
    #[default]
    Heap,
}

impl ShortestPathAlgorithm {
    /// Returns the stable lowercase name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quadratic => "quadratic",
            Self::Heap => "heap",
        }
    }
}

impl fmt::Display for ShortestPathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes shortest distances from `source` with the chosen `algorithm`.
///
/// # Examples
/// ```
/// use weft_core::{Distance, Graph, ShortestPathAlgorithm, shortest_paths};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(&a, &b, 2)?;
///
/// for algorithm in [ShortestPathAlgorithm::Quadratic, ShortestPathAlgorithm::Heap] {
///     let distances = shortest_paths(&graph, &a, algorithm);
///     assert_eq!(distances.get(&b), Some(Distance::finite(2)));
///     assert_eq!(distances.get(&c), Some(Distance::INFINITY));
/// }
/// # Ok::<(), weft_core::GraphError>(())
/// ```
#[must_use]
pub fn shortest_paths(
    graph: &Graph,
    source: &Node,
    algorithm: ShortestPathAlgorithm,
) -> DistanceMap {
    match algorithm {
        ShortestPathAlgorithm::Quadratic => quadratic_shortest_paths(graph, source),
        ShortestPathAlgorithm::Heap => heap_shortest_paths(graph, source),
    }
}

/// Dense view of a graph: nodes in label order and, per node, the
/// `(neighbour index, weight)` pairs of its incident edges.
struct IndexedGraph<'a> {
    nodes: Vec<&'a Node>,
    neighbours: Vec<Vec<(usize, Weight)>>,
}

impl<'a> IndexedGraph<'a> {
    fn new(graph: &'a Graph) -> Self {
        let nodes: Vec<&Node> = graph.nodes().collect();
        let neighbours = nodes
            .iter()
            .map(|node| {
                graph
                    .neighbours(node)
                    .filter_map(|(other, weight)| {
                        nodes
                            .binary_search(&other)
                            .ok()
                            .map(|index| (index, weight))
                    })
                    .collect()
            })
            .collect();
        Self { nodes, neighbours }
    }

    /// Nodes are sorted by label, so lookup is a binary search.
    fn position(&self, node: &Node) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn neighbours(&self, index: usize) -> &[(usize, Weight)] {
        self.neighbours
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Initial distances: infinite everywhere except `start`.
    fn initial_distances(&self, start: usize) -> Vec<Distance> {
        let mut distances = vec![Distance::INFINITY; self.len()];
        if let Some(slot) = distances.get_mut(start) {
            *slot = Distance::ZERO;
        }
        distances
    }

    fn into_map(self, source: &Node, distances: Vec<Distance>) -> DistanceMap {
        let entries = self
            .nodes
            .into_iter()
            .zip(distances)
            .map(|(node, distance)| (node.clone(), distance))
            .collect();
        DistanceMap::new(source.clone(), entries)
    }
}


#[cfg(test)]
mod property;
