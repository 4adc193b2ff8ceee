//! Minimum spanning trees and cycle detection.
//!
//! Kruskal's algorithm admits edges in increasing [`crate::Edge`] order and keeps
//! each one only if it joins two different components of a [`DisjointSet`].
//! The same structure answers [`has_cycle`].

mod disjoint_set;

use tracing::{Span, debug, field, instrument};

use crate::graph::Graph;

pub use self::disjoint_set::DisjointSet;

/// A minimum spanning forest together with its component count.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    tree: Graph,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest as a graph over every input node.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &Graph { &self.tree }

    /// Consumes the summary and returns the forest graph.
    #[must_use]
    pub fn into_tree(self) -> Graph {
        self.tree
    }

    /// Returns the number of connected components spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of forest edges, `nodes - components`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// Returns the summed weight of the forest edges.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.tree.total_weight()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Returns `true` when `graph` contains a cycle.
///
/// Each logical edge is considered once; identical parallel copies collapse
/// under symmetric equality, but parallel edges of different weights form a
/// cycle. A self-loop is a cycle.
///
/// # Examples
/// ```
/// use weft_core::{Graph, has_cycle};
///
/// let path: Graph = "strict graph\nA -- B;\nB -- C;\n}".parse()?;
/// assert!(!has_cycle(&path));
///
/// let triangle: Graph = "strict graph\nA -- B;\nB -- C;\nC -- A;\n}".parse()?;
/// assert!(has_cycle(&triangle));
/// # Ok::<(), weft_core::ImportError>(())
/// ```
#[must_use]
pub fn has_cycle(graph: &Graph) -> bool {
    let mut components = DisjointSet::make_set(graph.nodes());
    graph
        .unique_edges()
        .iter()
        .any(|edge| !components.try_union(edge.first(), edge.second()))
}

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// Candidate edges are the distinct edges of `graph`, sorted by weight and
/// then by endpoint labels, so the result is deterministic even with tied
/// weights. Self-loops are never admitted.
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(
        nodes = graph.node_count(),
        edges = field::Empty,
        components = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub fn minimum_spanning_forest(graph: &Graph) -> SpanningForest {
    let mut candidates = graph.unique_edges();
    candidates.sort_unstable();

    let mut components = DisjointSet::make_set(graph.nodes());
    let mut tree = graph.without_edges();
    let target = graph.node_count().saturating_sub(1);
    let mut admitted = 0_usize;
    let mut rejected = 0_usize;

    for edge in candidates {
        if admitted == target {
            break;
        }
        if components.try_union(edge.first(), edge.second()) {
            tree.register(edge);
            admitted += 1;
        } else {
            rejected += 1;
        }
    }

    let forest = SpanningForest {
        tree,
        component_count: components.component_count(),
    };
    record_forest(&forest, rejected);
    forest
}

/// Computes a minimum spanning tree of `graph`, or a minimum spanning forest
/// when `graph` is disconnected.
///
/// The result holds every node of `graph` and `nodes - components` edges.
///
/// # Examples
/// ```
/// use weft_core::{Graph, minimum_spanning_tree};
///
/// let cycle: Graph = "strict graph\n\
///     A -- B [weight = 1];\n\
///     B -- C [weight = 2];\n\
///     C -- D [weight = 3];\n\
///     D -- A [weight = 4];\n\
///     }"
///     .parse()?;
/// let tree = minimum_spanning_tree(&cycle);
/// assert_eq!(tree.node_count(), 4);
/// assert_eq!(tree.edge_count(), 3);
/// assert_eq!(tree.total_weight(), 6);
/// # Ok::<(), weft_core::ImportError>(())
/// ```
#[must_use]
pub fn minimum_spanning_tree(graph: &Graph) -> Graph {
    minimum_spanning_forest(graph).into_tree()
}

fn record_forest(forest: &SpanningForest, rejected: usize) {
    let span = Span::current();
    span.record("edges", forest.edge_count());
    span.record("components", forest.component_count());
    span.record("total_weight", forest.total_weight());
    debug!(
        admitted = forest.edge_count(),
        rejected,
        "kruskal finished"
    );
}

/// Edges of `graph` in Kruskal order.
#[cfg(test)]
pub(crate) fn sorted_edges(graph: &Graph) -> Vec<crate::graph::Edge> {
    let mut edges: Vec<_> = graph.edges().cloned().collect();
    edges.sort_unstable();
    edges
}


#[cfg(test)]
mod property;
