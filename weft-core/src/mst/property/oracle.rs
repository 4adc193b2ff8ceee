//! Cycle-check-and-undo spanning forest oracle.
//!
//! Builds the forest edge by edge in the same order Kruskal uses: insert the
//! cheapest remaining edge, run [`has_cycle`] over the whole candidate
//! forest and remove the edge again if it closed a cycle. Quadratic and slow,
//! but it shares no union-find bookkeeping with the real implementation.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{graph::Graph, mst::has_cycle};

/// Forest produced by the oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Forest over every input node.
    pub tree: Graph,
    /// Summed weight of the accepted edges.
    pub total_weight: u64,
}

/// Runs the oracle over `graph`.
pub(super) fn tentative_kruskal(graph: &Graph) -> OracleForest {
    let mut queue: BinaryHeap<_> = graph.unique_edges().into_iter().map(Reverse).collect();
    let mut tree = graph.without_edges();

    while let Some(Reverse(edge)) = queue.pop() {
        if tree.insert_edge(edge.clone()).is_err() {
            continue;
        }
        if has_cycle(&tree) {
            tree.remove_matching_edge(&edge);
        }
    }

    let total_weight = tree.total_weight();
    OracleForest { tree, total_weight }
}
