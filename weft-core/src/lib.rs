//! Weft core library.
//!
//! An in-memory weighted undirected graph engine: a mutable adjacency-list
//! [`Graph`], an importer for the `strict graph` text dialect, two
//! single-source shortest-path algorithms and a Kruskal minimum spanning tree
//! built on a [`DisjointSet`].
//!
//! # Examples
//! ```
//! use weft_core::{Distance, Graph, heap_shortest_paths, minimum_spanning_tree};
//!
//! let graph: Graph = "strict graph\nA -- B;\nB -- C [weight = 5];\nA -- C [weight = 9];\n}"
//!     .parse()?;
//! let a = graph.node("A").expect("A was declared");
//! let c = graph.node("C").expect("C was declared");
//!
//! let distances = heap_shortest_paths(&graph, a);
//! assert_eq!(distances.get(c), Some(Distance::finite(6)));
//!
//! let tree = minimum_spanning_tree(&graph);
//! assert_eq!(tree.total_weight(), 6);
//! # Ok::<(), weft_core::ImportError>(())
//! ```

mod error;
mod graph;
mod import;
mod mst;
mod shortest_path;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, ImportError, ImportErrorCode},
    graph::{Edge, Graph, Node, Weight},
    import::{export_graph, import_graph, import_graph_from_path, to_dot_string},
    mst::{DisjointSet, SpanningForest, has_cycle, minimum_spanning_forest, minimum_spanning_tree},
    shortest_path::{
        Distance, DistanceMap, ShortestPathAlgorithm, heap_shortest_paths,
        quadratic_shortest_paths, shortest_paths,
    },
};
