//! Seeded synthetic graphs for benchmarking.
//!
//! Provides [`SyntheticGraph`], a connected random graph whose nodes are
//! labelled `v0`, `v1`, and so on. Generation is seeded so every benchmark
//! run measures the same input.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use weft_core::{Graph, GraphError, Node, Weight};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested weight ceiling was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The graph rejected a generated edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Target number of edges per node. The generated graph holds at most
    /// `node_count * edges_per_node` edges and never fewer than a spanning
    /// tree.
    pub edges_per_node: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph for benchmarking.
///
/// Every node after the first is attached to a random earlier node, which
/// makes the graph connected; the remaining edge budget is spent on random
/// chords between distinct nodes.
///
/// # Examples
///
/// ```
/// use weft_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { node_count: 10, edges_per_node: 3, max_weight: 9, seed: 42 };
/// let synthetic = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(synthetic.graph().node_count(), 10);
/// assert!(synthetic.source().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
}

impl SyntheticGraph {
    /// Generates a graph eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero, or
    /// [`SyntheticError::ZeroMaxWeight`] if `max_weight` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if config.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = Graph::new();
        let nodes: Vec<Node> = (0..config.node_count)
            .map(|index| graph.add_node(&label(index)))
            .collect();

        for (index, node) in nodes.iter().enumerate().skip(1) {
            if let Some(anchor) = nodes.get(rng.gen_range(0..index)) {
                graph.add_edge(anchor, node, rng.gen_range(1..=config.max_weight))?;
            }
        }

        let spanning = config.node_count - 1;
        let chords = config
            .node_count
            .saturating_mul(config.edges_per_node)
            .saturating_sub(spanning);
        for _ in 0..chords {
            let left = rng.gen_range(0..config.node_count);
            let right = rng.gen_range(0..config.node_count);
            if left == right {
                continue;
            }
            if let (Some(first), Some(second)) = (nodes.get(left), nodes.get(right)) {
                graph.add_edge(first, second, rng.gen_range(1..=config.max_weight))?;
            }
        }

        Ok(Self { graph })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the first generated node, a convenient search origin.
    #[must_use]
    pub fn source(&self) -> Option<&Node> {
        self.graph.node(&label(0))
    }
}

fn label(index: usize) -> String {
    format!("v{index}")
}
