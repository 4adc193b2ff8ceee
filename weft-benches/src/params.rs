//! Benchmark parameter types.

use std::fmt;

use weft_core::ShortestPathAlgorithm;

/// Parameters for a shortest-path benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct PathBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Average number of edges per node.
    pub degree: usize,
    /// Implementation under test.
    pub algorithm: ShortestPathAlgorithm,
}

impl fmt::Display for PathBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},d={}",
            self.algorithm, self.node_count, self.degree
        )
    }
}

/// Parameters for a spanning-tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Average number of edges per node.
    pub degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.degree)
    }
}
