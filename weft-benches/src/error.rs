//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use weft_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building the graph rejected an edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The generated graph has no node to start a search from.
    #[error("graph has no node labelled `{label}`")]
    MissingSource {
        /// Label that was looked up.
        label: String,
    },
}
