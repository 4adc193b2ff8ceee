//! Property 1: agreement with the tentative-insertion oracle.
//!
//! Both constructions visit edges in the same total order, so they must
//! select exactly the same edges, not merely the same total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    mst::{minimum_spanning_forest, sorted_edges},
    test_utils::GraphFixture,
};

use super::oracle::tentative_kruskal;

/// Compares [`minimum_spanning_forest`] with the oracle for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = minimum_spanning_forest(&fixture.graph);
    let oracle = tentative_kruskal(&fixture.graph);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} (shape={:?}, seed={}, nodes={}, edges={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.shape,
            fixture.seed,
            fixture.graph.node_count(),
            fixture.graph.edge_count(),
        )));
    }

    let selected = sorted_edges(forest.tree());
    let expected = sorted_edges(&oracle.tree);
    if selected != expected {
        return Err(TestCaseError::fail(format!(
            "edge selection mismatch: kruskal picked {} edges, oracle {} (shape={:?}, seed={})",
            selected.len(),
            expected.len(),
            fixture.shape,
            fixture.seed,
        )));
    }

    Ok(())
}
