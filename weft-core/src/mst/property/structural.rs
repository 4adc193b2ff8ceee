//! Property 2: structural invariants of the spanning forest.
//!
//! - the forest is acyclic;
//! - it keeps every input node and has `nodes - components` edges;
//! - its component count matches the input's connectivity;
//! - every forest edge is an input edge;
//! - cycle optimality: no input edge is lighter than the heaviest forest
//!   edge on the path between its endpoints.

use std::collections::{BTreeMap, VecDeque};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::{Graph, Node, Weight},
    mst::{DisjointSet, SpanningForest, has_cycle, minimum_spanning_forest},
    test_utils::GraphFixture,
};

/// Checks every structural invariant for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = minimum_spanning_forest(&fixture.graph);
    let context = || {
        format!(
            "shape={:?}, seed={}, nodes={}",
            fixture.shape,
            fixture.seed,
            fixture.graph.node_count()
        )
    };

    if has_cycle(forest.tree()) {
        return Err(TestCaseError::fail(format!("forest has a cycle ({})", context())));
    }
    validate_nodes(&fixture.graph, &forest).map_err(|msg| fail(&msg, &context()))?;
    validate_edge_count(&fixture.graph, &forest).map_err(|msg| fail(&msg, &context()))?;
    validate_edges_exist(&fixture.graph, &forest).map_err(|msg| fail(&msg, &context()))?;
    validate_cycle_optimality(&fixture.graph, forest.tree())
        .map_err(|msg| fail(&msg, &context()))?;
    Ok(())
}

fn fail(message: &str, context: &str) -> TestCaseError {
    TestCaseError::fail(format!("{message} ({context})"))
}

fn validate_nodes(graph: &Graph, forest: &SpanningForest) -> Result<(), String> {
    if graph.nodes().eq(forest.tree().nodes()) {
        Ok(())
    } else {
        Err("forest node set differs from the input".to_owned())
    }
}

fn validate_edge_count(graph: &Graph, forest: &SpanningForest) -> Result<(), String> {
    let mut components = DisjointSet::make_set(graph.nodes());
    for edge in graph.edges() {
        components.union(edge.first(), edge.second());
    }
    let expected_components = components.component_count();
    if forest.component_count() != expected_components {
        return Err(format!(
            "component count {} but input has {expected_components}",
            forest.component_count()
        ));
    }
    let expected_edges = graph.node_count() - expected_components;
    if forest.edge_count() != expected_edges {
        return Err(format!(
            "forest has {} edges, expected {expected_edges}",
            forest.edge_count()
        ));
    }
    Ok(())
}

fn validate_edges_exist(graph: &Graph, forest: &SpanningForest) -> Result<(), String> {
    let input = graph.unique_edges();
    match forest.tree().edges().find(|edge| !input.contains(edge)) {
        Some(edge) => Err(format!("forest edge {edge} is not an input edge")),
        None => Ok(()),
    }
}

fn validate_cycle_optimality(graph: &Graph, tree: &Graph) -> Result<(), String> {
    for edge in graph.edges().filter(|edge| !edge.is_self_loop()) {
        let Some(heaviest) = heaviest_on_path(tree, edge.first(), edge.second()) else {
            return Err(format!("{edge} joins nodes the forest leaves apart"));
        };
        if edge.weight() < heaviest {
            return Err(format!(
                "{edge} is lighter than the heaviest forest edge ({heaviest}) it would replace"
            ));
        }
    }
    Ok(())
}

/// Heaviest edge weight on the unique forest path from `from` to `to`, or
/// `None` when no path exists.
fn heaviest_on_path(tree: &Graph, from: &Node, to: &Node) -> Option<Weight> {
    let mut heaviest: BTreeMap<&Node, Weight> = BTreeMap::from([(from, 0)]);
    let mut frontier = VecDeque::from([from]);
    while let Some(current) = frontier.pop_front() {
        let so_far = heaviest.get(current).copied().unwrap_or_default();
        for (next, weight) in tree.neighbours(current) {
            if !heaviest.contains_key(next) {
                heaviest.insert(next, so_far.max(weight));
                frontier.push_back(next);
            }
        }
    }
    heaviest.get(to).copied()
}
