//! Properties: both shortest-path variants agree, and their distances are
//! neither too long nor too short.

use proptest::{
    prop_assert, prop_assert_eq, proptest,
    test_runner::{TestCaseError, TestCaseResult},
};
use rstest::rstest;

use super::{Distance, DistanceMap, heap_shortest_paths, quadratic_shortest_paths};
use crate::graph::Graph;
use crate::test_utils::{
    GraphFixture, GraphShape, generate_fixture, graph_fixture_strategy, suite_proptest_config,
};

fn run_variant_equivalence(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    for source in graph.nodes() {
        let quadratic = quadratic_shortest_paths(graph, source);
        let heap = heap_shortest_paths(graph, source);
        if quadratic != heap {
            return Err(TestCaseError::fail(format!(
                "variants disagree from {source} (shape={:?}, seed={}, nodes={}, edges={})",
                fixture.shape,
                fixture.seed,
                graph.node_count(),
                graph.edge_count(),
            )));
        }
        prop_assert_eq!(heap.len(), graph.node_count());
        prop_assert_eq!(heap.get(source), Some(Distance::ZERO));
    }
    Ok(())
}

/// Every edge is a triangle-inequality witness: `d(v) <= d(u) + w`.
fn run_edge_relaxation(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let Some(source) = graph.nodes().next() else {
        return Ok(());
    };
    let distances = heap_shortest_paths(graph, source);
    for edge in graph.edges() {
        let first = distances.get(edge.first()).unwrap_or(Distance::INFINITY);
        let second = distances.get(edge.second()).unwrap_or(Distance::INFINITY);
        prop_assert!(second <= first.saturating_add(edge.weight()), "{edge} is not relaxed");
        prop_assert!(first <= second.saturating_add(edge.weight()), "{edge} is not relaxed");
    }
    Ok(())
}

/// Every finite distance other than the source's is witnessed by a tight
/// edge: some neighbour `u` with `d(v) == d(u) + w`. Rules out maps that
/// underestimate.
fn run_tight_predecessors(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    for source in graph.nodes() {
        check_tight_predecessors(graph, &heap_shortest_paths(graph, source)).map_err(|err| {
            TestCaseError::fail(format!(
                "{err} (shape={:?}, seed={})",
                fixture.shape, fixture.seed
            ))
        })?;
    }
    Ok(())
}

fn check_tight_predecessors(graph: &Graph, distances: &DistanceMap) -> TestCaseResult {
    let source = distances.source();
    for (node, length) in distances.reachable() {
        if node == source {
            prop_assert_eq!(length, 0);
            continue;
        }
        let target = Distance::finite(length);
        let witnessed = graph.neighbours(node).any(|(other, weight)| {
            distances
                .get(other)
                .is_some_and(|distance| distance.saturating_add(weight) == target)
        });
        prop_assert!(
            witnessed,
            "{node} at {length} from {source} has no tight predecessor"
        );
    }
    Ok(())
}

#[test]
fn underestimated_distances_are_caught() {
    let graph: Graph = "strict graph\nA -- B [weight = 2];\nB -- C [weight = 3];\n}"
        .parse()
        .expect("valid graph");
    let source = graph.node("A").expect("A declared").clone();
    check_tight_predecessors(&graph, &heap_shortest_paths(&graph, &source))
        .expect("exact distances are attained");

    let zeroed = graph
        .nodes()
        .map(|node| (node.clone(), Distance::ZERO))
        .collect();
    let underestimate = DistanceMap::new(source, zeroed);
    assert!(check_tight_predecessors(&graph, &underestimate).is_err());

    let shortened = graph
        .nodes()
        .map(|node| {
            let length = match node.label() {
                "A" => 0,
                "B" => 2,
                _ => 4,
            };
            (node.clone(), Distance::finite(length))
        })
        .collect();
    let underestimate = DistanceMap::new(graph.node("A").expect("A declared").clone(), shortened);
    assert!(check_tight_predecessors(&graph, &underestimate).is_err());
}

#[rstest]
#[case::sparse(GraphShape::Sparse, 11)]
#[case::dense(GraphShape::Dense, 23)]
#[case::ties(GraphShape::ManyIdentical, 37)]
#[case::disconnected(GraphShape::Disconnected, 41)]
#[case::multigraph(GraphShape::Multigraph, 53)]
fn variants_agree_on_seeded_graphs(#[case] shape: GraphShape, #[case] seed: u64) {
    let fixture = generate_fixture(shape, seed);
    run_variant_equivalence(&fixture).expect("variants must agree");
    run_edge_relaxation(&fixture).expect("distances must be relaxed");
    run_tight_predecessors(&fixture).expect("distances must be attained");
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn variants_agree(fixture in graph_fixture_strategy()) {
        run_variant_equivalence(&fixture)?;
    }

    #[test]
    fn distances_are_fully_relaxed(fixture in graph_fixture_strategy()) {
        run_edge_relaxation(&fixture)?;
    }

    #[test]
    fn distances_are_attained_by_an_edge(fixture in graph_fixture_strategy()) {
        run_tight_predecessors(&fixture)?;
    }
}
