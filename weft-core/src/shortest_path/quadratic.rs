//! Dijkstra's algorithm with a linear scan for the next node.

use tracing::{Span, debug, field, instrument, warn};

use super::{Distance, DistanceMap, IndexedGraph};
use crate::graph::{Graph, Node};

/// Computes shortest distances from `source` by repeatedly settling the
/// closest unvisited node, found with a linear scan.
///
/// Every node of `graph` appears in the result; unreachable nodes are at
/// [`Distance::INFINITY`]. The search stops once no unvisited node has a
/// finite distance. When `source` is not part of `graph` the result holds
/// only `source` at distance zero.
#[must_use]
#[instrument(
    name = "shortest_path.quadratic",
    skip(graph, source),
    fields(source = %source, nodes = graph.node_count(), settled = field::Empty),
)]
pub fn quadratic_shortest_paths(graph: &Graph, source: &Node) -> DistanceMap {
    let indexed = IndexedGraph::new(graph);
    let Some(start) = indexed.position(source) else {
        warn!(source = %source, "source is not part of the graph");
        return DistanceMap::degenerate(source);
    };

    let mut distances = indexed.initial_distances(start);
    let mut visited = vec![false; indexed.len()];
    let mut settled = 0_usize;

    while let Some(current) = closest_unvisited(&distances, &visited) {
        let Some(base) = distances.get(current).copied() else {
            break;
        };
        if let Some(flag) = visited.get_mut(current) {
            *flag = true;
        }
        settled += 1;

        for &(next, weight) in indexed.neighbours(current) {
            if visited.get(next).copied().unwrap_or(true) {
                continue;
            }
            let candidate = base.saturating_add(weight);
            if let Some(slot) = distances.get_mut(next)
                && candidate < *slot
            {
                *slot = candidate;
            }
        }
    }

    Span::current().record("settled", settled);
    debug!(settled, "quadratic search finished");
    indexed.into_map(source, distances)
}

/// Index of the unvisited node with the smallest finite distance.
fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<usize> {
    distances
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (distance, seen))| !**seen && distance.is_finite())
        .min_by_key(|(_, (distance, _))| **distance)
        .map(|(index, _)| index)
}
