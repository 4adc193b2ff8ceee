//! Dijkstra's algorithm over a binary min-heap with lazy decrease-key.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{Span, debug, field, instrument, warn};

use super::{Distance, DistanceMap, IndexedGraph};
use crate::graph::{Graph, Node};

/// Computes shortest distances from `source` using a binary min-heap.
///
/// Improved neighbours are pushed again instead of being updated in place;
/// a popped entry whose distance exceeds the best known distance is stale
/// and skipped. The search ends when the heap drains or an infinite entry
/// surfaces. Results match [`super::quadratic_shortest_paths`] exactly.
#[must_use]
#[instrument(
    name = "shortest_path.heap",
    skip(graph, source),
    fields(
        source = %source,
        nodes = graph.node_count(),
        pushes = field::Empty,
        stale = field::Empty,
    ),
)]
pub fn heap_shortest_paths(graph: &Graph, source: &Node) -> DistanceMap {
    let indexed = IndexedGraph::new(graph);
    let Some(start) = indexed.position(source) else {
        warn!(source = %source, "source is not part of the graph");
        return DistanceMap::degenerate(source);
    };

    let mut distances = indexed.initial_distances(start);
    let mut heap = BinaryHeap::from([Reverse((Distance::ZERO, start))]);
    let mut pushes = 1_usize;
    let mut stale = 0_usize;

    while let Some(Reverse((distance, current))) = heap.pop() {
        if !distance.is_finite() {
            break;
        }
        let best = distances.get(current).copied().unwrap_or(Distance::INFINITY);
        if distance > best {
            stale += 1;
            continue;
        }

        for &(next, weight) in indexed.neighbours(current) {
            let candidate = distance.saturating_add(weight);
            if let Some(slot) = distances.get_mut(next)
                && candidate < *slot
            {
                *slot = candidate;
                heap.push(Reverse((candidate, next)));
                pushes += 1;
            }
        }
    }

    let span = Span::current();
    span.record("pushes", pushes);
    span.record("stale", stale);
    debug!(pushes, stale, "heap search finished");
    indexed.into_map(source, distances)
}
