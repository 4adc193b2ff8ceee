//! Path lengths and per-run distance maps.

use std::{collections::BTreeMap, fmt};

use crate::graph::{Node, Weight};

/// Length of a shortest path, or [`Distance::INFINITY`] when no path exists.
///
/// Ordering places every finite distance below the sentinel.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Distance(u64);

impl Distance {
    /// Distance from a node to itself.
    pub const ZERO: Self = Self(0);

    /// Sentinel for unreachable nodes.
    pub const INFINITY: Self = Self(u64::MAX);

    /// Wraps a finite path length. `u64::MAX` is reserved for
    /// [`Distance::INFINITY`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn finite(length: u64) -> Self { Self(length) }

    /// Returns `true` unless this is the unreachable sentinel.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 != u64::MAX
    }

    /// Returns the path length, or `None` for unreachable nodes.
    #[must_use]
    pub const fn value(self) -> Option<u64> {
        if self.is_finite() { Some(self.0) } else { None }
    }

    /// Extends the path by an edge of `weight`. Infinity absorbs, and the
    /// sum saturates at the sentinel.
    #[must_use]
    pub const fn saturating_add(self, weight: Weight) -> Self {
        if self.is_finite() {
            Self(self.0.saturating_add(weight as u64))
        } else {
            Self::INFINITY
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(length) => write!(f, "{length}"),
            None => f.write_str("inf"),
        }
    }
}

/// Shortest distances from one source to every node of a graph.
///
/// Entries iterate in label order. Unreachable nodes are present at
/// [`Distance::INFINITY`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistanceMap {
    source: Node,
    distances: BTreeMap<Node, Distance>,
}

impl DistanceMap {
    pub(super) fn new(source: Node, distances: BTreeMap<Node, Distance>) -> Self {
        Self { source, distances }
    }

    /// Map for a source that is not part of the graph: only the source
    /// itself, at distance zero.
    pub(super) fn degenerate(source: &Node) -> Self {
        Self {
            source: source.clone(),
            distances: BTreeMap::from([(source.clone(), Distance::ZERO)]),
        }
    }

    /// Returns the node the distances were measured from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &Node { &self.source }

    /// Returns the distance to `node`, or `None` if the node was not part
    /// of the graph.
    #[must_use]
    pub fn get(&self, node: &Node) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Iterates over `(node, distance)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, Distance)> {
        self.distances.iter().map(|(node, distance)| (node, *distance))
    }

    /// Iterates over the nodes with a finite distance, the source included.
    pub fn reachable(&self) -> impl Iterator<Item = (&Node, u64)> {
        self.distances
            .iter()
            .filter_map(|(node, distance)| distance.value().map(|length| (node, length)))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the map has no entries. Maps produced by the
    /// shortest-path functions always hold at least the source.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
