//! Mutable adjacency-list graph model.
//!
//! A [`Graph`] maps every [`Node`] to the sequence of [`Edge`]s incident to
//! it. Each edge is registered at both endpoints (a self-loop once), and every
//! removal prunes both sides so the registration stays symmetric.

mod edge;
mod node;

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use tracing::trace;

use crate::error::GraphError;

pub use self::{
    edge::{Edge, Weight},
    node::Node,
};

/// Weighted undirected graph stored as an adjacency list.
///
/// Nodes iterate in label order, so every traversal over the same graph is
/// deterministic.
///
/// # Examples
/// ```
/// use weft_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(&a, &b, 4)?;
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.total_weight(), 4);
/// # Ok::<(), weft_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<Node, Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node labelled `label`, registering it with an empty edge
    /// list if absent. Repeated labels return the existing node.
    pub fn add_node(&mut self, label: &str) -> Node {
        if let Some((node, _)) = self.adjacency.get_key_value(label) {
            return node.clone();
        }
        let node = Node::new(label);
        self.adjacency.insert(node.clone(), Vec::new());
        node
    }

    /// Removes `node` and every edge that has it as an endpoint.
    ///
    /// Returns `false` when the node was not part of the graph.
    pub fn remove_node(&mut self, node: &Node) -> bool {
        let Some(incident) = self.adjacency.remove(node) else {
            return false;
        };
        for neighbour in incident.iter().filter_map(|edge| edge.other_endpoint(node)) {
            if let Some(edges) = self.adjacency.get_mut(neighbour) {
                edges.retain(|edge| !edge.has_endpoint(node));
            }
        }
        trace!(node = node.label(), edges = incident.len(), "node removed");
        true
    }

    /// Adds an edge of `weight` between `first` and `second`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if either endpoint was never added.
    pub fn add_edge(
        &mut self,
        first: &Node,
        second: &Node,
        weight: Weight,
    ) -> Result<Edge, GraphError> {
        let edge = Edge::new(first.clone(), second.clone(), weight);
        self.insert_edge(edge.clone())?;
        Ok(edge)
    }

    /// Registers a pre-built edge at both of its endpoints.
    ///
    /// A self-loop is registered once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if either endpoint was never added.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.require(edge.first())?;
        self.require(edge.second())?;
        self.register(edge);
        Ok(())
    }

    /// Registers both labels, then an edge of `weight` between them.
    pub(crate) fn connect(&mut self, first: &str, second: &str, weight: Weight) -> Edge {
        let first = self.add_node(first);
        let second = self.add_node(second);
        let edge = Edge::new(first, second, weight);
        self.register(edge.clone());
        edge
    }

    /// Removes every edge joining `first` and `second`, whatever its weight.
    ///
    /// Returns the number of logical edges removed.
    pub fn remove_edge(&mut self, first: &Node, second: &Node) -> usize {
        self.prune_both(first, second, |edge| edge.joins(first, second))
    }

    /// Removes every edge equal to `edge` (symmetric endpoints and weight).
    ///
    /// Returns the number of logical edges removed.
    pub fn remove_matching_edge(&mut self, edge: &Edge) -> usize {
        self.prune_both(edge.first(), edge.second(), |candidate| candidate == edge)
    }

    /// Returns a read-only view of the adjacency mapping.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &BTreeMap<Node, Vec<Edge>> { &self.adjacency }

    /// Returns the registered node labelled `label`.
    #[must_use]
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.adjacency.get_key_value(label).map(|(node, _)| node)
    }

    /// Returns `true` when `node` is registered.
    #[must_use]
    pub fn contains_node(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterates over the nodes in label order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.adjacency.keys()
    }

    /// Returns the edges incident to `node`, or `None` if it is unknown.
    #[must_use]
    pub fn incident_edges(&self, node: &Node) -> Option<&[Edge]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    /// Iterates over `(neighbour, weight)` pairs reachable in one hop from
    /// `node`. Unknown nodes have no neighbours.
    pub fn neighbours<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = (&'a Node, Weight)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |edge| edge.other_endpoint(node).map(|other| (other, edge.weight())))
    }

    /// Iterates over every logical edge once, including parallel copies.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .iter()
            .flat_map(|(node, edges)| edges.iter().filter(move |edge| edge.first() == node))
    }

    /// Returns every distinct edge once, de-duplicated by symmetric equality.
    ///
    /// Parallel edges with identical endpoints and weight collapse into one.
    #[must_use]
    pub fn unique_edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        self.adjacency
            .values()
            .flatten()
            .filter(|edge| seen.insert(*edge))
            .cloned()
            .collect()
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical edges, counting parallel copies.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` when the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sums the weights of all logical edges.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|edge| u64::from(edge.weight())).sum()
    }

    fn require(&self, node: &Node) -> Result<(), GraphError> {
        if self.adjacency.contains_key(node) {
            Ok(())
        } else {
            Err(unknown_node(node))
        }
    }

    /// Returns a graph with the same nodes and no edges.
    pub(crate) fn without_edges(&self) -> Self {
        Self {
            adjacency: self
                .adjacency
                .keys()
                .map(|node| (node.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Appends `edge` to its endpoints' sequences without checking that they
    /// are registered; missing endpoints are created.
    pub(crate) fn register(&mut self, edge: Edge) {
        if !edge.is_self_loop() {
            self.adjacency
                .entry(edge.second().clone())
                .or_default()
                .push(edge.clone());
        }
        self.adjacency
            .entry(edge.first().clone())
            .or_default()
            .push(edge);
    }

    fn prune_both(
        &mut self,
        first: &Node,
        second: &Node,
        matches: impl Fn(&Edge) -> bool,
    ) -> usize {
        let from_first = self.prune(first, &matches);
        if first == second {
            return from_first;
        }
        let from_second = self.prune(second, &matches);
        from_first.max(from_second)
    }

    fn prune(&mut self, node: &Node, matches: impl Fn(&Edge) -> bool) -> usize {
        let Some(edges) = self.adjacency.get_mut(node) else {
            return 0;
        };
        let before = edges.len();
        edges.retain(|edge| !matches(edge));
        before - edges.len()
    }
}

fn unknown_node(node: &Node) -> GraphError {
    GraphError::UnknownNode {
        label: node.shared_label(),
    }
}

/// Renders the adjacency listing, one node per line:
/// `A -> B (1), C (4)`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in &self.adjacency {
            write!(f, "{node} ->")?;
            for (index, edge) in edges.iter().enumerate() {
                let separator = if index == 0 { " " } else { ", " };
                let other = edge.other_endpoint(node).unwrap_or(node);
                write!(f, "{separator}{other} ({})", edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
