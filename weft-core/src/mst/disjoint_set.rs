//! Union-find over graph nodes.
//!
//! Nodes are mapped to dense indices on registration; parent links and ranks
//! live in parallel vectors so `find` and `union` never touch the labels.

use std::collections::HashMap;

use crate::graph::Node;

/// Partition of a node set into disjoint components.
///
/// Uses union by rank and path compression, so a sequence of `m`
/// operations over `n` nodes runs in `O(m α(n))`.
///
/// # Examples
/// ```
/// use weft_core::{DisjointSet, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// let mut sets = DisjointSet::make_set(graph.nodes());
/// assert_eq!(sets.component_count(), 3);
///
/// sets.union(&a, &b);
/// assert!(sets.same_set(&a, &b));
/// assert!(!sets.same_set(&a, &c));
/// assert_eq!(sets.find(&a), sets.find(&b));
/// assert_eq!(sets.component_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    index: HashMap<Node, usize>,
    nodes: Vec<Node>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Registers every node in `nodes` as its own singleton set.
    ///
    /// Duplicate nodes are registered once.
    #[must_use]
    pub fn make_set<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut sets = Self::default();
        for node in nodes {
            sets.insert(node);
        }
        sets
    }

    /// Adds `node` as a singleton set. Returns `false` if it was already
    /// registered, leaving its set untouched.
    pub fn insert(&mut self, node: &Node) -> bool {
        if self.index.contains_key(node) {
            return false;
        }
        let slot = self.nodes.len();
        self.index.insert(node.clone(), slot);
        self.nodes.push(node.clone());
        self.parent.push(slot);
        self.rank.push(0);
        self.components += 1;
        true
    }

    /// Returns the representative of the set containing `node`, or `None`
    /// if the node was never registered.
    ///
    /// Compresses the path it walks, which is why it needs `&mut self`.
    pub fn find(&mut self, node: &Node) -> Option<Node> {
        let slot = *self.index.get(node)?;
        let root = self.find_root(slot);
        self.nodes.get(root).cloned()
    }

    /// Merges the sets containing `left` and `right` and returns the root of
    /// the merged set. The root of the higher-ranked set survives.
    ///
    /// Either argument may be any member of its set; roots are resolved
    /// internally. Returns `None` if either node was never registered.
    pub fn union(&mut self, left: &Node, right: &Node) -> Option<Node> {
        let (root, _) = self.merge(left, right)?;
        self.nodes.get(root).cloned()
    }

    /// Returns `true` when both nodes are registered and share a set.
    pub fn same_set(&mut self, left: &Node, right: &Node) -> bool {
        match (self.index.get(left).copied(), self.index.get(right).copied()) {
            (Some(left), Some(right)) => self.find_root(left) == self.find_root(right),
            _ => false,
        }
    }

    /// Merges the two sets and reports whether they were distinct. Unknown
    /// nodes never merge.
    pub(crate) fn try_union(&mut self, left: &Node, right: &Node) -> bool {
        self.merge(left, right).is_some_and(|(_, merged)| merged)
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no node is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn merge(&mut self, left: &Node, right: &Node) -> Option<(usize, bool)> {
        let left = self.find_root(*self.index.get(left)?);
        let right = self.find_root(*self.index.get(right)?);
        if left == right {
            return Some((left, false));
        }
        let left_rank = self.rank.get(left).copied().unwrap_or_default();
        let right_rank = self.rank.get(right).copied().unwrap_or_default();
        let (root, child) = if left_rank < right_rank {
            (right, left)
        } else {
            (left, right)
        };
        if let Some(parent) = self.parent.get_mut(child) {
            *parent = root;
        }
        if left_rank == right_rank
            && let Some(rank) = self.rank.get_mut(root)
        {
            *rank = rank.saturating_add(1);
        }
        self.components -= 1;
        Some((root, true))
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while let Some(&parent) = self.parent.get(root)
            && parent != root
        {
            root = parent;
        }

        let mut current = slot;
        while let Some(parent) = self.parent.get_mut(current)
            && *parent != root
        {
            current = std::mem::replace(parent, root);
        }
        root
    }
}
