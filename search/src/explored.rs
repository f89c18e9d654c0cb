//! Explored (closed) set: every node that has been expanded.
//!
//! Append-only and insertion-ordered. An `node_id → index` map gives O(1)
//! parent lookup for path reconstruction. Entries are keyed by identifier,
//! not by board, so the same board may appear several times.

use std::collections::HashMap;

use crate::node::SearchNode;

/// Expanded nodes in expansion order, indexed by `node_id`.
#[derive(Debug, Default)]
pub struct ExploredSet {
    nodes: Vec<SearchNode>,
    index: HashMap<u64, usize>,
}

impl ExploredSet {
    /// Create an empty explored set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expanded node.
    pub fn insert(&mut self, node: SearchNode) {
        // Ids are unique per run; first-wins if that ever breaks.
        self.index.entry(node.node_id).or_insert(self.nodes.len());
        self.nodes.push(node);
    }

    /// Look up a node by identifier.
    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNode> {
        self.index.get(&node_id).map(|&i| &self.nodes[i])
    }

    /// Number of expanded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }
}
