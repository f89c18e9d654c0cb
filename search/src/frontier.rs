//! Best-first frontier (the open set) with optional board-keyed dedup.
//!
//! Uses a `BTreeSet`-based visited set (not `HashSet`) so the recorded
//! fingerprints iterate deterministically.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::node::{FrontierKey, SearchNode};
use crate::policy::DedupPolicy;

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - With [`DedupPolicy::BoardFingerprint`], a `BTreeSet<String>` of board
///   fingerprint hex digests of every node ever pushed (first seen wins)
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    dedup: DedupPolicy,
    visited: BTreeSet<String>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new(dedup: DedupPolicy) -> Self {
        Self {
            heap: BinaryHeap::new(),
            dedup,
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Push a node with the given priority.
    ///
    /// Returns `false` if dedup is on and the board was already pushed
    /// (node not added). With dedup off every push is accepted.
    pub fn push(&mut self, priority: i64, node: SearchNode) -> bool {
        if self.dedup == DedupPolicy::BoardFingerprint {
            let fp = node.fingerprint().hex_digest().to_string();
            if !self.visited.insert(fp) {
                return false;
            }
        }
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey {
                priority,
                node_id: node.node_id,
            }),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Pop the best (lowest `(priority, node_id)`) node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    /// Key of the node [`pop`](Self::pop) would return next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }

    /// Check if a board fingerprint has been recorded.
    #[must_use]
    pub fn is_visited(&self, fingerprint_hex: &str) -> bool {
        self.visited.contains(fingerprint_hex)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
