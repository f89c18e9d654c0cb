//! Core search node type and its identifier allocator.

use fifteen_kernel::carrier::board::Board;
use fifteen_kernel::heuristic::{h1, h2_grids};
use fifteen_kernel::proof::hash::{canonical_hash, ContentHash};
use fifteen_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;

/// Monotonic node identifier source for one search run.
///
/// Identifiers double as the frontier tie-breaker and the parent lookup
/// key, so every node of a run must draw from the same allocator.
#[derive(Debug, Default)]
pub struct NodeIds {
    next: u64,
}

impl NodeIds {
    /// Start a fresh allocator at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Issue the next identifier.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of identifiers issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// An immutable search node.
///
/// `h1` and `h2` are computed once at construction against the goal board.
/// The frontier priority is strategy dependent: `depth` (BFS), [`f1`]
/// (A*-h1) or [`f2`] (A*-h2).
///
/// [`f1`]: SearchNode::f1
/// [`f2`]: SearchNode::f2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Unique identifier, increasing in construction order.
    pub node_id: u64,
    /// Parent node ID (`None` for the root and the goal node).
    pub parent_id: Option<u64>,
    /// Board snapshot at this node.
    pub board: Board,
    /// Weighted misplaced tiles minus one.
    pub h1: i64,
    /// Weighted Manhattan distance.
    pub h2: i64,
    /// Accumulated move cost from the root.
    pub g_cost: i64,
    /// Moves from the root (root = 0).
    pub depth: u32,
}

impl SearchNode {
    /// Construct a node, computing heuristics against `goal`.
    ///
    /// With `goal == None` both heuristics are 0; this is how the goal node
    /// itself is built.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Board`] if a tile cannot be located while
    /// computing `h2`.
    pub fn new(
        board: Board,
        goal: Option<&Board>,
        parent_id: Option<u64>,
        depth: u32,
        g_cost: i64,
        ids: &mut NodeIds,
    ) -> Result<Self, SearchError> {
        let node_id = ids.allocate();
        let grid = board.to_grid();
        let (h1, h2) = match goal {
            None => (0, 0),
            Some(goal) => (h1(&board, goal), h2_grids(&grid, &goal.to_grid())?),
        };
        Ok(Self {
            node_id,
            parent_id,
            board,
            h1,
            h2,
            g_cost,
            depth,
        })
    }

    /// Construct the goal node: no goal reference, zero heuristics.
    #[must_use]
    pub fn goal(board: Board, ids: &mut NodeIds) -> Self {
        Self {
            node_id: ids.allocate(),
            parent_id: None,
            board,
            h1: 0,
            h2: 0,
            g_cost: 0,
            depth: 0,
        }
    }

    /// `f1 = g + h1`.
    #[must_use]
    pub fn f1(&self) -> i64 {
        self.g_cost.saturating_add(self.h1)
    }

    /// `f2 = g + h2`.
    #[must_use]
    pub fn f2(&self) -> i64 {
        self.g_cost.saturating_add(self.h2)
    }

    /// Fingerprint of this node's board (for board-keyed dedup).
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        board_fingerprint(&self.board)
    }
}

/// Domain-separated SHA-256 fingerprint of a board.
#[must_use]
pub fn board_fingerprint(board: &Board) -> ContentHash {
    canonical_hash(HashDomain::BoardFingerprint, board.as_bytes())
}

/// The frontier ordering key: `(priority, node_id)`.
///
/// Lower priority first; ties broken by the older (smaller) node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: i64,
    pub node_id: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.node_id.cmp(&other.node_id))
    }
}
