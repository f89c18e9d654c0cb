//! Typed search errors.
//!
//! Every error is terminal for the run in progress. Nothing is retried.

use fifteen_kernel::carrier::board::BoardError;

/// Typed failure of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Path reconstruction could not find a parent in the explored set.
    /// Indicates a broken parent-link invariant.
    ParentNotFound {
        node_id: u64,
        parent_id: Option<u64>,
    },
    /// The frontier emptied before the goal was popped: the goal is
    /// unreachable from this configuration.
    SearchExhausted {
        expansions: u64,
        frontier_insertions: u64,
    },
    /// The policy's expansion budget ran out before the goal was popped.
    ExpansionBudgetExceeded { max_expansions: u64 },
    /// A board lookup failed during node construction or expansion.
    Board(BoardError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParentNotFound { node_id, parent_id } => match parent_id {
                Some(parent_id) => write!(
                    f,
                    "parent {parent_id} of node {node_id} not found in explored set"
                ),
                None => write!(f, "non-root node {node_id} has no parent id"),
            },
            Self::SearchExhausted {
                expansions,
                frontier_insertions,
            } => write!(
                f,
                "unsolvable from this configuration: frontier exhausted after \
                 {expansions} expansions ({frontier_insertions} frontier insertions)"
            ),
            Self::ExpansionBudgetExceeded { max_expansions } => {
                write!(f, "expansion budget of {max_expansions} exceeded")
            }
            Self::Board(e) => write!(f, "board error: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for SearchError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}
