//! Successor generation for the 15-puzzle.

use fifteen_kernel::carrier::board::{Board, BLANK};
use fifteen_kernel::operators::slide::{legal_directions, slide};

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::node::{NodeIds, SearchNode};

/// Generate every legal successor of `node`.
///
/// Successors come out in `up, down, left, right` order (illegal directions
/// skipped), each with an independent board copy, `depth + 1`, and `g`
/// increased by the weight of the tile that slid into the blank.
///
/// # Errors
///
/// Returns [`SearchError::Board`] if the blank or a tile cannot be located.
pub fn expand(
    node: &SearchNode,
    goal: &Board,
    ids: &mut NodeIds,
) -> Result<Vec<SearchNode>, SearchError> {
    let blank = node.board.to_grid().locate(BLANK)?;
    legal_directions(blank)
        .into_iter()
        .filter_map(|direction| slide(&node.board, blank, direction))
        .map(|moved| {
            SearchNode::new(
                moved.board,
                Some(goal),
                Some(node.node_id),
                node.depth + 1,
                node.g_cost + moved.cost,
                ids,
            )
        })
        .collect()
}

/// The 15-puzzle as a [`SearchProblem`]: reach `goal` exactly.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    goal: SearchNode,
}

impl SlidingPuzzle {
    /// Wrap a goal node (built with [`SearchNode::goal`]).
    #[must_use]
    pub fn new(goal: SearchNode) -> Self {
        Self { goal }
    }

    /// The goal node.
    #[must_use]
    pub fn goal(&self) -> &SearchNode {
        &self.goal
    }
}

impl SearchProblem for SlidingPuzzle {
    fn is_goal(&self, node: &SearchNode) -> bool {
        node.board == self.goal.board
    }

    fn expand(
        &self,
        node: &SearchNode,
        ids: &mut NodeIds,
    ) -> Result<Vec<SearchNode>, SearchError> {
        expand(node, &self.goal.board, ids)
    }
}
