//! Path reconstruction through parent links.

use crate::error::SearchError;
use crate::explored::ExploredSet;
use crate::node::SearchNode;

/// Walk parent links from `end` back to the root.
///
/// Returns nodes in goal-to-start order: `end` first, the depth-0 root
/// last. Every ancestor must be in `explored`.
///
/// # Errors
///
/// Returns [`SearchError::ParentNotFound`] if a non-root node has no parent
/// id or its parent is missing from `explored`.
pub fn reconstruct_path(
    end: &SearchNode,
    explored: &ExploredSet,
) -> Result<Vec<SearchNode>, SearchError> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current.depth != 0 {
        let parent = current
            .parent_id
            .and_then(|id| explored.get(id))
            .ok_or(SearchError::ParentNotFound {
                node_id: current.node_id,
                parent_id: current.parent_id,
            })?;
        path.push(parent.clone());
        current = parent;
    }
    Ok(path)
}
