//! Search problem contract trait.

use crate::error::SearchError;
use crate::node::{NodeIds, SearchNode};

/// A problem the best-first driver can search.
///
/// # Contract
///
/// - `expand` must be deterministic: same node → same successors in the
///   same order, with ids drawn from `ids` in that order.
/// - Every successor's `parent_id` must be the expanded node's `node_id`
///   and its `depth` must be one more than the expanded node's.
pub trait SearchProblem {
    /// Test whether `node` satisfies the goal.
    fn is_goal(&self, node: &SearchNode) -> bool;

    /// Generate all successors of `node`.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if a successor cannot be constructed.
    fn expand(&self, node: &SearchNode, ids: &mut NodeIds)
        -> Result<Vec<SearchNode>, SearchError>;
}
