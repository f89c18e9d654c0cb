//! Search strategies: which node attribute is the frontier priority.

use std::fmt;
use std::str::FromStr;

use crate::node::SearchNode;

/// A best-first search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first: priority is depth. Minimises move count, not cost.
    Bfs,
    /// A* with the weighted misplaced-tile heuristic: priority is `f1`.
    AStarH1,
    /// A* with the weighted Manhattan heuristic: priority is `f2`.
    AStarH2,
}

impl Strategy {
    /// All strategies in the fixed run order.
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::AStarH1, Strategy::AStarH2];

    /// Frontier priority of `node` under this strategy.
    #[must_use]
    pub fn priority(self, node: &SearchNode) -> i64 {
        match self {
            Self::Bfs => i64::from(node.depth),
            Self::AStarH1 => node.f1(),
            Self::AStarH2 => node.f2(),
        }
    }

    /// Stable method name (`"bfs"`, `"a_star_h1"`, `"a_star_h2"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::AStarH1 => "a_star_h1",
            Self::AStarH2 => "a_star_h2",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected bfs, a_star_h1 or a_star_h2)",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseStrategyError { name: s.to_string() })
    }
}
