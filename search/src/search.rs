//! Search entry point and expansion loop.

use fifteen_kernel::carrier::board::Board;

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::expand::SlidingPuzzle;
use crate::explored::ExploredSet;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeIds, SearchNode};
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;
use crate::strategy::Strategy;

/// Expansions between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Aggregate counters of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Successors pushed onto the frontier (the root is not counted).
    pub frontier_insertions: u64,
    /// Nodes popped and expanded (equals the explored-set size).
    pub expansions: u64,
    /// Successors dropped by board-keyed dedup.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Node identifiers issued, goal node included.
    pub nodes_created: u64,
}

/// Result of a successful search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    /// The popped node whose board equals the goal.
    pub solved: SearchNode,
    /// Solution path in goal-to-start order.
    pub path: Vec<SearchNode>,
    /// Every node expanded before the goal was popped.
    pub explored: ExploredSet,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Number of moves on the solution path.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Accumulated cost of the solution path.
    #[must_use]
    pub fn total_cost(&self) -> i64 {
        self.solved.g_cost
    }
}

/// Solve the 15-puzzle from `start` to `goal` with `strategy`.
///
/// Allocates the goal node (id 0) and then the root (id 1) from a fresh
/// [`NodeIds`], so identifiers and therefore tie-breaks are reproducible.
///
/// # Errors
///
/// See [`search_problem`].
pub fn search(
    start: Board,
    goal: Board,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    let mut ids = NodeIds::new();
    let goal_node = SearchNode::goal(goal, &mut ids);
    let root = SearchNode::new(start, Some(&goal_node.board), None, 0, 0, &mut ids)?;
    let problem = SlidingPuzzle::new(goal_node);
    search_problem(&problem, root, &mut ids, strategy, policy)
}

/// Run best-first search over any [`SearchProblem`] from `root`.
///
/// The root is pushed with priority 0 whatever the strategy. Each pop is
/// goal-tested first; otherwise it is expanded, moved to the explored set,
/// and its successors pushed with the strategy's priority.
///
/// # Errors
///
/// - [`SearchError::SearchExhausted`] if the frontier empties first.
/// - [`SearchError::ExpansionBudgetExceeded`] if `policy.max_expansions`
///   is reached.
/// - [`SearchError::ParentNotFound`] if the solution path is broken.
/// - Any error from [`SearchProblem::expand`].
pub fn search_problem(
    problem: &dyn SearchProblem,
    root: SearchNode,
    ids: &mut NodeIds,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    let mut frontier = BestFirstFrontier::new(policy.dedup);
    let mut explored = ExploredSet::new();
    let mut stats = SearchStats::default();

    log::info!(
        "{strategy}: search started (root h1={}, h2={}, dedup={})",
        root.h1,
        root.h2,
        policy.dedup
    );

    frontier.push(0, root);

    loop {
        let Some(current) = frontier.pop() else {
            log::warn!(
                "{strategy}: frontier exhausted after {} expansions",
                stats.expansions
            );
            return Err(SearchError::SearchExhausted {
                expansions: stats.expansions,
                frontier_insertions: stats.frontier_insertions,
            });
        };

        if problem.is_goal(&current) {
            let path = reconstruct_path(&current, &explored)?;
            stats.frontier_high_water = frontier.high_water();
            stats.nodes_created = ids.issued();
            log::info!(
                "{strategy}: solved in {} moves (cost {}, {} insertions, {} expansions)",
                path.len() - 1,
                current.g_cost,
                stats.frontier_insertions,
                stats.expansions
            );
            return Ok(SearchOutcome {
                strategy,
                solved: current,
                path,
                explored,
                stats,
            });
        }

        if let Some(max_expansions) = policy.max_expansions {
            if stats.expansions >= max_expansions {
                log::warn!("{strategy}: expansion budget of {max_expansions} exhausted");
                return Err(SearchError::ExpansionBudgetExceeded { max_expansions });
            }
        }

        let successors = problem.expand(&current, ids)?;
        log::trace!(
            "{strategy}: expand node {} (depth {}, g {}) -> {} successors",
            current.node_id,
            current.depth,
            current.g_cost,
            successors.len()
        );
        explored.insert(current);
        stats.expansions += 1;

        for child in successors {
            let priority = strategy.priority(&child);
            if frontier.push(priority, child) {
                stats.frontier_insertions += 1;
            } else {
                stats.duplicates_suppressed += 1;
            }
        }

        if stats.expansions % PROGRESS_INTERVAL == 0 {
            log::debug!(
                "{strategy}: {} expansions, frontier {} (high water {})",
                stats.expansions,
                frontier.len(),
                frontier.high_water()
            );
        }
    }
}
