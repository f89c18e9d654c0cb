//! Sequential strategy runner.
//!
//! Pipeline per strategy: search → summary JSON → summary digest. Runs are
//! independent (fresh frontier, explored set and id allocator each) and
//! execute in [`Strategy::ALL`] order. The first failure stops the pipeline.

use std::fmt;

use fifteen_kernel::carrier::board::Board;
use fifteen_kernel::proof::hash::ContentHash;
use fifteen_search::error::SearchError;
use fifteen_search::policy::SearchPolicy;
use fifteen_search::search::{search, SearchOutcome};
use fifteen_search::strategy::Strategy;

use crate::report::{summary_digest, summary_json};

/// Error during a harness run.
#[derive(Debug)]
pub enum RunError {
    /// The search for `strategy` failed.
    Search {
        strategy: Strategy,
        source: SearchError,
    },
    /// The run summary could not be serialized.
    SummaryEncoding { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search { strategy, source } => write!(f, "{strategy} search failed: {source}"),
            Self::SummaryEncoding { detail } => {
                write!(f, "run summary encoding failed: {detail}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search { source, .. } => Some(source),
            Self::SummaryEncoding { .. } => None,
        }
    }
}

/// A completed strategy run.
#[derive(Debug)]
pub struct StrategyRun {
    pub outcome: SearchOutcome,
    /// [`summary_json`] of the outcome.
    pub summary: serde_json::Value,
    /// [`summary_digest`] of `summary`.
    pub digest: ContentHash,
}

/// Run one strategy from `start` to `goal`.
///
/// # Errors
///
/// [`RunError::Search`] if the search fails; [`RunError::SummaryEncoding`]
/// if the summary cannot be hashed.
pub fn run_strategy(
    strategy: Strategy,
    start: Board,
    goal: Board,
    policy: &SearchPolicy,
) -> Result<StrategyRun, RunError> {
    log::info!(
        "running {strategy} (dedup={}, budget={:?})",
        policy.dedup,
        policy.max_expansions
    );
    let outcome = search(start, goal, strategy, policy)
        .map_err(|source| RunError::Search { strategy, source })?;
    let summary = summary_json(&outcome, policy);
    let digest = summary_digest(&summary).map_err(|e| RunError::SummaryEncoding {
        detail: e.to_string(),
    })?;
    log::debug!("{strategy}: summary {digest}");
    Ok(StrategyRun {
        outcome,
        summary,
        digest,
    })
}

/// Run every strategy in order, stopping at the first failure.
///
/// # Errors
///
/// The first [`RunError`] encountered; later strategies are not run.
pub fn run_all(
    start: Board,
    goal: Board,
    policy: &SearchPolicy,
) -> Result<Vec<StrategyRun>, RunError> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| run_strategy(strategy, start, goal, policy))
        .collect()
}
