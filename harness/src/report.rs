//! Human-readable reports and the machine-readable run summary.
//!
//! The text report lists the solution path from the goal back to the start,
//! one description block per node, followed by the move and node counts.
//! The JSON summary carries the same facts plus the policy snapshot; its
//! digest is what cross-process tests compare.

use std::fmt;

use fifteen_kernel::proof::hash::{canonical_hash, ContentHash};
use fifteen_kernel::proof::hash_domain::HashDomain;
use fifteen_search::node::SearchNode;
use fifteen_search::policy::SearchPolicy;
use fifteen_search::search::SearchOutcome;

use crate::policy::policy_snapshot;

/// Summary schema tag.
const SUMMARY_SCHEMA_VERSION: &str = "run_summary.v1";

/// Display adapter for one node's description block.
pub struct NodeDescription<'a>(pub &'a SearchNode);

impl fmt::Display for NodeDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0;
        writeln!(f, "State Description:")?;
        writeln!(f, "Board: {}", node.board)?;
        writeln!(f, "g(n): {}", node.g_cost)?;
        writeln!(f, "h1(n): {}", node.h1)?;
        writeln!(f, "h2(n): {}", node.h2)?;
        writeln!(f, "f1(n): {}", node.f1())?;
        writeln!(f, "f2(n): {}", node.f2())?;
        writeln!(f, "ID: {}", node.node_id)?;
        match node.parent_id {
            Some(parent) => writeln!(f, "Parent ID: {parent}"),
            None => writeln!(f, "Parent ID: none"),
        }
    }
}

/// Display adapter for a full success report.
pub struct SuccessReport<'a>(pub &'a SearchOutcome);

impl fmt::Display for SuccessReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "Solved with {} method!", outcome.strategy)?;
        writeln!(f)?;
        writeln!(f, "Path (end->start):")?;
        for node in &outcome.path {
            write!(f, "{}", NodeDescription(node))?;
            writeln!(f)?;
        }
        writeln!(f, "Number of moves: {}", outcome.moves())?;
        writeln!(
            f,
            "Nodes added to open list: {}",
            outcome.stats.frontier_insertions
        )?;
        writeln!(f, "Nodes added to closed list: {}", outcome.explored.len())
    }
}

/// Render one node's description block.
#[must_use]
pub fn describe_node(node: &SearchNode) -> String {
    NodeDescription(node).to_string()
}

/// Render the report for a solved run.
#[must_use]
pub fn render_success(outcome: &SearchOutcome) -> String {
    SuccessReport(outcome).to_string()
}

fn node_json(node: &SearchNode) -> serde_json::Value {
    serde_json::json!({
        "board": node.board.tiles().to_vec(),
        "depth": node.depth,
        "f1": node.f1(),
        "f2": node.f2(),
        "g": node.g_cost,
        "h1": node.h1,
        "h2": node.h2,
        "node_id": node.node_id,
        "parent_id": node.parent_id,
    })
}

/// Machine-readable summary of a solved run under `policy`.
///
/// Contains no timing or host data: two runs with the same inputs and
/// policy produce the same value.
#[must_use]
pub fn summary_json(outcome: &SearchOutcome, policy: &SearchPolicy) -> serde_json::Value {
    let path: Vec<serde_json::Value> = outcome.path.iter().map(node_json).collect();
    let stats = &outcome.stats;
    serde_json::json!({
        "moves": outcome.moves(),
        "path": path,
        "policy": policy_snapshot(policy),
        "schema_version": SUMMARY_SCHEMA_VERSION,
        "stats": {
            "duplicates_suppressed": stats.duplicates_suppressed,
            "expansions": stats.expansions,
            "explored": outcome.explored.len(),
            "frontier_high_water": stats.frontier_high_water,
            "frontier_insertions": stats.frontier_insertions,
            "nodes_created": stats.nodes_created,
        },
        "strategy": outcome.strategy.as_str(),
        "total_cost": outcome.total_cost(),
    })
}

/// Content hash of a summary's compact JSON encoding.
///
/// Object keys serialize in sorted order, so equal summaries hash equally.
///
/// # Errors
///
/// Returns the serializer error if the value cannot be encoded.
pub fn summary_digest(summary: &serde_json::Value) -> Result<ContentHash, serde_json::Error> {
    let bytes = serde_json::to_vec(summary)?;
    Ok(canonical_hash(HashDomain::RunSummary, &bytes))
}
