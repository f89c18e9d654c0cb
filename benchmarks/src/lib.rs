//! Shared helpers for the fifteen benchmark suites.

use fifteen_harness::fixtures::{scenario, SCENARIOS};
use fifteen_harness::runner::StrategyRun;
use fifteen_kernel::carrier::board::Board;
use fifteen_search::policy::{DedupPolicy, SearchPolicy};

/// A benchmark regime: a named scenario under a fixed policy.
pub struct Regime {
    pub name: String,
    pub start: Board,
    pub goal: Board,
    pub policy: SearchPolicy,
}

/// Resolve a fixture scenario's boards.
///
/// # Panics
///
/// Panics if the scenario is unknown or its boards are invalid. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn scenario_boards(name: &str) -> (Board, Board) {
    let fixture = scenario(name).unwrap_or_else(|| panic!("unknown scenario {name:?}"));
    (
        Board::new(fixture.start).expect("fixture start is a board"),
        Board::new(fixture.goal).expect("fixture goal is a board"),
    )
}

/// Every fixture scenario under both dedup modes.
///
/// # Panics
///
/// See [`scenario_boards`].
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let mut out = Vec::new();
    for fixture in SCENARIOS {
        for dedup in [DedupPolicy::Off, DedupPolicy::BoardFingerprint] {
            let (start, goal) = scenario_boards(fixture.name);
            out.push(Regime {
                name: format!("{}/dedup_{dedup}", fixture.name),
                start,
                goal,
                policy: SearchPolicy {
                    dedup,
                    ..SearchPolicy::default()
                },
            });
        }
    }
    out
}

/// Compact JSON bytes of a run summary (what the summary digest hashes).
///
/// # Panics
///
/// Panics if the summary cannot be serialized.
#[must_use]
pub fn summary_bytes(run: &StrategyRun) -> Vec<u8> {
    serde_json::to_vec(&run.summary).expect("summary serializes")
}
