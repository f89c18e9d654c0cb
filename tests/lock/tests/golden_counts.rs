//! Golden node-count lock.
//!
//! Every (scenario, strategy, dedup) row in `GOLDEN` must reproduce its
//! move count, frontier insertions, explored-set size and path cost exactly.
//! Tie-breaking, id allocation order and successor order all feed these
//! numbers, so any drift in them shows up here.

use fifteen_search::search::search;
use lock_tests::scenario_helpers::{boards, is_long_run, policy_with, Counts, Golden, GOLDEN};

fn check(golden: &Golden) {
    let (start, goal) = boards(golden.scenario);
    let outcome = search(start, goal, golden.strategy, &policy_with(golden.dedup))
        .unwrap_or_else(|e| panic!("{} {} failed: {e}", golden.scenario, golden.strategy));
    assert_eq!(
        Counts::of(&outcome),
        golden.counts,
        "{} / {} / dedup={}",
        golden.scenario,
        golden.strategy,
        golden.dedup
    );
}

#[test]
fn golden_counts_all_short_runs() {
    for golden in GOLDEN.iter().filter(|g| !is_long_run(g)) {
        check(golden);
    }
}

#[test]
fn golden_counts_start_board_1_bfs_without_dedup() {
    let long: Vec<&Golden> = GOLDEN.iter().filter(|g| is_long_run(g)).collect();
    assert_eq!(long.len(), 1);
    check(long[0]);
}

#[test]
fn golden_table_covers_every_scenario_strategy_and_mode() {
    use fifteen_harness::fixtures::SCENARIOS;
    use fifteen_search::policy::DedupPolicy;
    use fifteen_search::strategy::Strategy;

    for scenario in SCENARIOS {
        for strategy in Strategy::ALL {
            for dedup in [DedupPolicy::Off, DedupPolicy::BoardFingerprint] {
                let rows = GOLDEN
                    .iter()
                    .filter(|g| {
                        g.scenario == scenario.name && g.strategy == strategy && g.dedup == dedup
                    })
                    .count();
                assert_eq!(rows, 1, "{} {strategy} {dedup}", scenario.name);
            }
        }
    }
}

#[test]
fn dedup_never_changes_the_solution_length() {
    for off in GOLDEN.iter().filter(|g| g.dedup == fifteen_search::policy::DedupPolicy::Off) {
        let on = GOLDEN
            .iter()
            .find(|g| g.scenario == off.scenario && g.strategy == off.strategy && g.dedup != off.dedup)
            .unwrap();
        assert_eq!(on.counts.moves, off.counts.moves);
        assert!(on.counts.frontier_insertions <= off.counts.frontier_insertions);
    }
}
