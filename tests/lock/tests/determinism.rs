//! In-process determinism lock.
//!
//! - N>=10 runs of the same scenario yield byte-identical summaries.
//! - Summary digests commit to the policy snapshot.
//! - Summaries carry no paths, timestamps or host data.

use fifteen_harness::policy::policy_snapshot;
use fifteen_harness::runner::run_all;
use fifteen_search::policy::{DedupPolicy, SearchPolicy};
use lock_tests::scenario_helpers::{boards, fixture_report, policy_with};

#[test_log::test]
fn repeated_runs_produce_identical_summaries_n10() {
    let (start, goal) = boards("start_board_3");
    let policy = policy_with(DedupPolicy::Off);
    let first = run_all(start, goal, &policy).unwrap();

    for i in 1..=10 {
        let again = run_all(start, goal, &policy).unwrap();
        for (a, b) in first.iter().zip(&again) {
            assert_eq!(a.digest, b.digest, "run {i}: {} digest drifted", a.outcome.strategy);
            assert_eq!(
                serde_json::to_vec(&a.summary).unwrap(),
                serde_json::to_vec(&b.summary).unwrap(),
                "run {i}: {} summary bytes drifted",
                a.outcome.strategy
            );
        }
    }
}

#[test]
fn explored_order_is_identical_across_runs() {
    let (start, goal) = boards("scrambled_start");
    let policy = policy_with(DedupPolicy::Off);
    let ids = || {
        run_all(start, goal, &policy)
            .unwrap()
            .into_iter()
            .map(|run| run.outcome.explored.iter().map(|n| n.node_id).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };
    let first = ids();
    for _ in 0..10 {
        assert_eq!(ids(), first);
    }
}

#[test]
fn fixture_report_is_stable() {
    let policy = SearchPolicy::default();
    let first = fixture_report("near_start", &policy).unwrap();
    for _ in 0..10 {
        assert_eq!(fixture_report("near_start", &policy).unwrap(), first);
    }
}

#[test]
fn summary_digest_commits_to_policy() {
    let (start, goal) = boards("near_start");
    let unbounded = SearchPolicy::default();
    let bounded = SearchPolicy {
        max_expansions: Some(1_000_000),
        ..SearchPolicy::default()
    };
    let a = run_all(start, goal, &unbounded).unwrap();
    let b = run_all(start, goal, &bounded).unwrap();
    for (x, y) in a.iter().zip(&b) {
        // Same search, different declared policy.
        assert_eq!(x.outcome.stats, y.outcome.stats);
        assert_ne!(x.digest, y.digest);
    }
    assert_eq!(a[0].summary["policy"], policy_snapshot(&unbounded));
}

#[test]
fn summaries_contain_no_host_data() {
    let (start, goal) = boards("near_start");
    let runs = run_all(start, goal, &SearchPolicy::default()).unwrap();
    let cwd = std::env::current_dir().unwrap();
    let cwd = cwd.to_string_lossy();
    for run in &runs {
        let text = run.summary.to_string();
        assert!(!text.contains(cwd.as_ref()), "summary leaks cwd");
        assert!(!text.contains(env!("CARGO_MANIFEST_DIR")), "summary leaks manifest dir");
    }
}
