//! End-to-end solution checks across crates.
//!
//! - `start_board_1` is solved by all three strategies and the path ends
//!   at the goal.
//! - Every path step is a single legal slide whose cost is the moved
//!   tile's weight.
//! - BFS never needs more moves than either A* variant.
//! - start == goal is solved with no work.

use fifteen_harness::fixtures::{GOAL_BOARD, SCENARIOS};
use fifteen_harness::runner::run_all;
use fifteen_kernel::carrier::board::{Board, BLANK};
use fifteen_kernel::heuristic::{h1, h2};
use fifteen_kernel::operators::cost::tile_weight;
use fifteen_search::node::SearchNode;
use fifteen_search::policy::DedupPolicy;
use fifteen_search::search::search;
use fifteen_search::strategy::Strategy;
use lock_tests::scenario_helpers::{boards, policy_with};

/// Assert that `child` is `parent` after one slide and return the moved tile.
fn moved_tile(parent: &Board, child: &Board) -> u8 {
    let changed: Vec<usize> = (0..16)
        .filter(|&i| parent.tile_at(i) != child.tile_at(i))
        .collect();
    assert_eq!(changed.len(), 2, "{parent} -> {child} is not one slide");
    let (a, b) = (changed[0], changed[1]);
    let (row_a, col_a) = (a / 4, a % 4);
    let (row_b, col_b) = (b / 4, b % 4);
    assert_eq!(
        row_a.abs_diff(row_b) + col_a.abs_diff(col_b),
        1,
        "cells {a} and {b} are not adjacent"
    );
    assert_eq!(parent.tile_at(a), child.tile_at(b));
    assert_eq!(parent.tile_at(b), child.tile_at(a));
    let blank_before = parent.blank_index();
    assert!(blank_before == a || blank_before == b, "blank did not move");
    let target = if blank_before == a { b } else { a };
    parent.tile_at(target)
}

fn assert_valid_path(path: &[SearchNode], start: Board, goal: Board) {
    assert_eq!(path.first().unwrap().board, goal, "path must begin at the goal");
    assert_eq!(path.last().unwrap().board, start, "path must end at the start");
    assert_eq!(path.last().unwrap().g_cost, 0);

    for pair in path.windows(2) {
        let (child, parent) = (&pair[0], &pair[1]);
        let tile = moved_tile(&parent.board, &child.board);
        assert_ne!(tile, BLANK);
        assert_eq!(child.g_cost - parent.g_cost, tile_weight(tile));
        assert_eq!(child.parent_id, Some(parent.node_id));
        assert_eq!(child.depth, parent.depth + 1);
        assert_eq!(child.h1, h1(&child.board, &goal));
        assert_eq!(child.h2, h2(&child.board, &goal).unwrap());
    }
}

#[test]
fn start_board_1_solved_by_every_strategy() {
    let (start, goal) = boards("start_board_1");
    assert_eq!(goal, Board::new(GOAL_BOARD).unwrap());

    for strategy in Strategy::ALL {
        let outcome =
            search(start, goal, strategy, &policy_with(DedupPolicy::BoardFingerprint)).unwrap();
        assert_eq!(outcome.solved.board, goal, "{strategy}");
        assert_eq!(outcome.moves(), 11, "{strategy}");
        assert_valid_path(&outcome.path, start, goal);
    }
}

#[test]
fn every_scenario_path_is_a_chain_of_legal_slides() {
    for scenario in SCENARIOS.iter().filter(|s| s.name != "start_board_1") {
        let (start, goal) = boards(scenario.name);
        let runs = run_all(start, goal, &policy_with(DedupPolicy::Off)).unwrap();
        for run in &runs {
            assert_valid_path(&run.outcome.path, start, goal);
        }
    }
}

#[test]
fn bfs_needs_no_more_moves_than_a_star() {
    for scenario in SCENARIOS {
        let (start, goal) = boards(scenario.name);
        let policy = policy_with(DedupPolicy::BoardFingerprint);
        let runs = run_all(start, goal, &policy).unwrap();
        let bfs_moves = runs[0].outcome.moves();
        for run in &runs[1..] {
            assert!(
                bfs_moves <= run.outcome.moves(),
                "{}: bfs {bfs_moves} > {} {}",
                scenario.name,
                run.outcome.strategy,
                run.outcome.moves()
            );
        }
    }
}

#[test]
fn start_equal_to_goal_does_no_work() {
    for scenario in SCENARIOS {
        let (_, goal) = boards(scenario.name);
        for run in run_all(goal, goal, &policy_with(DedupPolicy::Off)).unwrap() {
            assert_eq!(run.outcome.moves(), 0);
            assert_eq!(run.outcome.stats.frontier_insertions, 0);
            assert!(run.outcome.explored.is_empty());
            assert_eq!(run.outcome.path.len(), 1);
        }
    }
}

#[test]
fn start_board_2_a_star_path_is_locked() {
    let (start, goal) = boards("start_board_2");
    let outcome = search(start, goal, Strategy::AStarH2, &policy_with(DedupPolicy::Off)).unwrap();
    let tiles: Vec<[u8; 16]> = outcome.path.iter().map(|n| *n.board.tiles()).collect();
    assert_eq!(
        tiles,
        vec![
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 11, 13, 14, 15, 12],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 11, 13, 14, 0, 12],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 11, 13, 0, 14, 12],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 15, 11, 13, 10, 14, 12],
            [1, 2, 3, 4, 5, 0, 7, 8, 9, 6, 15, 11, 13, 10, 14, 12],
            [1, 0, 3, 4, 5, 2, 7, 8, 9, 6, 15, 11, 13, 10, 14, 12],
        ]
    );
}
