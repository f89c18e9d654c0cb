//! Named sample boards.
//!
//! These are plain constants handed to tests, benchmarks and fixture
//! binaries explicitly. Nothing reads them implicitly.

/// The canonical goal `[1, 2, …, 15, 0]`.
pub const GOAL_BOARD: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

/// 11 moves from [`GOAL_BOARD`]; the long BFS scenario.
pub const START_BOARD_1: [u8; 16] = [5, 1, 3, 4, 2, 10, 6, 8, 13, 9, 7, 12, 0, 14, 11, 15];

/// 7 moves from [`GOAL_BOARD`].
pub const START_BOARD_2: [u8; 16] = [1, 0, 3, 4, 5, 2, 7, 8, 9, 6, 15, 11, 13, 10, 14, 12];

/// 7 moves from [`GOAL_BOARD`].
pub const START_BOARD_3: [u8; 16] = [2, 0, 3, 4, 1, 5, 7, 8, 9, 6, 10, 12, 13, 14, 11, 15];

/// A non-canonical goal: a scrambled board a few moves from its starts.
pub const NEAR_GOAL: [u8; 16] = [5, 15, 7, 8, 9, 11, 10, 3, 12, 2, 1, 0, 4, 14, 6, 13];

/// 4 moves from [`NEAR_GOAL`].
pub const SCRAMBLED_START: [u8; 16] = [5, 15, 7, 8, 9, 11, 10, 3, 12, 0, 2, 13, 4, 14, 1, 6];

/// 3 moves from [`NEAR_GOAL`].
pub const NEAR_START: [u8; 16] = [5, 15, 7, 8, 9, 11, 10, 3, 12, 2, 0, 13, 4, 14, 1, 6];

/// A named `(start, goal)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub start: [u8; 16],
    pub goal: [u8; 16],
}

/// Every sample scenario. `start_board_1` is the only one whose plain BFS
/// run expands more than ~10k nodes.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "start_board_1",
        start: START_BOARD_1,
        goal: GOAL_BOARD,
    },
    Scenario {
        name: "start_board_2",
        start: START_BOARD_2,
        goal: GOAL_BOARD,
    },
    Scenario {
        name: "start_board_3",
        start: START_BOARD_3,
        goal: GOAL_BOARD,
    },
    Scenario {
        name: "scrambled_start",
        start: SCRAMBLED_START,
        goal: NEAR_GOAL,
    },
    Scenario {
        name: "near_start",
        start: NEAR_START,
        goal: NEAR_GOAL,
    },
];

/// Look up a scenario by name.
#[must_use]
pub fn scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}
