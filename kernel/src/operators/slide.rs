//! Blank slides: the only operator on a board.
//!
//! A direction names where the blank travels. The tile that occupied the
//! target cell moves the opposite way, and its weight is the move cost.

use std::fmt;

use crate::carrier::board::{Board, Position, SIDE};
use crate::operators::cost::move_cost;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether the blank at `blank` can move this way without leaving the grid.
    #[must_use]
    pub const fn is_legal(self, blank: Position) -> bool {
        match self {
            Self::Up => blank.row > 0,
            Self::Down => blank.row < SIDE - 1,
            Self::Left => blank.col > 0,
            Self::Right => blank.col < SIDE - 1,
        }
    }

    /// Flat-index target of the blank, if the move is legal.
    #[must_use]
    pub const fn target(self, blank: Position) -> Option<usize> {
        if !self.is_legal(blank) {
            return None;
        }
        let index = blank.index();
        Some(match self {
            Self::Up => index - SIDE,
            Self::Down => index + SIDE,
            Self::Left => index - 1,
            Self::Right => index + 1,
        })
    }

    /// Lowercase name (`"up"`, `"down"`, `"left"`, `"right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal directions for a blank position, in `up, down, left, right` order.
#[must_use]
pub fn legal_directions(blank: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|d| d.is_legal(blank))
        .collect()
}

/// Result of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub direction: Direction,
    /// Flat index the blank moved into.
    pub target: usize,
    /// Weight of the tile that moved.
    pub cost: i64,
    pub board: Board,
}

/// Slide the blank (located at `blank`) one cell in `direction`.
///
/// Returns `None` if the move would leave the grid. The cost is read
/// before the swap so it is the weight of the moving tile.
#[must_use]
pub fn slide(board: &Board, blank: Position, direction: Direction) -> Option<Slide> {
    let target = direction.target(blank)?;
    let cost = move_cost(board, target);
    Some(Slide {
        direction,
        target,
        cost,
        board: board.swapped(blank.index(), target),
    })
}
