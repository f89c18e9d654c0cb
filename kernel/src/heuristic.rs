//! Heuristic estimates of the remaining cost to a goal board.
//!
//! Both estimates are weighted by [`tile_weight`], so a misplaced high tile
//! (10–15) counts ten times a low one.
//!
//! - [`h1`]: weighted misplaced tiles, **minus one**. The golden node counts
//!   depend on the subtraction, so `h1(G, G) == -1` and the estimate is not
//!   admissible.
//! - [`h2`]: weighted Manhattan distance of tiles 1–15.

use crate::carrier::board::{Board, BoardError, Grid};
use crate::operators::cost::tile_weight;

/// Weighted count of cells whose tile differs from the goal, minus one.
///
/// The blank contributes nothing (its weight is 0) even when misplaced.
#[must_use]
pub fn h1(board: &Board, goal: &Board) -> i64 {
    let mismatched: i64 = board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|(tile, expected)| tile != expected)
        .map(|(&tile, _)| tile_weight(tile))
        .sum();
    mismatched - 1
}

/// Weighted Manhattan distance from `board` to `goal`.
///
/// # Errors
///
/// Returns [`BoardError::TileNotFound`] if a tile cannot be located in
/// either grid. Unreachable for validated boards.
pub fn h2(board: &Board, goal: &Board) -> Result<i64, BoardError> {
    h2_grids(&board.to_grid(), &goal.to_grid())
}

/// [`h2`] over precomputed grid views.
///
/// # Errors
///
/// See [`h2`].
pub fn h2_grids(board: &Grid, goal: &Grid) -> Result<i64, BoardError> {
    let mut total = 0i64;
    for tile in 1..=15u8 {
        let here = board.locate(tile)?;
        let there = goal.locate(tile)?;
        // Distances are at most 6 on a 4×4 grid.
        #[allow(clippy::cast_possible_wrap)]
        let distance = here.manhattan(there) as i64;
        total += tile_weight(tile) * distance;
    }
    Ok(total)
}
