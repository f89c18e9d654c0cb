//! Move costs: how expensive it is to slide a tile.
//!
//! Tiles 1–9 cost 1 unit, tiles 10–15 cost 10 units. The blank never
//! costs. The same weight multiplies both heuristics.

use crate::carrier::board::Board;

/// Weight of a tile value: `0 → 0`, `1..=9 → 1`, `10..=15 → 10`.
#[must_use]
pub const fn tile_weight(value: u8) -> i64 {
    match value {
        0 => 0,
        1..=9 => 1,
        // Board invariant bounds tiles at 15.
        _ => 10,
    }
}

/// Cost of sliding the tile at `target_index` into the blank.
///
/// Charged for the tile that moves, never for the blank.
///
/// # Panics
///
/// Panics if `target_index >= 16`.
#[must_use]
pub const fn move_cost(board: &Board, target_index: usize) -> i64 {
    tile_weight(board.tile_at(target_index))
}
