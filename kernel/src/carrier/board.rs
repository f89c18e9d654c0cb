//! `Board`: the validated 4×4 tile configuration.
//!
//! # Layout
//!
//! - Flat plane: 16 bytes, row-major, `0` is the blank.
//! - Grid view: `[[u8; 4]; 4]`, derived from the flat plane on demand.
//!
//! # Invariant
//!
//! Every `Board` value holds a permutation of `0..=15`. The only constructors
//! ([`Board::new`], [`Board::from_tiles`], [`Board::solved`]) enforce it, so
//! downstream code may rely on exactly one blank and exactly one of each tile.

use std::fmt;

/// Side length of the puzzle.
pub const SIDE: usize = 4;

/// Number of cells (and of distinct tile values, blank included).
pub const CELLS: usize = SIDE * SIDE;

/// Tile value of the blank cell.
pub const BLANK: u8 = 0;

/// Board construction or lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input did not contain exactly [`CELLS`] tiles.
    WrongTileCount { expected: usize, actual: usize },
    /// A tile value lies outside `0..=15`.
    TileOutOfRange { index: usize, value: i64 },
    /// A tile value occurs more than once.
    DuplicateTile { value: u8, first: usize, second: usize },
    /// A grid scan did not find the requested value.
    TileNotFound { value: u8 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTileCount { expected, actual } => {
                write!(f, "expected {expected} tiles, got {actual}")
            }
            Self::TileOutOfRange { index, value } => {
                write!(f, "tile {value} at index {index} is outside 0..=15")
            }
            Self::DuplicateTile {
                value,
                first,
                second,
            } => write!(
                f,
                "tile {value} appears at index {first} and again at index {second}"
            ),
            Self::TileNotFound { value } => write!(f, "tile {value} not found on board"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A `(row, col)` coordinate in the grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Row-major flat index of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Position of a row-major flat index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / SIDE,
            col: index % SIDE,
        }
    }

    /// `|Δrow| + |Δcol|` between two positions.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// A validated 15-puzzle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// Validate a flat row-major tile array.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TileOutOfRange`] or [`BoardError::DuplicateTile`]
    /// if `tiles` is not a permutation of `0..=15`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen: [Option<usize>; CELLS] = [None; CELLS];
        for (index, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(BoardError::TileOutOfRange {
                    index,
                    value: i64::from(value),
                })?;
            if let Some(first) = *slot {
                return Err(BoardError::DuplicateTile {
                    value,
                    first,
                    second: index,
                });
            }
            *slot = Some(index);
        }
        Ok(Self { tiles })
    }

    /// Validate an arbitrary-length sequence of parsed integers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongTileCount`] unless exactly 16 values are
    /// given, then the same errors as [`Board::new`].
    pub fn from_tiles(values: &[i64]) -> Result<Self, BoardError> {
        if values.len() != CELLS {
            return Err(BoardError::WrongTileCount {
                expected: CELLS,
                actual: values.len(),
            });
        }
        let mut tiles = [0u8; CELLS];
        for (index, (&value, tile)) in values.iter().zip(tiles.iter_mut()).enumerate() {
            *tile = u8::try_from(value)
                .ok()
                .filter(|&v| usize::from(v) < CELLS)
                .ok_or(BoardError::TileOutOfRange { index, value })?;
        }
        Self::new(tiles)
    }

    /// The canonical solved board `[1, 2, …, 15, 0]`.
    #[must_use]
    pub fn solved() -> Self {
        let mut tiles = [BLANK; CELLS];
        for (tile, value) in tiles.iter_mut().zip(1u8..) {
            *tile = value;
        }
        tiles[CELLS - 1] = BLANK;
        Self { tiles }
    }

    /// The flat row-major tiles.
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Raw bytes for hashing (identical to [`Board::tiles`]).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`. Callers derive indices from [`Position`].
    #[must_use]
    pub const fn tile_at(&self, index: usize) -> u8 {
        self.tiles[index]
    }

    /// Flat index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        // Permutation invariant: the blank is always present.
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_default()
    }

    /// Copy of this board with the tiles at `a` and `b` exchanged.
    ///
    /// Swapping preserves the permutation invariant.
    #[must_use]
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a, b);
        Self { tiles }
    }

    /// Derive the 4×4 grid view.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        to_grid(&self.tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tile}")?;
        }
        f.write_str("]")
    }
}

/// Row-major 4×4 view of a flat board. Read-only; rebuild it from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; SIDE]; SIDE],
}

/// Reshape a flat 16-cell plane into the grid view.
#[must_use]
pub fn to_grid(flat: &[u8; CELLS]) -> Grid {
    let mut cells = [[BLANK; SIDE]; SIDE];
    for (row, chunk) in cells.iter_mut().zip(flat.chunks_exact(SIDE)) {
        row.copy_from_slice(chunk);
    }
    Grid { cells }
}

impl Grid {
    /// Rows of the grid, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[u8; SIDE]; SIDE] {
        &self.cells
    }

    /// Tile at a position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Scan for `value` and return its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TileNotFound`] if `value` is not on the grid.
    /// Cannot happen for `0..=15` on a grid derived from a valid [`Board`].
    pub fn locate(&self, value: u8) -> Result<Position, BoardError> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                if tile == value {
                    return Ok(Position { row, col });
                }
            }
        }
        Err(BoardError::TileNotFound { value })
    }

    /// Flatten back to the row-major plane. Inverse of [`to_grid`].
    #[must_use]
    pub fn flatten(&self) -> [u8; CELLS] {
        let mut flat = [BLANK; CELLS];
        for (chunk, row) in flat.chunks_exact_mut(SIDE).zip(self.cells.iter()) {
            chunk.copy_from_slice(row);
        }
        flat
    }
}
