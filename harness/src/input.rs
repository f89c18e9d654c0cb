//! Board input: one line of 16 whitespace-separated numbers per board.
//!
//! Tokens may be integral (`5`) or floating (`5.0`, `5.9`); floats are
//! truncated toward zero before validation.

use std::fmt;
use std::io::BufRead;

use fifteen_kernel::carrier::board::Board;

/// Error reading or parsing a board line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token was not numeric, or the parsed values are not a board.
    MalformedInput { line: usize, detail: String },
    /// The input ended before the expected line.
    MissingLine { line: usize },
    /// The underlying reader failed.
    Io { detail: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { line, detail } => {
                write!(f, "malformed board on input line {line}: {detail}")
            }
            Self::MissingLine { line } => {
                write!(f, "input ended before line {line} (expected a board)")
            }
            Self::Io { detail } => write!(f, "failed to read input: {detail}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one numeric token, truncating floats toward zero.
///
/// # Errors
///
/// Returns a description of the problem if the token is neither an integer
/// nor a finite float.
pub fn parse_token(token: &str) -> Result<i64, String> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            // Out-of-range magnitudes saturate and are rejected by the board check.
            #[allow(clippy::cast_possible_truncation)]
            let truncated = value.trunc() as i64;
            Ok(truncated)
        }
        Ok(_) => Err(format!("token {token:?} is not a finite number")),
        Err(_) => Err(format!("token {token:?} is not a number")),
    }
}

/// Parse a board from a line of text. `line` is the 1-based input line
/// number used in error messages.
///
/// # Errors
///
/// Returns [`InputError::MalformedInput`] for non-numeric tokens, a token
/// count other than 16, or values that are not a permutation of 0..=15.
pub fn parse_board_line(line: usize, text: &str) -> Result<Board, InputError> {
    let values = text
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<i64>, String>>()
        .map_err(|detail| InputError::MalformedInput { line, detail })?;

    Board::from_tiles(&values).map_err(|e| InputError::MalformedInput {
        line,
        detail: e.to_string(),
    })
}

/// Read the next line from `reader` and parse it as a board.
///
/// # Errors
///
/// [`InputError::MissingLine`] at end of input, [`InputError::Io`] if the
/// read fails, otherwise whatever [`parse_board_line`] reports.
pub fn read_board_line<R: BufRead>(reader: &mut R, line: usize) -> Result<Board, InputError> {
    let mut text = String::new();
    let read = reader
        .read_line(&mut text)
        .map_err(|e| InputError::Io {
            detail: e.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::MissingLine { line });
    }
    parse_board_line(line, &text)
}

/// Read the start board (line 1) and the goal board (line 2).
///
/// # Errors
///
/// See [`read_board_line`].
pub fn read_boards<R: BufRead>(mut reader: R) -> Result<(Board, Board), InputError> {
    let start = read_board_line(&mut reader, 1)?;
    let goal = read_board_line(&mut reader, 2)?;
    Ok((start, goal))
}
