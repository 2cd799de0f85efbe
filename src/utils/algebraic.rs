//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and [`Square`]
//! values. Rank index 0 is the eighth rank, so `"a8"` is `(0, 0)` and `"h1"`
//! is `(7, 7)`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file_index = file - b'a';
    let rank_index = b'8' - rank;
    Ok(Square::at(rank_index, file_index))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'8' - square.rank());
    format!("{file_char}{rank_char}")
}
