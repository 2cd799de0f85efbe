//! Check detection.
//!
//! A king is attacked when any opposing piece could pseudo-legally move onto
//! its square. Pawn pushes never land on an occupied square, so only the
//! diagonal capture branch can fire against a king.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_validator::is_pseudo_legal;

/// Locate the unique king of `color`.
pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    let king = Piece::new(PieceKind::King, color);
    let mut kings = board
        .pieces_of(color)
        .filter(|(_, piece)| *piece == king)
        .map(|(sq, _)| sq);

    match (kings.next(), kings.next()) {
        (Some(sq), None) => Ok(sq),
        (None, _) => Err(ChessError::InvariantViolation(format!("no {color} king on the board"))),
        (Some(_), Some(_)) => Err(ChessError::InvariantViolation(format!(
            "more than one {color} king on the board"
        ))),
    }
}

pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(board, color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

/// Whether a piece of `attacker_color` could capture on `square`.
///
/// For an empty square a friendly placeholder is probed so pawn diagonals and
/// friendly-fire rules behave as they would against a real occupant.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    if board.get(square).is_some_and(|piece| piece.color != attacker_color) {
        return !attackers_to_square(board, square, attacker_color).is_empty();
    }
    let mut probe = board.clone();
    probe.set(square, Some(Piece::new(PieceKind::Pawn, attacker_color.opposite())));
    !attackers_to_square(&probe, square, attacker_color).is_empty()
}

/// Every piece of `attacker_color` that could move onto `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, Piece)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| is_pseudo_legal(board, *from, square))
        .collect()
}
