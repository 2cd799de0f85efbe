//! Pseudo-legal move validation.
//!
//! Answers whether the piece on `from` could geometrically reach `to` given
//! the current occupancy, ignoring whether the mover's king ends up in check.
//! The check detector reuses this in "attack mode" by probing enemy pieces
//! against the king's square.

use crate::chess_errors::MoveRejected;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_can_reach;
use crate::moves::king_moves::king_can_reach;
use crate::moves::knight_moves::knight_can_reach;
use crate::moves::pawn_moves::pawn_can_reach;
use crate::moves::queen_moves::queen_can_reach;
use crate::moves::rook_moves::rook_can_reach;

/// Validate `from -> to` for the piece standing on `from`, reporting the
/// first failed condition. The side to move is not consulted.
pub fn check_pseudo_legal(board: &Board, from: Square, to: Square) -> Result<Piece, MoveRejected> {
    let piece = board.get(from).ok_or(MoveRejected::NoPieceAtSource)?;
    if from == to {
        return Err(MoveRejected::SameSquare);
    }
    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return Err(MoveRejected::FriendlyFireCapture);
    }
    if !piece_can_reach(board, piece, from, to) {
        return Err(MoveRejected::GeometricallyIllegal);
    }
    Ok(piece)
}

#[inline]
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    check_pseudo_legal(board, from, to).is_ok()
}

#[inline]
fn piece_can_reach(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_can_reach(board, from, to, piece.color),
        PieceKind::Rook => rook_can_reach(board, from, to),
        PieceKind::Knight => knight_can_reach(from, to),
        PieceKind::Bishop => bishop_can_reach(board, from, to),
        PieceKind::Queen => queen_can_reach(board, from, to),
        PieceKind::King => king_can_reach(board, from, to, piece.color),
    }
}
