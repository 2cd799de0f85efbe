//! King steps and the castling shape.
//!
//! Castling here is purely positional: the right is still held, king and rook
//! stand on their home squares and every square between them is empty. Whether
//! the king starts in, or passes through, check is decided by the move engine.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_king_target, king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::moves::sliding_paths::path_is_clear;

#[inline]
pub fn king_can_reach(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let d_rank = from.rank().abs_diff(to.rank());
    let d_file = from.file().abs_diff(to.file());
    if d_rank.max(d_file) == 1 {
        return true;
    }
    castle_side_of(from, to, color).is_some_and(|side| castling_is_open(board, color, side))
}

/// The wing a two-file king move from its home square castles toward.
#[inline]
pub fn castle_side_of(from: Square, to: Square, color: Color) -> Option<CastleSide> {
    if from != king_home(color) {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| castle_king_target(color, *side) == to)
}

pub fn castling_is_open(board: &Board, color: Color, side: CastleSide) -> bool {
    let king_sq = king_home(color);
    let rook_sq = rook_home(color, side);
    board.move_rights(color, side)
        && board.get(king_sq) == Some(Piece::new(PieceKind::King, color))
        && board.get(rook_sq) == Some(Piece::new(PieceKind::Rook, color))
        && path_is_clear(board, king_sq, rook_sq)
}
