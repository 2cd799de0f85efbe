//! Pawn movement: pushes, the initial double push, diagonal captures and
//! en passant. Direction depends on color.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[inline]
pub fn pawn_can_reach(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let d_file = to.file() as i8 - from.file() as i8;

    match (d_rank, d_file.abs()) {
        (r, 0) if r == dir => board.is_empty(to),
        (r, 0) if r == 2 * dir => {
            from.rank() == color.pawn_start_rank()
                && from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid))
                && board.is_empty(to)
        }
        (r, 1) if r == dir => match board.get(to) {
            Some(target) => target.color != color,
            None => is_en_passant_capture(board, from, to, color),
        },
        _ => false,
    }
}

/// Diagonal step onto the recorded en-passant target with the double-pushed
/// enemy pawn beside the origin.
#[inline]
pub fn is_en_passant_capture(board: &Board, from: Square, to: Square, color: Color) -> bool {
    board.en_passant_target() == Some(to)
        && board.is_empty(to)
        && en_passant_victim_square(from, to)
            .and_then(|sq| board.get(sq))
            .is_some_and(|piece| piece == Piece::new(PieceKind::Pawn, color.opposite()))
}

/// Square of the pawn removed by an en-passant capture: origin rank,
/// destination file.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    Square::new(from.rank(), to.file())
}

/// Square skipped by a double push, if `from -> to` is one.
#[inline]
pub fn double_push_skipped_square(from: Square, to: Square) -> Option<Square> {
    if from.file() != to.file() || from.rank().abs_diff(to.rank()) != 2 {
        return None;
    }
    Square::new((from.rank() + to.rank()) / 2, from.file())
}
