use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_can_reach;
use crate::moves::rook_moves::rook_can_reach;

#[inline]
pub fn queen_can_reach(board: &Board, from: Square, to: Square) -> bool {
    rook_can_reach(board, from, to) || bishop_can_reach(board, from, to)
}
