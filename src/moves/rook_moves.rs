use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_paths::path_is_clear;

/// Same rank or same file, nothing in between.
#[inline]
pub fn rook_can_reach(board: &Board, from: Square, to: Square) -> bool {
    let orthogonal = from.rank() == to.rank() || from.file() == to.file();
    orthogonal && from != to && path_is_clear(board, from, to)
}
