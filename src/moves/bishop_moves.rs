use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::sliding_paths::path_is_clear;

/// Equal rank and file distance, nothing in between.
#[inline]
pub fn bishop_can_reach(board: &Board, from: Square, to: Square) -> bool {
    let d_rank = from.rank().abs_diff(to.rank());
    let d_file = from.file().abs_diff(to.file());
    d_rank == d_file && d_rank != 0 && path_is_clear(board, from, to)
}
