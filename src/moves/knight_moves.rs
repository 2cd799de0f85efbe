//! Knight jump geometry. Knights ignore occupancy between squares.

use crate::game_state::chess_types::Square;

#[inline]
pub fn knight_can_reach(from: Square, to: Square) -> bool {
    let d_rank = from.rank().abs_diff(to.rank());
    let d_file = from.file().abs_diff(to.file());
    matches!((d_rank, d_file), (1, 2) | (2, 1))
}
