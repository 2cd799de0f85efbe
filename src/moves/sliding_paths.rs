//! Ray walking shared by the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Unit step from `from` toward `to` when they share a rank, file or
/// diagonal. `None` for any other pair, including `from == to`.
#[inline]
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let d_rank = to.rank() as i8 - from.rank() as i8;
    let d_file = to.file() as i8 - from.file() as i8;
    if (d_rank, d_file) == (0, 0) {
        return None;
    }
    if d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs() {
        Some((d_rank.signum(), d_file.signum()))
    } else {
        None
    }
}

/// Squares strictly between two aligned squares, nearest to `from` first.
/// Empty when the squares are adjacent or not aligned.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let Some((step_rank, step_file)) = line_step(from, to) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(6);
    let mut cursor = from.offset(step_rank, step_file);
    while let Some(sq) = cursor {
        if sq == to {
            break;
        }
        out.push(sq);
        cursor = sq.offset(step_rank, step_file);
    }
    out
}

/// Every square strictly between `from` and `to` is empty.
#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).into_iter().all(|sq| board.is_empty(sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).expect("on board")
    }

    #[test]
    fn between_walks_diagonals_and_files() {
        assert_eq!(squares_between(sq(7, 0), sq(4, 3)), vec![sq(6, 1), sq(5, 2)]);
        assert_eq!(squares_between(sq(0, 4), sq(3, 4)), vec![sq(1, 4), sq(2, 4)]);
        assert!(squares_between(sq(0, 0), sq(1, 2)).is_empty());
        assert!(squares_between(sq(3, 3), sq(3, 4)).is_empty());
    }

    #[test]
    fn blocked_path_is_detected() {
        let mut board = Board::new_empty();
        assert!(path_is_clear(&board, sq(7, 0), sq(0, 0)));
        board.set(sq(4, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!path_is_clear(&board, sq(7, 0), sq(0, 0)));
        // The destination itself does not count as blocking.
        assert!(path_is_clear(&board, sq(7, 0), sq(4, 0)));
    }
}
