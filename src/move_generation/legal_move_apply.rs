//! Move application and reversal.
//!
//! `apply_move` never touches its input: it builds the successor board on a
//! scratch copy and returns it with the undo record, so a caller can inspect
//! the result and either commit it or drop it. `unapply_move` reverses a
//! record in place.

use tracing::warn;

use crate::chess_errors::{ChessResult, MoveRejected};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_rook_target, rook_home, DEFAULT_PROMOTION};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{MoveRecord, SpecialMove};
use crate::moves::king_moves::castle_side_of;
use crate::moves::pawn_moves::{double_push_skipped_square, en_passant_victim_square, is_en_passant_capture};

/// Apply every side effect of `from -> to` to a copy of `board`.
///
/// The move is assumed pseudo-legal; only a missing source piece is reported.
/// `promotion` is consulted only when a pawn reaches its last rank.
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<(Board, MoveRecord)> {
    let moved_piece = board.get(from).ok_or(MoveRejected::NoPieceAtSource)?;
    let color = moved_piece.color;
    let mut next = board.clone();
    let mut special = SpecialMove::None;

    // Captures, including the pawn standing beside an en-passant target.
    let (captured_piece, captured_square) =
        if moved_piece.kind == PieceKind::Pawn && is_en_passant_capture(board, from, to, color) {
            special = SpecialMove::EnPassantCapture;
            let victim_sq = en_passant_victim_square(from, to);
            (victim_sq.and_then(|sq| next.take(sq)), victim_sq)
        } else {
            let captured = next.take(to);
            (captured, captured.map(|_| to))
        };

    // Castling rook relocation.
    if moved_piece.kind == PieceKind::King {
        if let Some(side) = castle_side_of(from, to, color) {
            let rook = next.take(rook_home(color, side));
            next.set(castle_rook_target(color, side), rook);
            special = match side {
                CastleSide::Kingside => SpecialMove::CastleKingside,
                CastleSide::Queenside => SpecialMove::CastleQueenside,
            };
        }
    }

    // Promotion substitutes a new piece on the destination.
    let placed = if moved_piece.kind == PieceKind::Pawn && to.rank() == color.promotion_rank() {
        let kind = resolve_promotion(promotion);
        special = SpecialMove::Promotion(kind);
        Piece::new(kind, color)
    } else {
        moved_piece
    };
    next.take(from);
    next.set(to, Some(placed));

    let en_passant_target = if moved_piece.kind == PieceKind::Pawn {
        double_push_skipped_square(from, to)
    } else {
        None
    };
    next.set_en_passant_target(en_passant_target);

    update_castling_rights(&mut next, moved_piece, from, to);
    next.set_turn(color.opposite());

    let record = MoveRecord {
        from,
        to,
        moved_piece,
        captured_piece,
        captured_square,
        prev_castling_rights: board.castling_rights(),
        prev_en_passant_target: board.en_passant_target(),
        special,
    };
    Ok((next, record))
}

/// Reverse `record` on `board`, which must be the position right after it.
pub fn unapply_move(board: &mut Board, record: &MoveRecord) {
    let color = record.moved_piece.color;

    board.take(record.to);
    board.set(record.from, Some(record.moved_piece));

    if let Some(side) = record.special.castle_side() {
        let rook = board.take(castle_rook_target(color, side));
        board.set(rook_home(color, side), rook);
    }

    if let (Some(piece), Some(sq)) = (record.captured_piece, record.captured_square) {
        board.set(sq, Some(piece));
    }

    board.restore_castling_rights(record.prev_castling_rights);
    board.set_en_passant_target(record.prev_en_passant_target);
    board.set_turn(color);
}

#[inline]
fn resolve_promotion(choice: Option<PieceKind>) -> PieceKind {
    match choice {
        Some(kind) if kind.is_promotion_target() => kind,
        Some(kind) => {
            warn!(?kind, "invalid promotion choice, promoting to queen");
            DEFAULT_PROMOTION
        }
        None => DEFAULT_PROMOTION,
    }
}

fn update_castling_rights(board: &mut Board, moved_piece: Piece, from: Square, to: Square) {
    let color = moved_piece.color;
    if moved_piece.kind == PieceKind::King {
        for side in CastleSide::BOTH {
            board.clear_rights(color, side);
        }
    }

    for side in CastleSide::BOTH {
        if moved_piece.kind == PieceKind::Rook && from == rook_home(color, side) {
            board.clear_rights(color, side);
        }
        // Capturing a rook on its home corner removes that right too.
        if to == rook_home(color.opposite(), side) {
            board.clear_rights(color.opposite(), side);
        }
    }
}
