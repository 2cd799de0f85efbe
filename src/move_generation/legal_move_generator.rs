//! Full legality and legal-move enumeration.
//!
//! A candidate is validated pseudo-legally, simulated on a scratch copy, and
//! dropped if the mover's own king is attacked afterwards. The same routine
//! backs `propose_move`, destination highlighting, and checkmate/stalemate
//! detection, so there is a single definition of "legal".

use std::collections::BTreeSet;

use crate::chess_errors::{ChessResult, MoveRejected};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_rook_target, RulesConfig};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::moves::king_moves::castle_side_of;
use crate::moves::move_validator::check_pseudo_legal;

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One fully specified legal move. `promotion` is set only for pawn moves
/// onto the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Validate and simulate `from -> to` without committing.
///
/// Ignores whose turn it is; the move engine checks that first. Returns the
/// successor board and its undo record.
pub fn simulate_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    config: RulesConfig,
) -> ChessResult<(Board, MoveRecord)> {
    let piece = check_pseudo_legal(board, from, to)?;
    let color = piece.color;

    if piece.kind == PieceKind::King {
        if let Some(side) = castle_side_of(from, to, color) {
            if is_in_check(board, color)? {
                return Err(MoveRejected::LeavesOwnKingInCheck.into());
            }
            if config.forbid_castling_through_check
                && is_square_attacked(board, castle_rook_target(color, side), color.opposite())
            {
                return Err(MoveRejected::LeavesOwnKingInCheck.into());
            }
        }
    }

    let (next, record) = apply_move(board, from, to, promotion)?;
    if is_in_check(&next, color)? {
        return Err(MoveRejected::LeavesOwnKingInCheck.into());
    }
    Ok((next, record))
}

/// Legality of a single pair, reporting only invariant failures as errors.
pub fn is_legal_move(board: &Board, from: Square, to: Square, config: RulesConfig) -> ChessResult<bool> {
    match simulate_legal_move(board, from, to, None, config) {
        Ok(_) => Ok(true),
        Err(err) if err.is_recoverable() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Every legal destination for the piece on `from`.
pub fn legal_destinations(board: &Board, from: Square, config: RulesConfig) -> ChessResult<BTreeSet<Square>> {
    let mut out = BTreeSet::new();
    if board.is_empty(from) {
        return Ok(out);
    }
    for to in Square::all() {
        if is_legal_move(board, from, to, config)? {
            out.insert(to);
        }
    }
    Ok(out)
}

/// Every legal `(from, to)` pair for `color`, promotions collapsed.
pub fn legal_moves_for(board: &Board, color: Color, config: RulesConfig) -> ChessResult<Vec<(Square, Square)>> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        for to in legal_destinations(board, from, config)? {
            out.push((from, to));
        }
    }
    Ok(out)
}

/// Whether `color` has at least one legal move. Stops at the first hit.
pub fn has_any_legal_move(board: &Board, color: Color, config: RulesConfig) -> ChessResult<bool> {
    for (from, _) in board.pieces_of(color) {
        for to in Square::all() {
            if is_legal_move(board, from, to, config)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Legal moves for the side to move, with each promotion expanded into the
/// four possible pieces.
pub fn legal_moves(board: &Board, config: RulesConfig) -> ChessResult<Vec<LegalMove>> {
    let color = board.turn();
    let mut out = Vec::with_capacity(64);
    for (from, to) in legal_moves_for(board, color, config)? {
        let promotes = board
            .get(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.rank() == color.promotion_rank());
        if promotes {
            out.extend(PROMOTION_CHOICES.iter().map(|kind| LegalMove {
                from,
                to,
                promotion: Some(*kind),
            }));
        } else {
            out.push(LegalMove { from, to, promotion: None });
        }
    }
    Ok(out)
}
