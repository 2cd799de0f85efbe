//! Canonical chess-rule constants and rule toggles.
//!
//! Holds the standard starting layout, home squares used by castling, and the
//! [`RulesConfig`] knobs a game is created with.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from file a to file h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Promotion used when the caller gives no valid choice.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

const KING_HOME_FILE: u8 = 4;

#[inline]
fn home_square(color: Color, file: u8) -> Square {
    Square::at(color.back_rank(), file)
}

#[inline]
pub fn king_home(color: Color) -> Square {
    home_square(color, KING_HOME_FILE)
}

#[inline]
pub fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => home_square(color, 7),
        CastleSide::Queenside => home_square(color, 0),
    }
}

/// Where the king lands when castling toward `side`.
#[inline]
pub fn castle_king_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => home_square(color, 6),
        CastleSide::Queenside => home_square(color, 2),
    }
}

/// Where the rook lands when castling toward `side` (adjacent to the king).
#[inline]
pub fn castle_rook_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => home_square(color, 5),
        CastleSide::Queenside => home_square(color, 3),
    }
}

/// Rule toggles fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    /// Reject castling when the square the king passes over is attacked.
    /// Off by default: only castling out of check is refused.
    pub forbid_castling_through_check: bool,
}

impl RulesConfig {
    pub const STRICT: RulesConfig = RulesConfig {
        forbid_castling_through_check: true,
    };
}
