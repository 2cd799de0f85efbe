use crate::game_state::chess_types::*;

/// Move shape beyond a plain relocation (with optional capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    CastleKingside,
    CastleQueenside,
    EnPassantCapture,
    Promotion(PieceKind),
}

impl SpecialMove {
    #[inline]
    pub fn castle_side(self) -> Option<CastleSide> {
        match self {
            SpecialMove::CastleKingside => Some(CastleSide::Kingside),
            SpecialMove::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Single undo record pushed for every committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Where the captured piece stood; differs from `to` only for en passant.
    pub captured_square: Option<Square>,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub special: SpecialMove,
}
