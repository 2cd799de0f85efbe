//! Long algebraic move notation (`e2e4`, `e7e8q`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::undo_state::{MoveRecord, SpecialMove};
use crate::move_generation::legal_move_generator::LegalMove;
use crate::utils::algebraic::algebraic_to_square;

/// A move as typed by a user: squares plus an optional promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> ChessResult<ParsedMove> {
    let invalid = || ChessError::InvalidMoveNotation(text.to_owned());
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(promotion_from_char(ch).ok_or_else(invalid)?),
    };

    Ok(ParsedMove { from, to, promotion })
}

pub fn legal_move_to_long_algebraic(mv: &LegalMove) -> String {
    format_move(mv.from, mv.to, mv.promotion)
}

pub fn record_to_long_algebraic(record: &MoveRecord) -> String {
    let promotion = match record.special {
        SpecialMove::Promotion(kind) => Some(kind),
        _ => None,
    };
    format_move(record.from, record.to, promotion)
}

fn format_move(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = format!("{from}{to}");
    if let Some(ch) = promotion.and_then(promotion_to_char) {
        out.push(ch);
    }
    out
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Queen => Some('q'),
        PieceKind::Rook => Some('r'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Knight => Some('n'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv = parse_long_algebraic("e2e4").expect("e2e4 should parse");
        assert_eq!(mv.from.to_string(), "e2");
        assert_eq!(mv.to.to_string(), "e4");
        assert_eq!(mv.promotion, None);

        let mv = parse_long_algebraic("e7e8n").expect("e7e8n should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
        let legal = LegalMove {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        };
        assert_eq!(legal_move_to_long_algebraic(&legal), "e7e8n");
    }

    #[test]
    fn rejects_malformed_moves() {
        for bad in ["", "e2", "e2e9", "e7e8k", "e2e4qq", "é2e4"] {
            assert_eq!(
                parse_long_algebraic(bad),
                Err(ChessError::InvalidMoveNotation(bad.to_owned()))
            );
        }
    }
}
