//! FEN-to-Board parser.
//!
//! Builds a fully-populated [`Board`] from a Forsyth-Edwards Notation string:
//! placement, side to move, castling rights and en-passant target. Clock
//! fields are checked for shape and otherwise ignored since the rules engine
//! does not track draws by move count.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    // Clocks are optional; when present they must be numbers.
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid clock field: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board)?;
    board.set_turn(parse_side_to_move(side_part)?);
    board.restore_castling_rights(parse_castling_rights(castling_part, &board)?);
    board.set_en_passant_target(parse_en_passant_square(en_passant_part)?);

    validate(&board)?;
    Ok(board)
}

fn parse_board(board_part: &str, board: &mut Board) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists the eighth rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board.set(Square::at(rank as u8, file as u8), Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

/// Rights whose king or rook is not on its home square are dropped rather
/// than rejected.
fn parse_castling_rights(castling_part: &str, board: &Board) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::Kingside),
            'Q' => (Color::White, CastleSide::Queenside),
            'k' => (Color::Black, CastleSide::Kingside),
            'q' => (Color::Black, CastleSide::Queenside),
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        };
        let king_in_place = board.get(king_home(color)) == Some(Piece::new(PieceKind::King, color));
        let rook_in_place = board.get(rook_home(color, side)) == Some(Piece::new(PieceKind::Rook, color));
        if king_in_place && rook_in_place {
            rights.grant(color, side);
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))
}

fn validate(board: &Board) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(format!("expected exactly one {color} king, found {kings}")));
        }
    }
    if is_in_check(board, board.turn().opposite())? {
        return Err(invalid("side not to move is in check"));
    }
    Ok(())
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
