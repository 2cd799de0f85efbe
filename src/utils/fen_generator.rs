//! Board-to-FEN generation.
//!
//! The halfmove clock is always written as 0 because the rules engine does
//! not track it; the fullmove number is derived from the number of plies
//! played since the game's starting position.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn generate_fen(board: &Board, plies_played: usize) -> String {
    let side_to_move = match board.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = board
        .en_passant_target()
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} 0 {}",
        generate_board_field(board),
        side_to_move,
        generate_castling_field(board.castling_rights()),
        en_passant,
        1 + plies_played / 2
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.get(Square::at(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (color, side, ch) in [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ] {
        if rights.has(color, side) {
            out.push(ch);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

pub(crate) fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
