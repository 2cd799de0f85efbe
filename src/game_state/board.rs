//! Authoritative board container.
//!
//! `Board` stores the 8x8 occupancy grid together with the positional state
//! needed to resolve legality: castling rights, the en-passant target and the
//! side to move. It performs no validation; all rules live in `moves` and
//! `move_generation`.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

/// Read-only grid handed to renderers, indexed `[rank][file]`.
pub type BoardSnapshot = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: BoardSnapshot,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    /// Empty board, White to move, no castling rights.
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            turn: Color::White,
        }
    }

    /// Standard initial position with full castling rights.
    pub fn starting_position() -> Self {
        let mut board = Self::new_empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as u8;
                board.set(Square::at(back, file), Some(Piece::new(*kind, color)));
                board.set(Square::at(pawns, file), Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board.castling_rights = CastlingRights::ALL;
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Remove and return the occupant of `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn move_rights(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights.has(color, side)
    }

    #[inline]
    pub fn clear_rights(&mut self, color: Color, side: CastleSide) {
        self.castling_rights.clear(color, side);
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Replace the rights wholesale. Used by undo and position setup only.
    #[inline]
    pub(crate) fn restore_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Occupied squares with their pieces, rank index 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[inline]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.squares
    }
}
