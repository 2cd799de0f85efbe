//! Core value types shared by every rules subsystem.
//!
//! Squares, colors, piece kinds and castling rights are small `Copy` values so
//! the board, validator and check detector can pass them around freely.

use std::fmt;

use crate::utils::algebraic::square_to_algebraic;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step. White advances toward rank index 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. Color is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Whether a pawn may be promoted to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// One chess unit. Never mutated in place; promotion substitutes a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Rank index 0 is the eighth rank, rank index 7 the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are below 8.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Self { rank, file }
    }

    /// Build a square from signed coordinates, as produced by pointer mapping
    /// or offset arithmetic. Returns `None` when off-board.
    #[inline]
    pub fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Square reached by adding `(d_rank, d_file)`, if it stays on the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_coords(self.rank as i8 + d_rank, self.file as i8 + d_file)
    }

    /// Iterate every square, rank index 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }
}

/// Per-color, per-side castling availability. Flags are only ever cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    flags: [[bool; 2]; 2],
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        flags: [[true; 2]; 2],
    };
    pub const NONE: CastlingRights = CastlingRights {
        flags: [[false; 2]; 2],
    };

    #[inline]
    pub const fn has(&self, color: Color, side: CastleSide) -> bool {
        self.flags[color.index()][side.index()]
    }

    #[inline]
    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.flags[color.index()][side.index()] = false;
    }

    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.flags[color.index()] = [false; 2];
    }

    /// Grant a right. Only used while building a position from setup notation.
    #[inline]
    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        self.flags[color.index()][side.index()] = true;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
