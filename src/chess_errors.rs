//! Errors used throughout the rules engine.
//!
//! `MoveRejected` covers every expected, recoverable reason a proposed move is
//! refused; the engine state is untouched when one is returned. `ChessError`
//! is the crate-wide error that wraps rejections alongside undo, parsing and
//! invariant failures.
//!
//! Usage guidelines:
//! - Rejections and `NothingToUndo` are ordinary outcomes: match on them and
//!   re-prompt.
//! - `InvariantViolation` means the board lost or duplicated a king. That is a
//!   bug in move application, never a user error; callers should abort.

use thiserror::Error;

/// Why a proposed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoveRejected {
    #[error("no piece on the source square")]
    NoPieceAtSource,
    #[error("the piece on the source square belongs to the side not on move")]
    WrongTurn,
    #[error("square is off the board")]
    OutOfBounds,
    #[error("source and destination are the same square")]
    SameSquare,
    #[error("destination is occupied by a piece of the same color")]
    FriendlyFireCapture,
    #[error("the piece cannot move that way")]
    GeometricallyIllegal,
    #[error("the move would leave the mover's own king in check")]
    LeavesOwnKingInCheck,
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("move rejected: {0}")]
    MoveRejected(#[from] MoveRejected),

    #[error("no moves to undo")]
    NothingToUndo,

    /// Missing or duplicated king. Fatal under correct engine operation.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidMoveNotation(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    /// Whether the caller can simply re-prompt after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChessError::InvariantViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_converts_and_formats() {
        let err: ChessError = MoveRejected::WrongTurn.into();
        assert_eq!(err, ChessError::MoveRejected(MoveRejected::WrongTurn));
        assert!(err.to_string().starts_with("move rejected:"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn invariant_violation_is_fatal() {
        let err = ChessError::InvariantViolation("no white king".to_owned());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "board invariant violated: no white king");
    }
}
