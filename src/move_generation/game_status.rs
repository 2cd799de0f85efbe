//! Game status derivation for the side to move.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Externally visible game status. The color is the side in check or mated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "checkmate, {color} loses"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Status for the side to move on `board`.
pub fn evaluate_status(board: &Board, config: RulesConfig) -> ChessResult<GameStatus> {
    let color = board.turn();
    let in_check = is_in_check(board, color)?;
    let can_move = has_any_legal_move(board, color, config)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(color),
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(color),
        (false, true) => GameStatus::Ongoing,
    })
}
