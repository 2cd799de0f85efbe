//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the rules subsystems (board state, per-piece movement,
//! legality and check detection, the move engine and status evaluation) and
//! the notation/diagnostic helpers so the driver binary, tests and benches can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_validator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_paths;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_engine;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod logger;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult, MoveRejected};
pub use game_state::board::{Board, BoardSnapshot};
pub use game_state::chess_rules::RulesConfig;
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::undo_state::{MoveRecord, SpecialMove};
pub use move_generation::game_status::GameStatus;
pub use move_generation::move_engine::{
    AlwaysQueen, EngineState, MoveApplied, MoveEngine, MoveOutcome, PromotionChooser,
};
