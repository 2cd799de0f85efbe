//! The move engine: the single owner and mutator of a game's board.
//!
//! Every proposal runs the same pipeline: ownership and turn checks,
//! pseudo-legal validation, a simulated application on a scratch board, the
//! self-check test, and only then a commit that pushes the undo record and
//! recomputes the game status. A rejected proposal leaves the engine exactly
//! as it was.

use std::collections::BTreeSet;

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult, MoveRejected};
use crate::game_state::board::{Board, BoardSnapshot};
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{MoveRecord, SpecialMove};
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, unapply_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{self, simulate_legal_move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Supplies the piece a pawn promotes to. Called synchronously, at most once
/// per move, and only for a legal move onto the last rank. `None` means queen.
pub trait PromotionChooser {
    fn request_promotion_choice(&mut self, color: Color) -> Option<PieceKind>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color) -> Option<PieceKind>,
{
    fn request_promotion_choice(&mut self, color: Color) -> Option<PieceKind> {
        self(color)
    }
}

/// Chooser that always takes the default queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn request_promotion_choice(&mut self, _color: Color) -> Option<PieceKind> {
        None
    }
}

struct Preselected(Option<PieceKind>);

impl PromotionChooser for Preselected {
    fn request_promotion_choice(&mut self, _color: Color) -> Option<PieceKind> {
        self.0
    }
}

/// A committed move and the status it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    pub record: MoveRecord,
    pub status: GameStatus,
}

pub type MoveOutcome = ChessResult<MoveApplied>;

/// Authoritative game: board, move history and cached status.
#[derive(Debug, Clone)]
pub struct MoveEngine {
    board: Board,
    history: Vec<MoveRecord>,
    status: GameStatus,
    config: RulesConfig,
}

/// State handed to the presentation layer by `new_game`.
pub type EngineState = MoveEngine;

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new_game()
    }
}

impl MoveEngine {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::starting_position(),
            history: Vec::new(),
            status: GameStatus::Ongoing,
            config,
        }
    }

    /// Start from an arbitrary position. Undo stops at this position.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Self::from_fen_with_config(fen, RulesConfig::default())
    }

    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> ChessResult<Self> {
        let board = parse_fen(fen)?;
        let status = evaluate_status(&board, config)?;
        Ok(Self {
            board,
            history: Vec::new(),
            status,
            config,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn fen(&self) -> String {
        generate_fen(&self.board, self.history.len())
    }

    /// Propose a move with a pre-supplied promotion answer.
    pub fn propose_move(&mut self, from: Square, to: Square, promotion_choice: Option<PieceKind>) -> MoveOutcome {
        self.propose_move_with(from, to, &mut Preselected(promotion_choice))
    }

    /// Propose a move, asking `chooser` for the promotion piece if needed.
    pub fn propose_move_with(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut dyn PromotionChooser,
    ) -> MoveOutcome {
        let outcome = self.try_commit(from, to, chooser);
        match &outcome {
            Ok(applied) => debug!(
                %from,
                %to,
                special = ?applied.record.special,
                status = %applied.status,
                "move applied"
            ),
            Err(ChessError::MoveRejected(reason)) => debug!(%from, %to, %reason, "move rejected"),
            Err(_) => {}
        }
        outcome
    }

    /// Propose a move from raw coordinates, which may be off the board.
    pub fn propose_move_coords(
        &mut self,
        from: (i8, i8),
        to: (i8, i8),
        promotion_choice: Option<PieceKind>,
    ) -> MoveOutcome {
        let from = Square::from_coords(from.0, from.1).ok_or(MoveRejected::OutOfBounds)?;
        let to = Square::from_coords(to.0, to.1).ok_or(MoveRejected::OutOfBounds)?;
        self.propose_move(from, to, promotion_choice)
    }

    fn try_commit(&mut self, from: Square, to: Square, chooser: &mut dyn PromotionChooser) -> MoveOutcome {
        let piece = self.board.get(from).ok_or(MoveRejected::NoPieceAtSource)?;
        if piece.color != self.board.turn() {
            return Err(MoveRejected::WrongTurn.into());
        }

        let (mut next, mut record) = simulate_legal_move(&self.board, from, to, None, self.config)?;
        if let SpecialMove::Promotion(_) = record.special {
            let choice = chooser.request_promotion_choice(piece.color);
            (next, record) = apply_move(&self.board, from, to, choice)?;
        }

        // Status is computed before anything is committed.
        let status = evaluate_status(&next, self.config)?;
        self.board = next;
        self.history.push(record);
        self.status = status;
        Ok(MoveApplied { record, status })
    }

    /// Revert the most recent move.
    pub fn undo_last(&mut self) -> ChessResult<MoveRecord> {
        let record = *self.history.last().ok_or(ChessError::NothingToUndo)?;
        let mut board = self.board.clone();
        unapply_move(&mut board, &record);
        let status = evaluate_status(&board, self.config)?;

        self.history.pop();
        self.board = board;
        self.status = status;
        debug!(from = %record.from, to = %record.to, "move undone");
        Ok(record)
    }

    /// `undo_last` for callers that only need to know whether anything changed.
    pub fn try_undo(&mut self) -> bool {
        self.undo_last().is_ok()
    }

    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        is_in_check(&self.board, color)
    }

    pub fn legal_moves_for(&self, color: Color) -> ChessResult<Vec<(Square, Square)>> {
        legal_move_generator::legal_moves_for(&self.board, color, self.config)
    }

    /// Legal targets for the piece on `from`; empty for an empty square or a
    /// piece whose side is not on move.
    pub fn legal_destinations(&self, from: Square) -> ChessResult<BTreeSet<Square>> {
        match self.board.get(from) {
            Some(piece) if piece.color == self.board.turn() => {
                legal_move_generator::legal_destinations(&self.board, from, self.config)
            }
            _ => Ok(BTreeSet::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn play(engine: &mut MoveEngine, from: &str, to: &str) -> MoveApplied {
        engine
            .propose_move(sq(from), sq(to), None)
            .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"))
    }

    #[test]
    fn rejection_reasons_and_state_untouched() {
        let mut engine = MoveEngine::new_game();
        let before = engine.board().clone();

        let cases = [
            ("e4", "e5", MoveRejected::NoPieceAtSource),
            ("e7", "e5", MoveRejected::WrongTurn),
            ("e2", "e2", MoveRejected::SameSquare),
            ("d1", "d2", MoveRejected::FriendlyFireCapture),
            ("e2", "e5", MoveRejected::GeometricallyIllegal),
        ];
        for (from, to, reason) in cases {
            assert_eq!(engine.propose_move(sq(from), sq(to), None), Err(ChessError::from(reason)));
        }
        assert_eq!(
            engine.propose_move_coords((6, 4), (-1, 4), None),
            Err(ChessError::from(MoveRejected::OutOfBounds))
        );
        assert_eq!(engine.board(), &before);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn turn_alternates_only_on_success() {
        let mut engine = MoveEngine::new_game();
        play(&mut engine, "e2", "e4");
        assert_eq!(engine.turn(), Color::Black);
        assert!(engine.propose_move(sq("e4"), sq("e5"), None).is_err());
        assert_eq!(engine.turn(), Color::Black);
        play(&mut engine, "e7", "e5");
        assert_eq!(engine.turn(), Color::White);
    }

    #[test]
    fn undo_on_fresh_game_reports_nothing_to_undo() {
        let mut engine = MoveEngine::new_game();
        assert_eq!(engine.undo_last(), Err(ChessError::NothingToUndo));
        assert!(!engine.try_undo());
    }

    #[test]
    fn promotion_chooser_is_consulted_once() {
        let mut engine = MoveEngine::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut asked = Vec::new();
        let mut chooser = |color: Color| {
            asked.push(color);
            Some(PieceKind::Knight)
        };
        let applied = engine
            .propose_move_with(sq("a7"), sq("a8"), &mut chooser)
            .expect("promotion should be legal");
        assert_eq!(asked, vec![Color::White]);
        assert_eq!(applied.record.special, SpecialMove::Promotion(PieceKind::Knight));
        assert_eq!(
            engine.board().get(sq("a8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn chooser_not_consulted_for_ordinary_moves() {
        let mut engine = MoveEngine::new_game();
        let mut asked = false;
        let mut chooser = |_: Color| -> Option<PieceKind> {
            asked = true;
            None
        };
        engine
            .propose_move_with(sq("g1"), sq("f3"), &mut chooser)
            .expect("knight move should be legal");
        assert!(!asked);
    }

    #[test]
    fn legal_destinations_only_for_side_to_move() {
        let engine = MoveEngine::new_game();
        let targets = engine.legal_destinations(sq("b1")).expect("enumeration");
        assert_eq!(targets, BTreeSet::from([sq("a3"), sq("c3")]));
        assert!(engine.legal_destinations(sq("b8")).expect("enumeration").is_empty());
        assert!(engine.legal_destinations(sq("e4")).expect("enumeration").is_empty());
    }

    #[test]
    fn fen_reflects_history_length() {
        let mut engine = MoveEngine::new_game();
        play(&mut engine, "e2", "e4");
        assert_eq!(engine.fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }
}
