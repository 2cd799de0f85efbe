//! Random legal playouts for exercising the engine from reachable positions.
//!
//! Used by property tests and benchmarks to generate arbitrary but legal game
//! histories. Moves are drawn uniformly; nothing here evaluates positions.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_engine::MoveEngine;

/// Play up to `plies` uniformly random legal moves on `engine`, stopping
/// early when the game is over. Returns the number of moves played.
pub fn random_playout<R: Rng + ?Sized>(engine: &mut MoveEngine, plies: usize, rng: &mut R) -> ChessResult<usize> {
    let mut played = 0;
    while played < plies && !engine.status().is_over() {
        let moves = legal_moves(engine.board(), engine.config())?;
        let Some(mv) = moves.choose(rng) else {
            break;
        };
        engine.propose_move(mv.from, mv.to, mv.promotion)?;
        played += 1;
    }
    Ok(played)
}
