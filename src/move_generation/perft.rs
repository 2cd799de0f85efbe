//! Perft node counting over the legal move generator.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf statistics.
//! Promotions are expanded into all four pieces so totals line up with the
//! usual reference tables for positions where the castling rules agree.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::undo_state::SpecialMove;
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8, config: RulesConfig) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(board, config)? {
        let (next, record) = apply_move(board, mv.from, mv.to, mv.promotion)?;

        if depth > 1 {
            total.merge(perft(&next, depth - 1, config)?);
            continue;
        }

        total.nodes += 1;
        if record.captured_piece.is_some() {
            total.captures += 1;
        }
        match record.special {
            SpecialMove::EnPassantCapture => total.en_passant += 1,
            SpecialMove::CastleKingside | SpecialMove::CastleQueenside => total.castles += 1,
            SpecialMove::Promotion(_) => total.promotions += 1,
            SpecialMove::None => {}
        }
        match evaluate_status(&next, config)? {
            GameStatus::Check(_) => total.checks += 1,
            GameStatus::Checkmate(_) => {
                total.checks += 1;
                total.checkmates += 1;
            }
            GameStatus::Ongoing | GameStatus::Stalemate => {}
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Board::starting_position(), 0, RulesConfig::default()).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_matches_reference_counts() {
        let board = Board::starting_position();
        let config = RulesConfig::default();
        assert_eq!(perft(&board, 1, config).expect("perft should run").nodes, 20);

        let counts = perft(&board, 2, config).expect("perft should run");
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);

        let counts = perft(&board, 3, config).expect("perft should run");
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
    }

    #[test]
    fn endgame_position_matches_reference_counts() {
        let board = parse_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN should parse");
        let config = RulesConfig::default();
        assert_eq!(perft(&board, 1, config).expect("perft should run").nodes, 14);

        let counts = perft(&board, 2, config).expect("perft should run");
        assert_eq!(counts.nodes, 191);
        assert_eq!(counts.captures, 14);
        assert_eq!(counts.checks, 10);
    }

    #[test]
    fn promotion_position_counts_four_pieces_per_push() {
        let board = parse_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let counts = perft(&board, 1, RulesConfig::default()).expect("perft should run");
        assert_eq!(counts.nodes, 7);
        assert_eq!(counts.promotions, 4);
    }
}
