//! End-to-end rule scenarios driven through the public engine interface.

use plum_rules::utils::algebraic::algebraic_to_square;
use plum_rules::{
    CastleSide, ChessError, Color, GameStatus, MoveApplied, MoveEngine, MoveRejected, Piece, PieceKind,
    SpecialMove, Square,
};

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("valid square")
}

fn play(engine: &mut MoveEngine, line: &str) -> Vec<MoveApplied> {
    line.split_whitespace()
        .map(|mv| {
            engine
                .propose_move(sq(&mv[0..2]), sq(&mv[2..4]), None)
                .unwrap_or_else(|err| panic!("{mv} should be legal: {err}"))
        })
        .collect()
}

fn rejected(engine: &mut MoveEngine, from: &str, to: &str) -> MoveRejected {
    match engine.propose_move(sq(from), sq(to), None) {
        Err(ChessError::MoveRejected(reason)) => reason,
        other => panic!("{from}{to} should be rejected, got {other:?}"),
    }
}

#[test]
fn pawn_double_push_only_from_start_rank() {
    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e3 e7e6");
    assert_eq!(rejected(&mut engine, "e3", "e5"), MoveRejected::GeometricallyIllegal);
    play(&mut engine, "d2d4");
    assert_eq!(engine.board().en_passant_target(), Some(sq("d3")));
}

#[test]
fn en_passant_only_on_the_immediate_reply() {
    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e4 a7a6 e4e5 d7d5");

    let mut capture_now = engine.clone();
    let applied = play(&mut capture_now, "e5d6");
    assert_eq!(applied[0].record.special, SpecialMove::EnPassantCapture);
    assert!(capture_now.board().is_empty(sq("d5")));
    assert_eq!(
        capture_now.board().get(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );

    play(&mut engine, "h2h3 h7h6");
    assert_eq!(engine.board().en_passant_target(), None);
    assert_eq!(rejected(&mut engine, "e5", "d6"), MoveRejected::GeometricallyIllegal);
}

#[test]
fn undo_en_passant_restores_pawn_beside_destination() {
    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e4 a7a6 e4e5 d7d5");
    let before = engine.board().clone();

    play(&mut engine, "e5d6");
    engine.undo_last().expect("undo should succeed");

    assert_eq!(engine.board(), &before);
    assert_eq!(
        engine.board().get(sq("d5")),
        Some(Piece::new(PieceKind::Pawn, Color::Black))
    );
    assert!(engine.board().is_empty(sq("d6")));
    assert_eq!(engine.board().en_passant_target(), Some(sq("d6")));
}

#[test]
fn kingside_castling_needs_f1_and_g1_vacated() {
    let mut engine = MoveEngine::new_game();
    assert_eq!(rejected(&mut engine, "e1", "g1"), MoveRejected::FriendlyFireCapture);

    play(&mut engine, "e2e3 e7e6 g1f3 g8f6");
    assert_eq!(rejected(&mut engine, "e1", "g1"), MoveRejected::GeometricallyIllegal);

    play(&mut engine, "f1e2 f8e7");
    let applied = play(&mut engine, "e1g1");
    assert_eq!(applied[0].record.special, SpecialMove::CastleKingside);
    assert_eq!(
        engine.board().get(sq("f1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert!(!engine.board().move_rights(Color::White, CastleSide::Kingside));
    assert!(!engine.board().move_rights(Color::White, CastleSide::Queenside));
    assert!(engine.board().move_rights(Color::Black, CastleSide::Kingside));

    engine.undo_last().expect("undo should succeed");
    assert_eq!(
        engine.board().get(sq("h1")),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert!(engine.board().move_rights(Color::White, CastleSide::Kingside));
}

#[test]
fn castling_lost_after_king_or_rook_moves() {
    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e4 e7e5 g1f3 g8f6 f1e2 f8e7 e1f1 e8f8 f1e1 f8e8");
    assert_eq!(rejected(&mut engine, "e1", "g1"), MoveRejected::GeometricallyIllegal);

    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e4 e7e5 g1f3 g8f6 f1e2 f8e7 h1g1 h8g8 g1h1 g8h8");
    assert!(!engine.board().move_rights(Color::White, CastleSide::Kingside));
    assert!(engine.board().move_rights(Color::White, CastleSide::Queenside));
    assert_eq!(rejected(&mut engine, "e1", "g1"), MoveRejected::GeometricallyIllegal);
}

#[test]
fn castling_out_of_check_is_rejected() {
    let mut engine = MoveEngine::from_fen("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
    assert_eq!(engine.status(), GameStatus::Check(Color::White));
    assert_eq!(rejected(&mut engine, "e1", "g1"), MoveRejected::LeavesOwnKingInCheck);
}

#[test]
fn fools_mate_is_checkmate_for_white() {
    let mut engine = MoveEngine::new_game();
    let applied = play(&mut engine, "f2f3 e7e5 g2g4 d8h4");
    assert_eq!(applied[3].status, GameStatus::Checkmate(Color::White));
    assert_eq!(engine.status(), GameStatus::Checkmate(Color::White));
    assert!(engine.legal_moves_for(Color::White).expect("enumeration").is_empty());
    assert_eq!(engine.is_in_check(Color::White), Ok(true));
}

#[test]
fn stalemate_is_distinct_from_checkmate() {
    let mut engine = MoveEngine::from_fen("7k/8/6K1/8/8/8/5Q2/8 w - - 0 1").expect("FEN should parse");
    assert_eq!(engine.status(), GameStatus::Ongoing);

    play(&mut engine, "f2f7");
    assert_eq!(engine.status(), GameStatus::Stalemate);
    assert_eq!(engine.is_in_check(Color::Black), Ok(false));
    assert!(engine.legal_moves_for(Color::Black).expect("enumeration").is_empty());
}

#[test]
fn pinned_piece_move_leaves_king_in_check() {
    let mut engine = MoveEngine::new_game();
    play(&mut engine, "e2e4 e7e5 d2d4 f8b4");
    // The bishop interposed on d2 is pinned against e1 by the bishop on b4.
    play(&mut engine, "c1d2 g8f6");
    assert_eq!(rejected(&mut engine, "d2", "e3"), MoveRejected::LeavesOwnKingInCheck);
}

#[test]
fn promotion_to_knight_shows_in_snapshot() {
    let mut engine = MoveEngine::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
    let applied = engine
        .propose_move(sq("b7"), sq("b8"), Some(PieceKind::Knight))
        .expect("promotion should be legal");
    assert_eq!(applied.record.special, SpecialMove::Promotion(PieceKind::Knight));

    let b8 = sq("b8");
    let snapshot = engine.board_snapshot();
    assert_eq!(
        snapshot[b8.rank() as usize][b8.file() as usize],
        Some(Piece::new(PieceKind::Knight, Color::White))
    );

    engine.undo_last().expect("undo should succeed");
    assert_eq!(
        engine.board().get(sq("b7")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert!(engine.board().is_empty(b8));
}

#[test]
fn missing_promotion_choice_defaults_to_queen() {
    let mut engine = MoveEngine::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
    engine
        .propose_move_with(sq("b7"), sq("b8"), &mut plum_rules::AlwaysQueen)
        .expect("promotion should be legal");
    assert_eq!(
        engine.board().get(sq("b8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn undo_chains_back_to_the_initial_position() {
    let mut engine = MoveEngine::new_game();
    play(
        &mut engine,
        "e2e4 d7d5 e4d5 d8d5 b1c3 d5a5 d2d4 c7c6 g1f3 c8f5 f1c4 e7e6 e1g1 b8d7",
    );
    assert_eq!(engine.history().len(), 14);

    while engine.try_undo() {}
    assert_eq!(engine.board(), MoveEngine::new_game().board());
    assert!(engine.history().is_empty());
    assert_eq!(engine.undo_last(), Err(ChessError::NothingToUndo));
    assert_eq!(engine.status(), GameStatus::Ongoing);
}

#[test]
fn check_status_reported_with_escape_available() {
    let mut engine = MoveEngine::new_game();
    let applied = play(&mut engine, "e2e4 d7d5 f1b5");
    assert_eq!(applied[2].status, GameStatus::Check(Color::Black));
    assert!(!engine.legal_moves_for(Color::Black).expect("enumeration").is_empty());
}
