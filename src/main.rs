//! Minimal terminal driver for the rules engine.
//!
//! Reads commands from stdin, one per line:
//! - `e2e4`, `e7e8q`: propose a move (a bare promotion asks for the piece)
//! - `moves e2`: list legal destinations for a square
//! - `undo`, `fen`, `new`, `quit`

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use plum_rules::utils::algebraic::algebraic_to_square;
use plum_rules::utils::logger::setup_logger;
use plum_rules::utils::long_algebraic::{parse_long_algebraic, record_to_long_algebraic};
use plum_rules::utils::render_game_state::render_board;
use plum_rules::{ChessResult, Color, MoveEngine, PieceKind, RulesConfig};

enum Flow {
    Continue,
    Quit,
}

fn main() -> ExitCode {
    setup_logger();

    let config = RulesConfig {
        forbid_castling_through_check: std::env::var("PLUM_STRICT_CASTLING")
            .is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true")),
    };
    let mut engine = MoveEngine::with_config(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_position(&engine);
    loop {
        print!("{} > ", engine.turn());
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match handle_command(&mut engine, line.trim(), &mut lines) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) if err.is_recoverable() => println!("{err}"),
            Err(err) => {
                eprintln!("fatal: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn handle_command<I>(engine: &mut MoveEngine, command: &str, lines: &mut I) -> ChessResult<Flow>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (None, _) => {}
        (Some("quit" | "exit"), _) => return Ok(Flow::Quit),
        (Some("new"), _) => {
            *engine = MoveEngine::with_config(engine.config());
            print_position(engine);
        }
        (Some("undo"), _) => {
            let record = engine.undo_last()?;
            println!("undid {}", record_to_long_algebraic(&record));
            print_position(engine);
        }
        (Some("fen"), _) => println!("{}", engine.fen()),
        (Some("moves"), Some(square)) => {
            let from = algebraic_to_square(square)?;
            let targets: Vec<String> = engine
                .legal_destinations(from)?
                .into_iter()
                .map(|sq| sq.to_string())
                .collect();
            println!("{}", targets.join(" "));
        }
        (Some(text), _) => {
            let parsed = parse_long_algebraic(text)?;
            let applied = match parsed.promotion {
                Some(kind) => engine.propose_move(parsed.from, parsed.to, Some(kind))?,
                None => {
                    let mut ask = |color: Color| ask_promotion(color, lines);
                    engine.propose_move_with(parsed.from, parsed.to, &mut ask)?
                }
            };
            println!("played {}", record_to_long_algebraic(&applied.record));
            print_position(engine);
        }
    }
    Ok(Flow::Continue)
}

fn ask_promotion<I>(color: Color, lines: &mut I) -> Option<PieceKind>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{color} promotes to [q/r/b/n]: ");
    io::stdout().flush().ok();
    let answer = lines.next()?.ok()?;
    match answer.trim() {
        "r" => Some(PieceKind::Rook),
        "b" => Some(PieceKind::Bishop),
        "n" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn print_position(engine: &MoveEngine) {
    println!("{}", render_board(engine.board()));
    println!("{}", engine.status());
}
