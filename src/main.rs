//! Console front end: options intake, player wiring, one game.

use std::fs;
use std::io;
use std::process::ExitCode;
use std::thread;

use clap::Parser;

use woodpush::board::{Board, Color, EvalKind};
use woodpush::options::{GameOptions, OptionsHandoff};
use woodpush::player::{Computer, Human};
use woodpush::referee;

#[derive(Parser, Debug)]
#[command(name = "woodpush", about = "Minimax chess engine")]
struct Args {
    /// Search depth (clamped to 2..=20)
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Black moves first
    #[arg(long)]
    black_first: bool,

    /// The computer makes the first move
    #[arg(long)]
    computer_first: bool,

    /// Use the fast material-only evaluator
    #[arg(long)]
    simple_eval: bool,

    /// Start from a board file: eight lines of eight characters, rank 8
    /// first, uppercase black, lowercase white, '.' empty
    #[arg(long)]
    board: Option<String>,
}

fn options_from_args(args: &Args) -> Result<GameOptions, String> {
    let mut options = GameOptions::new().with_depth(args.depth);
    options.first_colour = if args.black_first {
        Color::Black
    } else {
        Color::White
    };
    options.human_first = !args.computer_first;
    options.simple_eval = args.simple_eval;

    if let Some(path) = &args.board {
        let text = fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != 8 {
            return Err(format!("{path}: expected 8 board rows, found {}", rows.len()));
        }
        let mut board = [['\0'; 8]; 8];
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i;
            for (file, c) in row.chars().take(8).enumerate() {
                if c != '.' {
                    board[file][rank] = c;
                }
            }
        }
        options.board = board;
    }

    Ok(options)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The options producer runs as its own task and signals through the
    // polled handoff slot, the same shape a graphical front end uses.
    let handoff = OptionsHandoff::new();
    let producer = handoff.clone();
    thread::spawn(move || match options_from_args(&args) {
        Ok(options) => producer.publish(options),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    });
    let options = handoff.wait();

    let mut board = match Board::from_grid(&options.board, options.first_colour) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid position: {err}");
            return ExitCode::FAILURE;
        }
    };

    let eval = if options.simple_eval {
        EvalKind::Fast
    } else {
        EvalKind::Full
    };
    let human_color = if options.human_first {
        options.first_colour
    } else {
        options.first_colour.opponent()
    };

    let stdin = io::stdin();
    let mut human = Human::new(human_color, stdin.lock());
    let mut computer = Computer::new(human_color.opponent(), eval, options.depth);

    if options.human_first {
        referee::run(&mut board, &mut human, &mut computer);
    } else {
        referee::run(&mut board, &mut computer, &mut human);
    }

    ExitCode::SUCCESS
}
