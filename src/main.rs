//! Headless driver for the chess core
//!
//! Reads commands from stdin, feeds them to the game controller and prints
//! the resulting events, standing in for the 3D presentation layer.
//!
//! Run with: `cargo run -- --log chess3d=debug`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess3d::core::{load_settings, save_settings, settings_path, GameSettings};
use chess3d::game::{BoardPoint, ChessGameController, GameEvent, MarkerKind};
use chess_rules::{Board, Square, BOARD_SIZE};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
commands:
  <square>           select or move to a square, e.g. e2
  click <x> <z>      click a board-local point
  move <from> <to>   play a move directly, e.g. move e2 e4
  board              print the board
  restart            start over
  help               show this text
  quit               exit";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "chess3d")]
#[command(about = "Play the 3D chess rules engine from a terminal")]
struct Args {
    /// Settings file; defaults to the user configuration directory.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Starting layout JSON, overriding the settings.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Board-local units per square, overriding the settings.
    #[arg(long)]
    square_size: Option<f32>,

    /// Log filter directive, e.g. `chess3d=debug,chess_rules=trace`.
    /// Falls back to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,

    /// Save the effective settings to the default settings path and continue.
    #[arg(long)]
    write_settings: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = match &args.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chess3d=info")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let settings = effective_settings(&args)?;
    if args.write_settings {
        save_settings(&settings, &settings_path())?;
    }

    let mut game = settings
        .build_controller()
        .context("failed to set up the game")?;
    game.start_new_game()?;
    report(&mut game);
    println!("{HELP}");
    print_board(game.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("{} > ", game.active_team());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            ["help"] => println!("{HELP}"),
            ["board"] => print_board(game.board()),
            ["restart"] => game.restart()?,
            ["click", x, z] => match (x.parse::<f32>(), z.parse::<f32>()) {
                (Ok(x), Ok(z)) => game.on_square_selected(BoardPoint::new(x, z))?,
                _ => println!("expected two numbers"),
            },
            ["move", from, to] => match (parse_square(from), parse_square(to)) {
                (Some(from), Some(to)) => {
                    if let Err(e) = game.try_move(from, to) {
                        println!("{e}");
                    }
                }
                _ => println!("expected two squares like e2 e4"),
            },
            [square] => match parse_square(square) {
                Some(square) => game.select_square(square)?,
                None => println!("unknown command, try `help`"),
            },
            _ => println!("unknown command, try `help`"),
        }

        if report(&mut game) {
            print_board(game.board());
        }
    }

    info!("[GAME] Session ended");
    Ok(())
}

/// Settings file merged with command-line overrides
fn effective_settings(args: &Args) -> Result<GameSettings> {
    let mut settings = load_settings(args.settings.as_deref()).with_context(|| {
        format!(
            "failed to load settings from {:?}",
            args.settings.clone().unwrap_or_else(settings_path)
        )
    })?;

    if let Some(layout) = &args.layout {
        settings.layout_path = Some(layout.clone());
    }
    if let Some(square_size) = args.square_size {
        settings.square_size = square_size;
    }
    Ok(settings)
}

fn parse_square(text: &str) -> Option<Square> {
    Square::from_algebraic(&text.to_ascii_lowercase())
}

/// Print queued events; returns whether the position changed
fn report(game: &mut ChessGameController) -> bool {
    let mut position_changed = false;

    for event in game.drain_events() {
        match event {
            GameEvent::SelectionShown { piece, markers } => {
                let targets: Vec<String> = markers
                    .iter()
                    .map(|marker| match marker.kind {
                        MarkerKind::Free => marker.square.to_string(),
                        MarkerKind::Capture => format!("x{}", marker.square),
                    })
                    .collect();
                println!("{} {}: {}", piece.team, piece.kind, targets.join(" "));
            }
            GameEvent::PieceMoved { .. } | GameEvent::GameStarted => position_changed = true,
            GameEvent::PiecePromoted {
                promoted, square, ..
            } => println!("promoted to {} on {}", promoted.kind, square),
            GameEvent::KingInCheck { team } => println!("{team} is in check"),
            GameEvent::GameFinished { outcome } => {
                println!("{}", outcome.message());
                println!("type `restart` to play again");
            }
            GameEvent::PieceRemoved { .. }
            | GameEvent::PieceCreated { .. }
            | GameEvent::SelectionCleared
            | GameEvent::TurnChanged { .. }
            | GameEvent::GameRestarted => {}
        }
    }

    position_changed
}

fn print_board(board: &Board) {
    let size = BOARD_SIZE as i32;
    for rank in (0..size).rev() {
        let row: String = (0..size)
            .map(|file| {
                board
                    .occupant_at(Square::new(file, rank))
                    .map_or('.', |piece| piece.kind.to_char(piece.team))
            })
            .flat_map(|c| [c, ' '])
            .collect();
        println!("{} {}", rank + 1, row.trim_end());
    }
    println!("  a b c d e f g h");
}
