//! xiangqi - replay a list of moves against the rules engine
//!
//! Each input line holds one move as two squares, e.g. `b1 c3` or `b1-c3`.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```bash
//! cargo run -p xiangqi-cli -- --moves game.txt --show-board
//! echo "b1 c3" | RUST_LOG=debug cargo run -p xiangqi-cli
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use xiangqi_core::{parse_coord, MoveError, XiangqiGame};

#[derive(Parser)]
#[command(name = "xiangqi", version, about = "Replay xiangqi moves and report the outcome")]
struct Cli {
    /// Move list file (reads stdin when omitted)
    #[arg(short, long)]
    moves: Option<PathBuf>,

    /// Print the board after every accepted move
    #[arg(long)]
    show_board: bool,

    /// Only print the final board and state
    #[arg(short, long)]
    quiet: bool,
}

/// Splits a move line into its two squares.
fn split_move(line: &str) -> Option<(&str, &str)> {
    let mut squares = line
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty());
    let from = squares.next()?;
    let to = squares.next()?;
    squares.next().is_none().then_some((from, to))
}

fn play_line(game: &mut XiangqiGame, from: &str, to: &str) -> Result<(), MoveError> {
    let from = parse_coord(from)?;
    let to = parse_coord(to)?;
    game.play(from, to)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.moves {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut game = XiangqiGame::new();
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read move list")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((from, to)) = split_move(line) else {
            warn!("line {}: expected two squares, got {line:?}", index + 1);
            rejected += 1;
            continue;
        };

        let mover = game.turn();
        match play_line(&mut game, from, to) {
            Ok(()) => {
                accepted += 1;
                if !cli.quiet {
                    println!("{:>4}. {mover} {from} -> {to}: ok", index + 1);
                }
                if cli.show_board {
                    println!("{game}\n");
                }
            }
            Err(err) => {
                rejected += 1;
                if !cli.quiet {
                    println!("{:>4}. {mover} {from} -> {to}: rejected ({err})", index + 1);
                }
            }
        }
    }

    info!("{accepted} moves accepted, {rejected} rejected");
    println!("{game}");
    Ok(())
}
