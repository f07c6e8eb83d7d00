//! Console demo: shows a board and both sides' legal moves.
//!
//! - `reversi-rules` - the initial position, Black's moves marked
//! - `reversi-rules --moves d3,c5 --side white` - play an opening first

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use reversi_rules::logging::init_logging;
use reversi_rules::{Board, BoardView, Cell, Coordinate, format_moves};

/// Othello rules engine demo
#[derive(Parser)]
#[command(name = "reversi-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side whose legal moves are marked with 'O'
    #[arg(long, value_enum, default_value_t = Side::Black)]
    side: Side,

    /// Remaining seconds shown for each player
    #[arg(long, default_value_t = 300)]
    time: u32,

    /// Moves played alternately from Black before display (e.g. d3,c5)
    #[arg(long, value_delimiter = ',')]
    moves: Vec<Coordinate>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Dark,
            Side::White => Cell::Light,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let board = play_opening(&cli.moves)?;

    println!(
        "{}",
        BoardView::new(&board)
            .highlight(cli.side.into())
            .with_clock(cli.time, cli.time)
    );
    println!("Black: {}", format_moves(&board.legal_moves(Cell::Dark)));
    println!("White: {}", format_moves(&board.legal_moves(Cell::Light)));
    Ok(())
}

/// Plays `moves` alternately starting with Black. A side without a legal
/// move passes before the next move is applied.
fn play_opening(moves: &[Coordinate]) -> Result<Board> {
    let mut board = Board::new();
    let mut side = Cell::Dark;

    for &mv in moves {
        if board.legal_moves(side).is_empty() {
            log::info!("{} has no legal move and passes", side.name());
            side = side.opposite();
        }
        board
            .execute_move(mv, side)
            .with_context(|| format!("playing {mv} for {}", side.name()))?;
        side = side.opposite();
    }

    Ok(board)
}
