use std::collections::BTreeSet;
use std::fmt;

use crate::board::Board;
use crate::types::{BOARD_SIZE, Cell, Coordinate};

const HEADER: &str = "    A B C D E F G H";
const RULE: &str = "    ---------------";

/// Console rendering of a [`Board`] followed by a statistics block.
///
/// ```
/// use reversi_rules::{Board, BoardView, Cell};
///
/// let board = Board::new();
/// let text = BoardView::new(&board).highlight(Cell::Dark).to_string();
/// assert!(text.contains("5 | . . O W B . . . | 5"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    highlight: Option<Cell>,
    clock: Option<(u32, u32)>,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            highlight: None,
            clock: None,
        }
    }

    /// Marks the legal moves of `side` with `O`.
    pub fn highlight(mut self, side: Cell) -> Self {
        self.highlight = Some(side);
        self
    }

    /// Adds remaining seconds for dark and light to the statistics block.
    pub fn with_clock(mut self, dark_secs: u32, light_secs: u32) -> Self {
        self.clock = Some((dark_secs, light_secs));
        self
    }

    fn marker(&self, at: Coordinate, moves: &BTreeSet<Coordinate>) -> char {
        match self.board.cell(at) {
            Cell::Empty if moves.contains(&at) => 'O',
            cell => cell.symbol(),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self
            .highlight
            .map(|side| self.board.legal_moves(side))
            .unwrap_or_default();

        writeln!(f, "{HEADER}")?;
        writeln!(f, "{RULE}")?;
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} | ", y + 1)?;
            for x in 0..BOARD_SIZE {
                let at = Coordinate::new(x, y).map_err(|_| fmt::Error)?;
                write!(f, "{} ", self.marker(at, &moves))?;
            }
            writeln!(f, "| {}", y + 1)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "{HEADER}")?;
        writeln!(f)?;

        match self.clock {
            Some((dark_secs, light_secs)) => {
                writeln!(f, "STATISTICS (score / remaining time):")?;
                for (side, secs) in [(Cell::Dark, dark_secs), (Cell::Light, light_secs)] {
                    let score = self.board.occupancy_count(side);
                    writeln!(f, "{}: {} / {}", side.name(), score, secs)?;
                }
            }
            None => {
                writeln!(f, "STATISTICS (score):")?;
                for side in [Cell::Dark, Cell::Light] {
                    writeln!(f, "{}: {}", side.name(), self.board.occupancy_count(side))?;
                }
            }
        }
        Ok(())
    }
}
