use std::collections::BTreeSet;

use crate::error::BoardError;
use crate::types::{BoardSnapshot, Cell, Coordinate, Direction, NUM_SQUARES};

/// Othello board state represented by two bitboards, bit index `y * 8 + x`.
///
/// A `Board` is plain data: queries take `&self` and only the move commands
/// take `&mut self`, so sharing one board across threads needs a lock around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    dark: u64,
    light: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=dark, e5=dark, d5=light, e4=light.
    pub fn new() -> Self {
        Self {
            dark: bit(3, 3) | bit(4, 4),
            light: bit(3, 4) | bit(4, 3),
        }
    }

    /// Builds an arbitrary position. Fails when a square is claimed by both sides.
    pub fn from_bitboards(dark: u64, light: u64) -> Result<Self, BoardError> {
        let overlap = dark & light;
        if overlap != 0 {
            return Err(BoardError::Overlap(overlap));
        }
        Ok(Self { dark, light })
    }

    pub fn cell(&self, at: Coordinate) -> Cell {
        let square = 1u64 << at.index();
        if self.dark & square != 0 {
            Cell::Dark
        } else if self.light & square != 0 {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Number of squares holding `cell`. `Cell::Empty` counts free squares.
    pub fn occupancy_count(&self, cell: Cell) -> u8 {
        match cell {
            Cell::Dark => self.dark.count_ones() as u8,
            Cell::Light => self.light.count_ones() as u8,
            Cell::Empty => NUM_SQUARES as u8 - (self.dark | self.light).count_ones() as u8,
        }
    }

    /// Squares holding `cell`, in row-major order.
    pub fn squares_of(&self, cell: Cell) -> Vec<Coordinate> {
        Coordinate::all().filter(|&c| self.cell(c) == cell).collect()
    }

    /// Landing squares of every flip chain based at `origin`.
    ///
    /// Returns `None` when `origin` is empty: only an occupied square can anchor
    /// a chain. An occupied square with no open chain gives an empty set.
    pub fn moves_from(&self, origin: Coordinate) -> Option<BTreeSet<Coordinate>> {
        let color = self.cell(origin);
        if !color.is_side() {
            return None;
        }
        Some(
            Direction::ALL
                .iter()
                .filter_map(|&direction| self.discover_move(origin, direction, color))
                .collect(),
        )
    }

    /// Every legal move for `side`. Empty when `side` has no pieces or no moves.
    pub fn legal_moves(&self, side: Cell) -> BTreeSet<Coordinate> {
        self.squares_of(side)
            .into_iter()
            .filter_map(|origin| self.moves_from(origin))
            .flatten()
            .collect()
    }

    pub fn is_legal_move(&self, at: Coordinate, side: Cell) -> bool {
        side.is_side() && self.cell(at) == Cell::Empty && !self.flips_for(at, side).is_empty()
    }

    /// Opponent squares that `side` would capture by playing `at`.
    pub fn flips_for(&self, at: Coordinate, side: Cell) -> Vec<Coordinate> {
        if !side.is_side() {
            return Vec::new();
        }
        Direction::ALL
            .iter()
            .flat_map(|&direction| self.captures_in_direction(at, direction, side))
            .collect()
    }

    /// Plays `at` for `side` and returns the captured squares.
    /// The board is left untouched when the move is rejected.
    pub fn execute_move(
        &mut self,
        at: Coordinate,
        side: Cell,
    ) -> Result<Vec<Coordinate>, BoardError> {
        if !side.is_side() {
            return Err(BoardError::NotASide(side));
        }
        if self.cell(at) != Cell::Empty {
            log::debug!("rejected {side:?} at {at}: occupied");
            return Err(BoardError::Occupied(at));
        }

        let flips = self.flips_for(at, side);
        if flips.is_empty() {
            log::debug!("rejected {side:?} at {at}: nothing to capture");
            return Err(BoardError::IllegalMove { at, side });
        }

        self.apply(at, side, &flips);
        log::debug!("{side:?} plays {at}, capturing {}", flips.len());
        Ok(flips)
    }

    /// Places `side` at `at` and flips every closed chain, without any checks.
    ///
    /// Caller contract: `at` should be a legal move for `side`. On an illegal
    /// square the piece is still placed and nothing is flipped. `Cell::Empty`
    /// as `side` leaves the board unchanged.
    pub fn execute_move_unchecked(&mut self, at: Coordinate, side: Cell) -> Vec<Coordinate> {
        if !side.is_side() {
            log::warn!("execute_move_unchecked called with {side:?}; ignored");
            return Vec::new();
        }
        let flips = self.flips_for(at, side);
        self.apply(at, side, &flips);
        log::debug!("{side:?} placed at {at} unchecked, capturing {}", flips.len());
        flips
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=dark, 2=light.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (cell, at) in cells.iter_mut().zip(Coordinate::all()) {
            *cell = self.cell(at).code();
        }
        cells
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.to_array().to_vec(),
            dark_count: self.occupancy_count(Cell::Dark),
            light_count: self.occupancy_count(Cell::Light),
            empty_count: self.occupancy_count(Cell::Empty),
        }
    }

    /// Walks from `origin` (holding `color`) along `direction` and returns the
    /// first empty square reached after at least one opponent piece.
    fn discover_move(
        &self,
        origin: Coordinate,
        direction: Direction,
        color: Cell,
    ) -> Option<Coordinate> {
        let mut captured = 0usize;
        for square in origin.ray(direction) {
            match self.cell(square) {
                cell if cell == color.opposite() => captured += 1,
                Cell::Empty if captured > 0 => {
                    log::trace!("{origin} -> {square} over {captured} along {direction:?}");
                    return Some(square);
                }
                // Own piece, or an empty square with nothing to bracket.
                _ => return None,
            }
        }
        None
    }

    /// Opponent run starting next to `at` that is closed by a `side` piece.
    fn captures_in_direction(
        &self,
        at: Coordinate,
        direction: Direction,
        side: Cell,
    ) -> Vec<Coordinate> {
        let mut run = Vec::new();
        for square in at.ray(direction) {
            match self.cell(square) {
                cell if cell == side.opposite() => run.push(square),
                cell if cell == side => return run,
                _ => break,
            }
        }
        Vec::new()
    }

    fn apply(&mut self, at: Coordinate, side: Cell, flips: &[Coordinate]) {
        let mask = flips
            .iter()
            .fold(1u64 << at.index(), |mask, c| mask | (1u64 << c.index()));
        let (me, opp) = match side {
            Cell::Dark => (&mut self.dark, &mut self.light),
            Cell::Light => (&mut self.light, &mut self.dark),
            Cell::Empty => return,
        };
        *me |= mask;
        *opp &= !mask;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(x: usize, y: usize) -> u64 {
    1u64 << (y * 8 + x)
}
