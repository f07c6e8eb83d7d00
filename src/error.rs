use thiserror::Error;

use crate::types::{Cell, Coordinate};

/// Errors returned by the board's checked API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfRange { x: usize, y: usize },

    #[error("invalid move notation: {0:?}")]
    Parse(String),

    #[error("square {0} is already occupied")]
    Occupied(Coordinate),

    #[error("{side:?} cannot capture anything from {at}")]
    IllegalMove { at: Coordinate, side: Cell },

    #[error("{0:?} is not a side")]
    NotASide(Cell),

    #[error("dark and light bitboards overlap ({0:#018x})")]
    Overlap(u64),
}
