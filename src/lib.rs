//! Othello (Reversi) rules: board state, legal-move discovery and flips.
//!
//! [`Board`] is the whole engine. It knows nothing about turn order, passes or
//! game over; callers drive those from [`Board::legal_moves`] and
//! [`Board::execute_move`]. [`BoardView`] renders a board for the console and
//! [`wasm::WasmBoard`] exposes the same surface to JavaScript.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod logging;
pub mod render;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::BoardError;
pub use render::BoardView;
pub use types::{BoardSnapshot, Cell, Coordinate, Direction, format_moves};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    #[test]
    fn wasm_ready_reports_loaded() {
        assert!(super::wasm_ready());
    }
}
