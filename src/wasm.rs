use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::render::BoardView;
use crate::types::{Cell, Coordinate};

/// JS handle around a [`Board`].
#[wasm_bindgen]
#[derive(Debug, Default, Clone)]
pub struct WasmBoard {
    board: Board,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Legal moves for one side as `[{x, y}, ...]`.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, dark: bool) -> Result<JsValue, JsError> {
        let moves: Vec<Coordinate> = self.board.legal_moves(side_of(dark)).into_iter().collect();
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Plays a checked move and returns the captured squares.
    #[wasm_bindgen(js_name = executeMove)]
    pub fn execute_move(&mut self, x: u8, y: u8, dark: bool) -> Result<JsValue, JsError> {
        let at = Coordinate::new(x as usize, y as usize)?;
        let flips = self.board.execute_move(at, side_of(dark))?;
        Ok(serde_wasm_bindgen::to_value(&flips)?)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.board.snapshot())?)
    }

    pub fn render(&self, dark: bool) -> String {
        BoardView::new(&self.board).highlight(side_of(dark)).to_string()
    }
}

fn side_of(dark: bool) -> Cell {
    if dark { Cell::Dark } else { Cell::Light }
}
