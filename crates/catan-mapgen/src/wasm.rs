//! WebAssembly bindings for the board generator.
//!
//! This module exposes [`BoardGenerator`] to JavaScript through wasm-bindgen.
//! Boards cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::board::GeneratedBoard;
use crate::error::GenerationError;
use crate::generator::BoardGenerator;
use crate::variant::BoardSize;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn parse_size(size: &str) -> Result<BoardSize, JsValue> {
    size.parse::<BoardSize>()
        .map_err(|e| JsValue::from_str(&format!("Invalid board size: {}", e)))
}

fn board_json(result: Result<GeneratedBoard, GenerationError>) -> Result<String, JsValue> {
    let board = result.map_err(|e| JsValue::from_str(&format!("Generation failed: {}", e)))?;
    serde_json::to_string(&board).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-exposed generator wrapper
#[wasm_bindgen]
pub struct WasmMapGenerator {
    generator: BoardGenerator,
}

#[wasm_bindgen]
impl WasmMapGenerator {
    /// Create a generator for "standard", "large" or "xlarge"
    #[wasm_bindgen(constructor)]
    pub fn new(size: &str) -> Result<WasmMapGenerator, JsValue> {
        let size = parse_size(size)?;
        Ok(WasmMapGenerator {
            generator: BoardGenerator::new(size.variant()),
        })
    }

    /// Create a generator with a fixed seed, for shareable boards
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(size: &str, seed: u64) -> Result<WasmMapGenerator, JsValue> {
        let size = parse_size(size)?;
        Ok(WasmMapGenerator {
            generator: BoardGenerator::seeded(size, seed),
        })
    }

    /// Switch variants; the current board is discarded
    #[wasm_bindgen(js_name = selectVariant)]
    pub fn select_variant(&mut self, size: &str) -> Result<(), JsValue> {
        let size = parse_size(size)?;
        self.generator.select_variant(size.variant());
        Ok(())
    }

    /// Generate a new board, returns board JSON or error
    #[wasm_bindgen(js_name = generateBoard)]
    pub fn generate_board(&mut self) -> Result<String, JsValue> {
        board_json(self.generator.generate_board())
    }

    #[wasm_bindgen(js_name = reshuffleNumbers)]
    pub fn reshuffle_numbers(&mut self) -> Result<String, JsValue> {
        board_json(self.generator.reshuffle_numbers())
    }

    #[wasm_bindgen(js_name = reshuffleHarbors)]
    pub fn reshuffle_harbors(&mut self) -> Result<String, JsValue> {
        board_json(self.generator.reshuffle_harbors())
    }

    /// Get the published board as JSON, or "null" before the first board
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        match self.generator.board() {
            Some(board) => serde_json::to_string(board).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Get the current phase as a string
    #[wasm_bindgen(js_name = getPhase)]
    pub fn get_phase(&self) -> String {
        serde_json::to_string(&self.generator.phase()).unwrap_or_else(|_| "\"Unknown\"".to_string())
    }

    /// Get the selected variant's name
    #[wasm_bindgen(js_name = getVariant)]
    pub fn get_variant(&self) -> String {
        self.generator.variant().name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generator_round_trip() {
        let mut wasm = WasmMapGenerator::with_seed("standard", 4).unwrap();
        assert_eq!(wasm.get_board(), "null");
        assert_eq!(wasm.get_phase(), "\"Idle\"");

        let json = wasm.generate_board().unwrap();
        assert_eq!(wasm.get_board(), json);
        assert_eq!(wasm.get_phase(), "\"Ready\"");
    }

    #[test]
    fn test_select_variant_clears_board() {
        let mut wasm = WasmMapGenerator::with_seed("standard", 5).unwrap();
        wasm.generate_board().unwrap();
        wasm.select_variant("large").unwrap();
        assert_eq!(wasm.get_board(), "null");
        assert_eq!(wasm.get_variant(), "large");
    }
}
