//! WASM bindings for hanoi-core
//!
//! Provides a JavaScript-friendly API for the puzzle engine.

use wasm_bindgen::prelude::*;
use crate::{peg_label, Hanoi};

/// WASM-friendly wrapper around Hanoi
#[wasm_bindgen]
pub struct WasmHanoi {
    inner: Hanoi,
}

#[wasm_bindgen]
impl WasmHanoi {
    /// Create a puzzle with every disc on the first peg.
    /// Throws if either count is out of range.
    #[wasm_bindgen(constructor)]
    pub fn new(pegs: usize, discs: u32) -> Result<WasmHanoi, JsError> {
        let inner = Hanoi::create(pegs, discs)?;
        Ok(WasmHanoi { inner })
    }

    #[wasm_bindgen(js_name = pegCount)]
    pub fn peg_count(&self) -> usize {
        self.inner.pegs_n()
    }

    #[wasm_bindgen(js_name = discCount)]
    pub fn disc_count(&self) -> u32 {
        self.inner.discs_n()
    }

    /// Letter for a peg ("A", "B", ...), empty string if out of range
    #[wasm_bindgen(js_name = pegLabel)]
    pub fn peg_label(&self, peg: usize) -> String {
        if peg >= self.inner.pegs_n() {
            return String::new();
        }
        peg_label(peg).map(String::from).unwrap_or_default()
    }

    /// Move a disc. Returns true if the move was legal and applied.
    #[wasm_bindgen(js_name = tryMoveDisc)]
    pub fn try_move_disc(&mut self, disc: u32, from_peg: usize, to_peg: usize) -> bool {
        self.inner.try_move_disc(disc, from_peg, to_peg).is_ok()
    }

    /// Like tryMoveDisc but throws with the reason on rejection
    #[wasm_bindgen(js_name = moveDisc)]
    pub fn move_disc(&mut self, disc: u32, from_peg: usize, to_peg: usize) -> Result<(), JsError> {
        self.inner.try_move_disc(disc, from_peg, to_peg)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isChallengeCompleted)]
    pub fn is_challenge_completed(&self) -> bool {
        self.inner.is_challenge_completed()
    }

    /// Discs on a peg, top (smallest) first. Empty array if out of range.
    #[wasm_bindgen(js_name = pegDiscs)]
    pub fn peg_discs(&self, peg: usize) -> Vec<u32> {
        match self.inner.get_peg_copy(peg) {
            Ok(stack) => stack.iter().collect(),
            Err(_) => vec![],
        }
    }

    /// Raw bitset of a peg (bit i = disc i present)
    #[wasm_bindgen(js_name = pegBits)]
    pub fn peg_bits(&self, peg: usize) -> Option<u32> {
        self.inner.get_peg_copy(peg).ok().map(|stack| stack.bits())
    }

    /// Whole puzzle as { pegs_n, discs_n, pegs: [[...]], completed }
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.snapshot())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Text rendering, one line per peg
    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}
