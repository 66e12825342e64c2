//! WebAssembly bindings for the abacus.
//!
//! This module provides JavaScript-friendly wrappers around the core so a
//! web page can render rods and forward bead clicks.

use wasm_bindgen::prelude::*;
use crate::abacus::{Abacus, BeadSide, RodForm};
use crate::notation::{LatexNotation, NotationRenderer};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly abacus wrapper.
#[wasm_bindgen]
pub struct WasmAbacus {
    abacus: Abacus,
}

#[wasm_bindgen]
impl WasmAbacus {
    /// Create an abacus with the given number of rods.
    #[wasm_bindgen(constructor)]
    pub fn new(rods: usize) -> Result<WasmAbacus, JsError> {
        let abacus = Abacus::new(rods)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { abacus })
    }

    /// Toggle the top bead of a rod. Returns the rod's new digit.
    #[wasm_bindgen]
    pub fn toggle_top(&mut self, rod: i32) -> Result<i8, JsError> {
        self.toggle(rod, BeadSide::Top)
    }

    /// Toggle the bottom bead of a rod. Returns the rod's new digit.
    #[wasm_bindgen]
    pub fn toggle_bottom(&mut self, rod: i32) -> Result<i8, JsError> {
        self.toggle(rod, BeadSide::Bottom)
    }

    /// Reset every rod to the empty form.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.abacus.clear();
    }

    /// Number of rods.
    #[wasm_bindgen]
    pub fn rod_count(&self) -> usize {
        self.abacus.rod_count()
    }

    /// Decimal total as a JavaScript number (exact up to 34 rods).
    #[wasm_bindgen]
    pub fn total(&self) -> f64 {
        self.abacus.evaluate().total as f64
    }

    /// LaTeX notation for the current terms (empty when zero).
    #[wasm_bindgen]
    pub fn notation(&self) -> String {
        LatexNotation.render(&self.abacus.evaluate().terms)
    }

    /// Terms as an array of `[coefficient, exponent]` pairs, most
    /// significant first.
    #[wasm_bindgen]
    pub fn terms(&self) -> js_sys::Array {
        self.abacus
            .evaluate()
            .terms
            .iter()
            .map(|t| {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from(t.coefficient.to_i8()));
                pair.push(&JsValue::from(t.exponent as u32));
                JsValue::from(pair)
            })
            .collect()
    }

    /// Full evaluation as JSON.
    #[wasm_bindgen]
    pub fn evaluation_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.abacus.evaluate())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Form of one rod: "empty", "positive", "negative" or "balanced".
    #[wasm_bindgen]
    pub fn rod_form(&self, rod: i32) -> Result<String, JsError> {
        let state = self.abacus.rod_signed(i64::from(rod))
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(match state.form() {
            RodForm::Empty => "empty",
            RodForm::Positive => "positive",
            RodForm::Negative => "negative",
            RodForm::Balanced => "balanced",
        }
        .to_string())
    }
}

impl WasmAbacus {
    fn toggle(&mut self, rod: i32, side: BeadSide) -> Result<i8, JsError> {
        self.abacus
            .toggle_bead_signed(i64::from(rod), side)
            .map(|digit| digit.to_i8())
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for WasmAbacus {
    fn default() -> Self {
        Self { abacus: Abacus::default() }
    }
}
