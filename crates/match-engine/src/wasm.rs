//! WASM bindings for browser and watch front ends
//!
//! The host page owns persistence: it hands the saved counters to
//! `load_lifetime` and reads them back with `lifetime_json` after each
//! finished match or hard reset.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{LifetimeScore, MatchConfig, MatchEngine, MemoryStore, Move, SeededRng};

fn js_err(e: impl core::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// A match in progress, driven from JavaScript
#[wasm_bindgen]
pub struct WasmMatch {
    engine: MatchEngine<SeededRng, MemoryStore>,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start a best-of-three match. Without a seed the clock is used.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<WasmMatch, JsError> {
        let seed = seed.unwrap_or_else(js_sys::Date::now);
        let rng = SeededRng::from_u64(seed.to_bits());
        let engine = MatchEngine::new(MatchConfig::default(), rng, MemoryStore::default()).map_err(js_err)?;
        Ok(WasmMatch { engine })
    }

    /// Restart with the lifetime counters from a saved JSON document.
    pub fn load_lifetime(&mut self, json: &str) -> Result<(), JsError> {
        let score: LifetimeScore =
            serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid score: {}", e)))?;
        let rng = SeededRng::from_u64(js_sys::Date::now().to_bits());
        let config = *self.engine.config();
        self.engine = MatchEngine::new(config, rng, MemoryStore::new(score)).map_err(js_err)?;
        Ok(())
    }

    pub fn lifetime_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.engine.lifetime())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Throw a move ("rock", "✋", ...). Returns the round label.
    pub fn select_move(&mut self, mv: &str) -> Result<String, JsError> {
        let mv: Move = mv.parse().map_err(js_err)?;
        let outcome = self.engine.select_move(mv).map_err(js_err)?;
        Ok(outcome.label().to_string())
    }

    pub fn is_match_decided(&self) -> bool {
        self.engine.is_match_decided()
    }

    pub fn advance(&mut self) -> Result<JsValue, JsError> {
        let stage = self.engine.advance().map_err(js_err)?;
        serde_wasm_bindgen::to_value(&stage)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Settle a decided match. Returns the match label.
    pub fn finish_match(&mut self) -> Result<String, JsError> {
        let outcome = self.engine.finish_match().map_err(js_err)?;
        Ok(outcome.label().to_string())
    }

    pub fn reset(&mut self, hard: bool) -> Result<(), JsError> {
        self.engine.reset_match(hard).map_err(js_err)
    }

    /// Snapshot of everything the screen renders
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.engine.state())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}
