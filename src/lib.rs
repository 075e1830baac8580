// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet")

pub mod models;
pub mod params;
pub mod piecewise;
pub mod reconcile;
pub mod simulation;
pub mod types;

pub use params::*;
pub use simulation::{evaluate_at, simulate, GauntletSimulation};
pub use types::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl GauntletSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self { params: ScenarioParams::default() }
    }

    /// Full series for the current parameters. The dashboard calls this after
    /// every parameter change it cares about; each call returns a freshly
    /// generated series.
    pub fn simulate(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.simulate_core())
            .unwrap_or(JsValue::NULL)
    }

    /// Last-point totals per model, for the summary cards.
    pub fn summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.summary_core())
            .unwrap_or(JsValue::NULL)
    }

    pub fn get_params(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.params())
            .unwrap_or(JsValue::NULL)
    }

    /// Merge a JSON partial update (variant selectors and structured
    /// sub-objects go through here; scalar sliders use the setters below).
    /// Unknown fields are ignored; only malformed JSON is an error.
    pub fn apply_patch(&mut self, json: &str) -> Result<(), JsValue> {
        self.params_mut()
            .apply_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_deposit(&mut self, val: f64) { self.params.initial_deposit = val; }
    pub fn set_entry_time(&mut self, val: f64) { self.params.entry_time = val; }
    pub fn set_horizon(&mut self, val: u32) { self.params.time_horizon = val; }
    pub fn set_top_staker(&mut self, val: bool) { self.params.is_top_staker = val; }

    pub fn set_half_step(&mut self, enabled: bool) {
        self.params.time_step = if enabled { TimeStep::Half } else { TimeStep::Unit };
    }

    /// Reset every parameter to the launch defaults.
    pub fn reset(&mut self) {
        self.params = ScenarioParams::default();
    }
}
