// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Simulation Core

use wasm_bindgen::prelude::*;

use crate::models::{gobbler, m3m3, pumpfun, ripper, snapper};
use crate::params::ScenarioParams;
use crate::types::{Summary, TimeSeriesPoint};

// ─── GauntletSimulation struct ───────────────────────────────────────────────

/// Owns the live parameter store and regenerates the series on demand.
///
/// There is no incremental update path: every regeneration rebuilds the full
/// series from the current snapshot, so no stale point can survive a
/// parameter change. Debouncing rapid slider input is the dashboard's
/// concern; correctness never depends on it.
#[wasm_bindgen]
pub struct GauntletSimulation {
    pub(crate) params: ScenarioParams,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl GauntletSimulation {
    pub fn with_params(params: ScenarioParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ScenarioParams {
        &mut self.params
    }

    /// Regenerate the full series from the current snapshot.
    pub fn simulate_core(&self) -> Vec<TimeSeriesPoint> {
        simulate(&self.params)
    }

    /// Last-point totals for the summary cards. The axis ends at the horizon
    /// for both step modes, so the final point is evaluated directly.
    pub fn summary_core(&self) -> Summary {
        let point = evaluate_at(&self.params, self.params.time_horizon as f64);
        Summary::from_point(&point)
    }
}

// ─── Pure Entry Points ──────────────────────────────────────────────────────

/// Produce the full time series for a parameter snapshot.
///
/// Pure and deterministic: identical input yields bit-for-bit identical
/// output. The axis runs `0..=time_horizon` inclusive at the configured step,
/// so a zero horizon still yields the single point at `t = 0`.
pub fn simulate(params: &ScenarioParams) -> Vec<TimeSeriesPoint> {
    let increment = params.time_step.increment();
    (0..params.time_step.point_count(params.time_horizon))
        .map(|i| evaluate_at(params, i as f64 * increment))
        .collect()
}

/// Evaluate every model independently at a single point in time.
pub fn evaluate_at(params: &ScenarioParams, t: f64) -> TimeSeriesPoint {
    TimeSeriesPoint {
        time: t,
        gobbler: gobbler::evaluate(params, t),
        snapper: snapper::evaluate(params, t),
        m3m3: m3m3::evaluate(params, t),
        pumpfun: pumpfun::evaluate(params, t),
        ripper: ripper::evaluate(params, t),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
