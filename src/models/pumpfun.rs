// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Pump.fun Model

//! Bonding-curve price model, piecewise in absolute time `t` (no entry-time
//! offset): a launch surge, a plateau, then decay toward a hard floor at 10%
//! of the deposit. Two curve shapes ship as named variants, each an ordered
//! regime table.

use crate::params::{CurveVariant, ScenarioParams};
use crate::piecewise::{eval_table, Regime};
use crate::reconcile::{finalize, guard};
use crate::types::PumpfunPoint;

// ─── Constants ──────────────────────────────────────────────────────────────

const SURGE_END: f64 = 5.0;
const PLATEAU_END: f64 = 10.0;
const PRICE_FLOOR_RATIO: f64 = 0.1;

// ─── Regime Tables ──────────────────────────────────────────────────────────

struct CurveCtx {
    deposit: f64,
}

const STANDARD: &[Regime<CurveCtx>] = &[
    // linear surge: +20% of deposit per period
    Regime { upper: SURGE_END, eval: |t, c| c.deposit * (1.0 + t * 0.2) },
    Regime { upper: PLATEAU_END, eval: |_, c| c.deposit * 2.0 },
    Regime {
        upper: f64::INFINITY,
        eval: |t, c| {
            (c.deposit * 2.0 * 0.95_f64.powf(t - PLATEAU_END))
                .max(c.deposit * PRICE_FLOOR_RATIO)
        },
    },
];

const EXPONENTIAL: &[Regime<CurveCtx>] = &[
    Regime { upper: SURGE_END, eval: |t, c| c.deposit * 1.5_f64.powf(t) },
    Regime { upper: PLATEAU_END, eval: |t, c| c.deposit * 1.2_f64.powf(t) },
    Regime {
        upper: f64::INFINITY,
        eval: |t, c| {
            (c.deposit * 0.9_f64.powf(t - PLATEAU_END))
                .max(c.deposit * PRICE_FLOOR_RATIO)
        },
    },
];

// ─── Evaluation ─────────────────────────────────────────────────────────────

pub fn evaluate(params: &ScenarioParams, t: f64) -> PumpfunPoint {
    let ctx = CurveCtx { deposit: params.initial_deposit };
    let table = match params.pumpfun.curve {
        CurveVariant::Standard => STANDARD,
        CurveVariant::Exponential => EXPONENTIAL,
    };

    let mut parts = [eval_table(table, t, &ctx)];
    let total = finalize(&mut parts);
    let [price] = parts;

    PumpfunPoint {
        price,
        liquidity: guard(price * params.pumpfun.lp_token_ratio),
        total,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> ScenarioParams {
        ScenarioParams::default()
    }

    fn exponential() -> ScenarioParams {
        let mut p = ScenarioParams::default();
        p.pumpfun.curve = CurveVariant::Exponential;
        p
    }

    #[test]
    fn standard_surge_is_linear() {
        let point = evaluate(&standard(), 3.0);
        assert!((point.price - 1600.0).abs() < 1e-9);
        assert!((point.total - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn standard_plateau_holds_double() {
        for t in [5.0, 7.5, 9.0] {
            let point = evaluate(&standard(), t);
            assert!((point.price - 2000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn standard_decay_from_plateau() {
        let point = evaluate(&standard(), 12.0);
        let expected = 2000.0 * 0.95_f64.powf(2.0);
        assert!((point.price - expected).abs() < 1e-9);
    }

    #[test]
    fn standard_floor_at_ten_percent() {
        let point = evaluate(&standard(), 200.0);
        assert!((point.price - 100.0).abs() < 1e-9);
    }

    #[test]
    fn exponential_surge_compounds() {
        let point = evaluate(&exponential(), 2.0);
        assert!((point.price - 2250.0).abs() < 1e-9);
    }

    #[test]
    fn exponential_decay_rebases_at_regime_change() {
        let point = evaluate(&exponential(), 10.0);
        // decay regime starts from deposit * 0.9^0
        assert!((point.price - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn exponential_floor_at_ten_percent() {
        let point = evaluate(&exponential(), 60.0);
        assert!((point.price - 100.0).abs() < 1e-9);
    }

    #[test]
    fn liquidity_scales_with_lp_token_ratio() {
        let mut p = standard();
        p.pumpfun.lp_token_ratio = 0.8;
        let point = evaluate(&p, 3.0);
        assert!((point.liquidity - 1280.0).abs() < 1e-9);
    }

    #[test]
    fn entry_time_does_not_shift_the_curve() {
        let mut p = standard();
        p.entry_time = 7.0;
        let shifted = evaluate(&p, 3.0);
        let baseline = evaluate(&standard(), 3.0);
        assert!((shifted.price - baseline.price).abs() < 1e-12);
    }
}
