// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Snapper Model

//! Flat-distribution fee model: no early bonus, everyone holds exactly their
//! deposit in LP tokens. Fee income grows sub-linearly in time held
//! (square-root multiplier) and subdivides by the configured fee split.

use crate::params::ScenarioParams;
use crate::reconcile::finalize;
use crate::types::SnapperPoint;

use super::time_held;

const FEE_RATE: f64 = 0.01;
const FEE_GROWTH: f64 = 0.3;

pub fn evaluate(params: &ScenarioParams, t: f64) -> SnapperPoint {
    let held = time_held(params.entry_time, t);
    let lp_raw = params.initial_deposit;

    let fee_multiplier = (1.0 + held * FEE_GROWTH).sqrt();
    let fees_raw = lp_raw * held * FEE_RATE * fee_multiplier;
    let (holders_raw, liquidity_raw, treasury_raw) =
        params.fee_split.parts_of(fees_raw);

    let mut parts = [lp_raw, holders_raw, liquidity_raw, treasury_raw];
    let total = finalize(&mut parts);
    let [lp_tokens, fees_holders, fees_liquidity, fees_treasury] = parts;

    SnapperPoint {
        lp_tokens,
        // Aggregate fee figure re-derived from the guarded parts so it stays
        // consistent with what the components report.
        fees: fees_holders + fees_liquidity + fees_treasury,
        fees_holders,
        fees_liquidity,
        fees_treasury,
        total,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FeeSplit;
    use crate::types::Breakdown;

    #[test]
    fn no_early_bonus() {
        let p = ScenarioParams::default();
        let point = evaluate(&p, 0.0);
        assert!((point.lp_tokens - 1000.0).abs() < 1e-9);
        assert!((point.total - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn fees_grow_with_sqrt_multiplier() {
        let p = ScenarioParams::default();
        let point = evaluate(&p, 5.0);
        // fee_mult = sqrt(1 + 5*0.3) = sqrt(2.5), fees = 1000*5*0.01*sqrt(2.5)
        let expected = 1000.0 * 5.0 * 0.01 * 2.5_f64.sqrt();
        assert!((point.fees - expected).abs() < 1e-9);
        assert!((point.fees - 79.0569).abs() < 1e-4);
        assert!((point.total - (1000.0 + expected)).abs() < 1e-9);
    }

    #[test]
    fn fee_parts_follow_the_split() {
        let mut p = ScenarioParams::default();
        p.fee_split = FeeSplit { holders: 0.6, liquidity: 0.25, treasury: 0.15 };
        let point = evaluate(&p, 8.0);
        assert!((point.fees_holders - point.fees * 0.6).abs() < 1e-9);
        assert!(
            (point.fees_holders + point.fees_liquidity + point.fees_treasury
                - point.fees)
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn future_entry_accrues_no_fees() {
        let mut p = ScenarioParams::default();
        p.entry_time = 12.0;
        let point = evaluate(&p, 5.0);
        assert!((point.fees).abs() < 1e-9);
        assert!((point.total - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn total_reconciles_with_components() {
        let p = ScenarioParams::default();
        for t in 0..=20 {
            let point = evaluate(&p, t as f64);
            let sum: f64 = point.components().iter().sum();
            assert!((point.total - sum).abs() < 1e-9);
        }
    }
}
