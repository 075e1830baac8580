// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Gobbler Model

//! Early-incentive liquidity model: depositors entering inside the early
//! window receive bonus LP exposure, then accrue trading fees on it.
//!
//! Two named variants ship: `Linear` (bonus LP tokens, linear fee accrual)
//! and `VirtualLiquidity` (plain LP tokens, fees accrue on a scaled virtual
//! liquidity figure with a growth term). The dashboard exposes the selector;
//! neither variant is silently preferred.

use crate::params::{GobblerVariant, ScenarioParams};
use crate::reconcile::{finalize, guard};
use crate::types::GobblerPoint;

use super::time_held;

// ─── Constants ──────────────────────────────────────────────────────────────

/// Periods after launch during which entry earns an early bonus.
const EARLY_WINDOW: f64 = 5.0;

const LINEAR_FEE_RATE: f64 = 0.015;

const VIRTUAL_BONUS_PER_PERIOD: f64 = 0.1;
const VIRTUAL_FEE_RATE: f64 = 0.01;
const VIRTUAL_FEE_GROWTH: f64 = 0.05;

// ─── Evaluation ─────────────────────────────────────────────────────────────

pub fn evaluate(params: &ScenarioParams, t: f64) -> GobblerPoint {
    let deposit = params.initial_deposit;
    let held = time_held(params.entry_time, t);

    let (lp_raw, virtual_liquidity, fees_raw) = match params.gobbler.variant {
        GobblerVariant::Linear => {
            // Entry at t=0 doubles LP exposure; the bonus decays to 1x at the
            // end of the early window and never drops below 1x.
            let early_mult = (2.0 - params.entry_time / EARLY_WINDOW).max(1.0);
            let lp = deposit * early_mult;
            (lp, lp, lp * held * LINEAR_FEE_RATE)
        }
        GobblerVariant::VirtualLiquidity => {
            let bonus =
                (EARLY_WINDOW - params.entry_time).max(0.0) * VIRTUAL_BONUS_PER_PERIOD;
            let virtual_liq = deposit * (1.0 + bonus);
            let fees = virtual_liq
                * held
                * VIRTUAL_FEE_RATE
                * (1.0 + held * VIRTUAL_FEE_GROWTH);
            (deposit, virtual_liq, fees)
        }
    };

    let mut parts = [lp_raw, fees_raw];
    let total = finalize(&mut parts);
    let [lp_tokens, fees] = parts;

    GobblerPoint {
        lp_tokens,
        fees,
        virtual_liquidity: guard(virtual_liquidity),
        total,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakdown;

    fn params() -> ScenarioParams {
        ScenarioParams::default()
    }

    #[test]
    fn linear_entry_zero_doubles_lp() {
        let p = params();
        let point = evaluate(&p, 0.0);
        assert!((point.lp_tokens - 2000.0).abs() < 1e-9);
        assert!((point.fees).abs() < 1e-9);
        assert!((point.total - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn linear_fees_accrue_on_lp() {
        let p = params();
        let point = evaluate(&p, 4.0);
        // lp = 2000, fees = 2000 * 4 * 0.015 = 120
        assert!((point.fees - 120.0).abs() < 1e-9);
        assert!((point.total - 2120.0).abs() < 1e-9);
    }

    #[test]
    fn linear_bonus_floors_at_one() {
        let mut p = params();
        p.entry_time = 8.0;
        let point = evaluate(&p, 10.0);
        assert!((point.lp_tokens - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn virtual_variant_accrues_on_virtual_liquidity() {
        let mut p = params();
        p.gobbler.variant = GobblerVariant::VirtualLiquidity;
        let point = evaluate(&p, 2.0);
        // virtual = 1000 * 1.5, fees = 1500 * 2 * 0.01 * 1.1 = 33
        assert!((point.virtual_liquidity - 1500.0).abs() < 1e-9);
        assert!((point.lp_tokens - 1000.0).abs() < 1e-9);
        assert!((point.fees - 33.0).abs() < 1e-9);
        assert!((point.total - 1033.0).abs() < 1e-9);
    }

    #[test]
    fn virtual_bonus_gone_after_early_window() {
        let mut p = params();
        p.gobbler.variant = GobblerVariant::VirtualLiquidity;
        p.entry_time = 6.0;
        let point = evaluate(&p, 8.0);
        assert!((point.virtual_liquidity - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn future_entry_earns_nothing_yet() {
        let mut p = params();
        p.entry_time = 10.0;
        let point = evaluate(&p, 3.0);
        assert!((point.fees).abs() < 1e-9);
        assert!((point.total - point.lp_tokens).abs() < 1e-9);
    }

    #[test]
    fn total_reconciles_with_components() {
        let p = params();
        for t in 0..=20 {
            let point = evaluate(&p, t as f64);
            let sum: f64 = point.components().iter().sum();
            assert!((point.total - sum).abs() < 1e-9);
        }
    }
}
