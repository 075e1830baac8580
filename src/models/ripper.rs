// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Ripper Model

//! Hybrid AMM+staking model (hypothetical design): 60% of the deposit goes
//! into an LP position with an early-entry bonus, AMM fees accrue on it with
//! a time-growing rate, top stakers earn an additional staking stream, and
//! the remaining 40% rides a piecewise market-cap multiplier.

use crate::params::ScenarioParams;
use crate::piecewise::{eval_table, Regime};
use crate::reconcile::finalize;
use crate::types::RipperPoint;

use super::time_held;

// ─── Constants ──────────────────────────────────────────────────────────────

const LP_SHARE: f64 = 0.6;
const NON_LP_SHARE: f64 = 0.4;

/// Latest entry period that still earns the LP bonus.
const EARLY_ENTRY_CUTOFF: f64 = 4.0;
const EARLY_BONUS_MAX: f64 = 0.5;

const AMM_FEE_RATE: f64 = 0.01;
const AMM_FEE_GROWTH: f64 = 0.05;

const STAKING_RATE: f64 = 0.30;
const STAKING_MULT_RATE: f64 = 0.15;
const STAKING_MULT_CAP: f64 = 2.5;
const REWARD_PERIOD: f64 = 20.0;

// ─── Market-Cap Multiplier ──────────────────────────────────────────────────

// Growth decelerates in stages: 30%/period, then 15%, then 5%. Each regime
// compounds on top of where the previous one left off.
const MARKET_CAP: &[Regime<()>] = &[
    Regime { upper: 5.0, eval: |t, _| 1.3_f64.powf(t) },
    Regime {
        upper: 10.0,
        eval: |t, _| 1.3_f64.powi(5) * 1.15_f64.powf(t - 5.0),
    },
    Regime {
        upper: f64::INFINITY,
        eval: |t, _| {
            1.3_f64.powi(5) * 1.15_f64.powi(5) * 1.05_f64.powf(t - 10.0)
        },
    },
];

// ─── Evaluation ─────────────────────────────────────────────────────────────

pub fn evaluate(params: &ScenarioParams, t: f64) -> RipperPoint {
    let deposit = params.initial_deposit;
    let entry = params.entry_time;
    let held = time_held(entry, t);

    let initial_lp = deposit * LP_SHARE;
    let early_bonus = if entry <= EARLY_ENTRY_CUTOFF {
        initial_lp * EARLY_BONUS_MAX * (EARLY_ENTRY_CUTOFF - entry)
            / EARLY_ENTRY_CUTOFF
    } else {
        0.0
    };
    let lp_raw = initial_lp + early_bonus;

    // fee rate itself grows with absolute time, accrual with time held
    let amm_fees_raw = lp_raw * held * AMM_FEE_RATE * (1.0 + t * AMM_FEE_GROWTH);

    let staking_raw = if params.is_top_staker {
        let mult = (1.0 + held * STAKING_MULT_RATE).min(STAKING_MULT_CAP);
        lp_raw * STAKING_RATE * mult * (held / REWARD_PERIOD)
    } else {
        0.0
    };

    let market_cap_multiplier = eval_table(MARKET_CAP, t, &());
    let non_lp_raw = deposit * NON_LP_SHARE * market_cap_multiplier;

    let mut parts = [lp_raw, amm_fees_raw, staking_raw, non_lp_raw];
    let total = finalize(&mut parts);
    let [lp_tokens, amm_fees, staking_rewards, non_lp_value] = parts;

    RipperPoint {
        lp_tokens,
        amm_fees,
        staking_rewards,
        non_lp_value,
        total,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakdown;

    #[test]
    fn entry_zero_full_bonus_at_launch() {
        let mut p = ScenarioParams::default();
        p.is_top_staker = false;
        let point = evaluate(&p, 0.0);
        // lp = 600 + 600*0.5 = 900, non-LP = 400 * 1.3^0 = 400
        assert!((point.lp_tokens - 900.0).abs() < 1e-9);
        assert!((point.amm_fees).abs() < 1e-9);
        assert!((point.staking_rewards).abs() < 1e-9);
        assert!((point.non_lp_value - 400.0).abs() < 1e-9);
        assert!((point.total - 1300.0).abs() < 1e-9);
    }

    #[test]
    fn bonus_fades_to_zero_at_cutoff() {
        let mut p = ScenarioParams::default();
        p.entry_time = 4.0;
        let point = evaluate(&p, 4.0);
        assert!((point.lp_tokens - 600.0).abs() < 1e-9);
    }

    #[test]
    fn late_entry_gets_no_bonus() {
        let mut p = ScenarioParams::default();
        p.entry_time = 6.0;
        let point = evaluate(&p, 8.0);
        assert!((point.lp_tokens - 600.0).abs() < 1e-9);
    }

    #[test]
    fn amm_fee_rate_grows_with_absolute_time() {
        let p = ScenarioParams::default();
        let point = evaluate(&p, 10.0);
        // lp = 900, fees = 900 * 10 * 0.01 * (1 + 10*0.05) = 135
        assert!((point.amm_fees - 135.0).abs() < 1e-9);
    }

    #[test]
    fn staking_stream_gated_on_top_staker() {
        let mut p = ScenarioParams::default();
        let with = evaluate(&p, 10.0);
        // 900 * 0.3 * min(2.5, 2.5) * 0.5 = 337.5
        assert!((with.staking_rewards - 337.5).abs() < 1e-9);

        p.is_top_staker = false;
        let without = evaluate(&p, 10.0);
        assert_eq!(without.staking_rewards, 0.0);
    }

    #[test]
    fn market_cap_multiplier_compounds_across_regimes() {
        let p = ScenarioParams::default();
        let at_7 = evaluate(&p, 7.0);
        let expected_7 = 400.0 * 1.3_f64.powi(5) * 1.15_f64.powf(2.0);
        assert!((at_7.non_lp_value - expected_7).abs() < 1e-9);

        let at_12 = evaluate(&p, 12.0);
        let expected_12 =
            400.0 * 1.3_f64.powi(5) * 1.15_f64.powi(5) * 1.05_f64.powf(2.0);
        assert!((at_12.non_lp_value - expected_12).abs() < 1e-9);
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
