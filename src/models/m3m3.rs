// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - M3M3 Model

//! Tiered staking-reward model: only top stakers earn. Rewards accrue either
//! linearly or with compounding, scale with a capped time-held multiplier,
//! and split into SOL and token legs by `sol_ratio`.

use crate::params::{ScenarioParams, StakingAccrual};
use crate::reconcile::{finalize, guard};
use crate::types::M3m3Point;

use super::time_held;

const MULTIPLIER_RATE: f64 = 0.15;
const MULTIPLIER_CAP: f64 = 3.0;
/// Periods over which the linear accrual pays one full APY.
const REWARD_PERIOD: f64 = 20.0;

pub fn evaluate(params: &ScenarioParams, t: f64) -> M3m3Point {
    let deposit = params.initial_deposit;

    // Outside the top tier there is nothing to accrue: principal rides along
    // untouched and every reward component is exactly zero.
    if !params.is_top_staker {
        let principal = guard(deposit);
        return M3m3Point {
            principal,
            sol_rewards: 0.0,
            token_rewards: 0.0,
            total: principal,
        };
    }

    let held = time_held(params.entry_time, t);
    let m = &params.m3m3;

    let staking_multiplier = (1.0 + held * MULTIPLIER_RATE).min(MULTIPLIER_CAP);
    let effective_apy = m.base_apy * staking_multiplier * m.lock_multiplier;

    let rewards = match m.accrual {
        StakingAccrual::Linear => deposit * effective_apy * (held / REWARD_PERIOD),
        StakingAccrual::Compounding => {
            let growth = (1.0 + effective_apy / m.compound_period)
                .powf(m.compound_period * held);
            deposit * growth - deposit
        }
    };

    // token leg takes the remainder so the two legs always sum to rewards
    let sol_raw = rewards * m.sol_ratio;
    let token_raw = rewards - sol_raw;

    let mut parts = [deposit, sol_raw, token_raw];
    let total = finalize(&mut parts);
    let [principal, sol_rewards, token_rewards] = parts;

    M3m3Point {
        principal,
        sol_rewards,
        token_rewards,
        total,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Breakdown;

    fn top_staker() -> ScenarioParams {
        ScenarioParams::default()
    }

    #[test]
    fn linear_accrual_at_ten_periods() {
        let p = top_staker();
        let point = evaluate(&p, 10.0);
        // mult = min(1 + 10*0.15, 3) = 2.5, apy = 0.875
        // rewards = 1000 * 0.875 * 10/20 = 437.5
        assert!((point.sol_rewards - 131.25).abs() < 1e-9);
        assert!((point.token_rewards - 306.25).abs() < 1e-9);
        assert!((point.total - 1437.5).abs() < 1e-9);
    }

    #[test]
    fn multiplier_caps_at_three() {
        let p = top_staker();
        // held = 20 would give 1 + 3.0 = 4x uncapped
        let point = evaluate(&p, 20.0);
        // apy = 0.35 * 3 = 1.05, rewards = 1000 * 1.05 * 1 = 1050
        assert!((point.sol_rewards + point.token_rewards - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn non_top_staker_earns_exactly_zero() {
        let mut p = top_staker();
        p.is_top_staker = false;
        for t in 0..=20 {
            let point = evaluate(&p, t as f64);
            assert_eq!(point.sol_rewards, 0.0);
            assert_eq!(point.token_rewards, 0.0);
            assert!((point.total - 1000.0).abs() < 1e-12);
        }
    }

    #[test]
    fn compounding_beats_linear_over_time() {
        let mut p = top_staker();
        let linear = evaluate(&p, 15.0);
        p.m3m3.accrual = StakingAccrual::Compounding;
        let compounding = evaluate(&p, 15.0);
        assert!(compounding.total > linear.total);
    }

    #[test]
    fn compounding_matches_closed_form() {
        let mut p = top_staker();
        p.m3m3.accrual = StakingAccrual::Compounding;
        let point = evaluate(&p, 4.0);
        // held = 4: mult = 1.6, apy = 0.56
        let apy: f64 = 0.35 * 1.6;
        let expected = 1000.0 * (1.0 + apy / 12.0).powf(12.0 * 4.0) - 1000.0;
        assert!(
            (point.sol_rewards + point.token_rewards - expected).abs() < 1e-9
        );
    }

    #[test]
    fn zero_compound_period_stays_finite() {
        let mut p = top_staker();
        p.m3m3.accrual = StakingAccrual::Compounding;
        p.m3m3.compound_period = 0.0;
        let point = evaluate(&p, 10.0);
        assert!(point.total.is_finite());
        let sum: f64 = point.components().iter().sum();
        assert!((point.total - sum).abs() < 1e-9);
    }

    #[test]
    fn negative_compound_period_is_substituted_not_propagated() {
        let mut p = top_staker();
        p.m3m3.accrual = StakingAccrual::Compounding;
        // A small negative period drives the growth base negative, and a
        // fractional power of a negative base goes NaN; the guard must zero
        // the reward legs and keep the point reconciling.
        p.m3m3.compound_period = -0.3;
        let point = evaluate(&p, 7.0);
        assert_eq!(point.sol_rewards, 0.0);
        assert_eq!(point.token_rewards, 0.0);
        assert!((point.total - 1000.0).abs() < 1e-9);
        let sum: f64 = point.components().iter().sum();
        assert!((point.total - sum).abs() < 1e-9);
    }

    #[test]
    fn lock_multiplier_scales_apy() {
        let mut p = top_staker();
        p.m3m3.lock_multiplier = 2.0;
        let boosted = evaluate(&p, 10.0);
        // apy doubles => linear rewards double: 875 instead of 437.5
        assert!(
            (boosted.sol_rewards + boosted.token_rewards - 875.0).abs() < 1e-9
        );
    }

    #[test]
    fn reward_legs_split_by_sol_ratio() {
        let mut p = top_staker();
        p.m3m3.sol_ratio = 0.45;
        let point = evaluate(&p, 10.0);
        let rewards = point.sol_rewards + point.token_rewards;
        assert!((point.sol_rewards - rewards * 0.45).abs() < 1e-9);
    }
}
