// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Engine Output Types

use serde::{Deserialize, Serialize};

// ─── Breakdown ──────────────────────────────────────────────────────────────

/// A model's per-point result: the reported total plus the additive
/// components that must reconcile to it. Auxiliary readouts (virtual
/// liquidity, pool liquidity) are serialized but deliberately excluded from
/// `components`.
pub trait Breakdown {
    fn total(&self) -> f64;
    fn components(&self) -> Vec<f64>;
}

// ─── Per-Model Points ───────────────────────────────────────────────────────

/// Early-incentive liquidity model output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GobblerPoint {
    pub lp_tokens: f64,
    pub fees: f64,
    /// Liquidity figure the fees accrued on; not a balance, not a component.
    pub virtual_liquidity: f64,
    pub total: f64,
}

impl Breakdown for GobblerPoint {
    fn total(&self) -> f64 { self.total }
    fn components(&self) -> Vec<f64> {
        vec![self.lp_tokens, self.fees]
    }
}

/// Flat-distribution fee model output. Fee income subdivides by the
/// configured split; the three parts sum exactly to `fees`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapperPoint {
    pub lp_tokens: f64,
    pub fees: f64,
    pub fees_holders: f64,
    pub fees_liquidity: f64,
    pub fees_treasury: f64,
    pub total: f64,
}

impl Breakdown for SnapperPoint {
    fn total(&self) -> f64 { self.total }
    fn components(&self) -> Vec<f64> {
        vec![
            self.lp_tokens,
            self.fees_holders,
            self.fees_liquidity,
            self.fees_treasury,
        ]
    }
}

/// Tiered staking-reward model output. Non-top-stakers carry zero reward
/// components and `total == principal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct M3m3Point {
    pub principal: f64,
    pub sol_rewards: f64,
    pub token_rewards: f64,
    pub total: f64,
}

impl Breakdown for M3m3Point {
    fn total(&self) -> f64 { self.total }
    fn components(&self) -> Vec<f64> {
        vec![self.principal, self.sol_rewards, self.token_rewards]
    }
}

/// Bonding-curve price model output. Price is the single component;
/// `liquidity` is an auxiliary readout scaled by `lp_token_ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpfunPoint {
    pub price: f64,
    pub liquidity: f64,
    pub total: f64,
}

impl Breakdown for PumpfunPoint {
    fn total(&self) -> f64 { self.total }
    fn components(&self) -> Vec<f64> {
        vec![self.price]
    }
}

/// Hybrid AMM+staking model output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RipperPoint {
    pub lp_tokens: f64,
    pub amm_fees: f64,
    pub staking_rewards: f64,
    pub non_lp_value: f64,
    pub total: f64,
}

impl Breakdown for RipperPoint {
    fn total(&self) -> f64 { self.total }
    fn components(&self) -> Vec<f64> {
        vec![
            self.lp_tokens,
            self.amm_fees,
            self.staking_rewards,
            self.non_lp_value,
        ]
    }
}

// ─── TimeSeriesPoint ────────────────────────────────────────────────────────

/// One row of engine output: every model evaluated independently at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub time: f64,
    pub gobbler: GobblerPoint,
    pub snapper: SnapperPoint,
    pub m3m3: M3m3Point,
    pub pumpfun: PumpfunPoint,
    pub ripper: RipperPoint,
}

impl TimeSeriesPoint {
    /// (name, total, components) for every model at this point, in render
    /// order. The audit surfaces iterate this instead of hardcoding fields.
    pub fn breakdowns(&self) -> [(&'static str, f64, Vec<f64>); 5] {
        [
            ("gobbler", self.gobbler.total(), self.gobbler.components()),
            ("snapper", self.snapper.total(), self.snapper.components()),
            ("m3m3", self.m3m3.total(), self.m3m3.components()),
            ("pumpfun", self.pumpfun.total(), self.pumpfun.components()),
            ("ripper", self.ripper.total(), self.ripper.components()),
        ]
    }

    /// Whether every field of every model at this point is finite.
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.breakdowns().iter().all(|(_, total, components)| {
                total.is_finite() && components.iter().all(|c| c.is_finite())
            })
    }
}

// ─── Summary ────────────────────────────────────────────────────────────────

/// Last-point totals per model, read by the dashboard's summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub time: f64,
    pub gobbler: f64,
    pub snapper: f64,
    pub m3m3: f64,
    pub pumpfun: f64,
    pub ripper: f64,
}

impl Summary {
    pub fn from_point(point: &TimeSeriesPoint) -> Self {
        Self {
            time: point.time,
            gobbler: point.gobbler.total,
            snapper: point.snapper.total,
            m3m3: point.m3m3.total,
            pumpfun: point.pumpfun.total,
            ripper: point.ripper.total,
        }
    }
}
