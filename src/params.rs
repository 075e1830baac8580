// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Scenario Parameters

//! Parameter store: every user-tunable input to a simulation run.
//!
//! The store only holds and merges values. It never recomputes anything and
//! never rejects a numeric value -- out-of-range input is the engine's problem
//! (it must stay finite), not the store's. Validation belongs to the UI.

use serde::{Deserialize, Serialize};

// ─── Defaults ───────────────────────────────────────────────────────────────

const DEFAULT_DEPOSIT: f64 = 1000.0;
const DEFAULT_ENTRY_TIME: f64 = 0.0;
const DEFAULT_HORIZON: u32 = 20;

const DEFAULT_BASE_APY: f64 = 0.35;
const DEFAULT_SOL_RATIO: f64 = 0.3;
const DEFAULT_COMPOUND_PERIOD: f64 = 12.0;
const DEFAULT_LOCK_MULTIPLIER: f64 = 1.0;

const DEFAULT_LP_TOKEN_RATIO: f64 = 0.5;

const DEFAULT_SPLIT_HOLDERS: f64 = 0.5;
const DEFAULT_SPLIT_LIQUIDITY: f64 = 0.3;
const DEFAULT_SPLIT_TREASURY: f64 = 0.2;

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Errors from the parameter store boundary.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("malformed parameter patch: {0}")]
    Patch(#[from] serde_json::Error),
}

// ─── Time Step ──────────────────────────────────────────────────────────────

/// Series resolution: one point per period, or one per half period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStep {
    Unit,
    Half,
}

impl Default for TimeStep {
    fn default() -> Self { TimeStep::Unit }
}

impl TimeStep {
    pub fn increment(&self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Half => 0.5,
        }
    }

    /// Number of points generated for an inclusive `0..=horizon` axis.
    pub fn point_count(&self, horizon: u32) -> usize {
        match self {
            Self::Unit => horizon as usize + 1,
            Self::Half => 2 * horizon as usize + 1,
        }
    }
}

// ─── Model Variant Selectors ────────────────────────────────────────────────

/// Gobbler fee accrual: simple linear fees, or the richer virtual-liquidity
/// accrual. Both ship on the dashboard as distinct named strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GobblerVariant {
    Linear,
    VirtualLiquidity,
}

/// M3M3 reward accrual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingAccrual {
    Linear,
    Compounding,
}

/// Pump.fun bonding-curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveVariant {
    Standard,
    Exponential,
}

// ─── Structured Sub-Parameters ──────────────────────────────────────────────

/// Flat fee income split, conceptually summing to 1.0.
///
/// The treasury part absorbs the rounding remainder so the three parts always
/// sum exactly to the fee they subdivide, whatever the ratios are.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeSplit {
    pub holders: f64,
    pub liquidity: f64,
    pub treasury: f64,
}

impl Default for FeeSplit {
    fn default() -> Self {
        Self {
            holders: DEFAULT_SPLIT_HOLDERS,
            liquidity: DEFAULT_SPLIT_LIQUIDITY,
            treasury: DEFAULT_SPLIT_TREASURY,
        }
    }
}

impl FeeSplit {
    /// Subdivide `fees` into (holders, liquidity, treasury) parts.
    pub fn parts_of(&self, fees: f64) -> (f64, f64, f64) {
        let holders = fees * self.holders;
        let liquidity = fees * self.liquidity;
        let treasury = fees - holders - liquidity;
        (holders, liquidity, treasury)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GobblerParams {
    pub variant: GobblerVariant,
}

impl Default for GobblerParams {
    fn default() -> Self {
        Self { variant: GobblerVariant::Linear }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct M3m3Params {
    pub accrual: StakingAccrual,
    /// APY base before the time-held multiplier (0.35 = 35%).
    pub base_apy: f64,
    /// Fraction of rewards paid in SOL; the rest pays in the token.
    pub sol_ratio: f64,
    /// Compounding periods per unit of APY (Compounding accrual only).
    pub compound_period: f64,
    /// Lock-duration boost on effective APY (1.0 = no lock).
    pub lock_multiplier: f64,
}

impl Default for M3m3Params {
    fn default() -> Self {
        Self {
            accrual: StakingAccrual::Linear,
            base_apy: DEFAULT_BASE_APY,
            sol_ratio: DEFAULT_SOL_RATIO,
            compound_period: DEFAULT_COMPOUND_PERIOD,
            lock_multiplier: DEFAULT_LOCK_MULTIPLIER,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PumpfunParams {
    pub curve: CurveVariant,
    /// Fraction of price counted as pool liquidity (auxiliary readout).
    pub lp_token_ratio: f64,
}

impl Default for PumpfunParams {
    fn default() -> Self {
        Self {
            curve: CurveVariant::Standard,
            lp_token_ratio: DEFAULT_LP_TOKEN_RATIO,
        }
    }
}

// ─── ScenarioParams ─────────────────────────────────────────────────────────

/// Complete input to a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub initial_deposit: f64,
    pub entry_time: f64,
    pub time_horizon: u32,
    #[serde(default)]
    pub time_step: TimeStep,
    pub is_top_staker: bool,
    #[serde(default)]
    pub fee_split: FeeSplit,
    #[serde(default)]
    pub gobbler: GobblerParams,
    #[serde(default)]
    pub m3m3: M3m3Params,
    #[serde(default)]
    pub pumpfun: PumpfunParams,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            initial_deposit: DEFAULT_DEPOSIT,
            entry_time: DEFAULT_ENTRY_TIME,
            time_horizon: DEFAULT_HORIZON,
            time_step: TimeStep::default(),
            is_top_staker: true,
            fee_split: FeeSplit::default(),
            gobbler: GobblerParams::default(),
            m3m3: M3m3Params::default(),
            pumpfun: PumpfunParams::default(),
        }
    }
}

// ─── ParamsPatch ────────────────────────────────────────────────────────────

/// Partial update: absent fields leave state untouched, present fields replace
/// wholesale. Structured sub-objects replace at one level -- there is no deep
/// recursive merge inside them. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamsPatch {
    #[serde(default)]
    pub initial_deposit: Option<f64>,
    #[serde(default)]
    pub entry_time: Option<f64>,
    #[serde(default)]
    pub time_horizon: Option<u32>,
    #[serde(default)]
    pub time_step: Option<TimeStep>,
    #[serde(default)]
    pub is_top_staker: Option<bool>,
    #[serde(default)]
    pub fee_split: Option<FeeSplit>,
    #[serde(default)]
    pub gobbler: Option<GobblerParams>,
    #[serde(default)]
    pub m3m3: Option<M3m3Params>,
    #[serde(default)]
    pub pumpfun: Option<PumpfunParams>,
}

impl ScenarioParams {
    /// Merge a partial update. No validation, no side effects, no errors:
    /// recomputation is the caller's responsibility.
    pub fn apply(&mut self, patch: ParamsPatch) {
        if let Some(v) = patch.initial_deposit { self.initial_deposit = v; }
        if let Some(v) = patch.entry_time { self.entry_time = v; }
        if let Some(v) = patch.time_horizon { self.time_horizon = v; }
        if let Some(v) = patch.time_step { self.time_step = v; }
        if let Some(v) = patch.is_top_staker { self.is_top_staker = v; }
        if let Some(v) = patch.fee_split { self.fee_split = v; }
        if let Some(v) = patch.gobbler { self.gobbler = v; }
        if let Some(v) = patch.m3m3 { self.m3m3 = v; }
        if let Some(v) = patch.pumpfun { self.pumpfun = v; }
    }

    /// Parse and merge a JSON patch. The only failure mode is malformed JSON;
    /// unrecognized fields are dropped silently.
    pub fn apply_json(&mut self, json: &str) -> Result<(), ParamError> {
        let patch: ParamsPatch = serde_json::from_str(json)?;
        self.apply(patch);
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
