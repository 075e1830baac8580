// Scenario Definitions — named parameter presets, sane and hostile
// Zero engine changes: every preset is plain data built from ScenarioParams

use gauntlet_engine::{
    CurveVariant, FeeSplit, GobblerVariant, ScenarioParams, StakingAccrual,
    TimeStep,
};

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub build: fn() -> ScenarioParams,
}

// ─── Preset Builders ────────────────────────────────────────────────────────

fn defaults() -> ScenarioParams {
    ScenarioParams::default()
}

fn late_entry() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.entry_time = 8.0;
    p
}

fn future_entry() -> ScenarioParams {
    // entry beyond the horizon: permitted input, all accrual stays at zero
    let mut p = ScenarioParams::default();
    p.entry_time = 50.0;
    p
}

fn non_staker() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.is_top_staker = false;
    p
}

fn whale() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.initial_deposit = 1.0e9;
    p.time_horizon = 60;
    p
}

fn dust() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.initial_deposit = 1.0e-4;
    p
}

fn negative_deposit() -> ScenarioParams {
    // economically nonsensical, contractually accepted
    let mut p = ScenarioParams::default();
    p.initial_deposit = -250.0;
    p
}

fn zero_horizon() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.time_horizon = 0;
    p
}

fn half_step() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.time_step = TimeStep::Half;
    p
}

fn rich_variants() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.gobbler.variant = GobblerVariant::VirtualLiquidity;
    p.m3m3.accrual = StakingAccrual::Compounding;
    p.pumpfun.curve = CurveVariant::Exponential;
    p
}

fn degenerate_compounding() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.m3m3.accrual = StakingAccrual::Compounding;
    p.m3m3.compound_period = 0.0;
    p
}

fn nan_bait_compounding() -> ScenarioParams {
    // drives the compounding base negative; the finite guard must hold
    let mut p = ScenarioParams::default();
    p.m3m3.accrual = StakingAccrual::Compounding;
    p.m3m3.compound_period = -0.3;
    p
}

fn skewed_fee_split() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.fee_split = FeeSplit { holders: 1.4, liquidity: -0.2, treasury: -0.2 };
    p
}

fn long_horizon() -> ScenarioParams {
    let mut p = ScenarioParams::default();
    p.time_horizon = 500;
    p
}

// ─── Scenario Table ─────────────────────────────────────────────────────────

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario { name: "DEFAULTS", label: "Dashboard Defaults",
            category: "baseline", build: defaults },
        Scenario { name: "LATE_ENTRY", label: "Late Entry (t=8)",
            category: "baseline", build: late_entry },
        Scenario { name: "FUTURE_ENTRY", label: "Entry Beyond Horizon",
            category: "edge", build: future_entry },
        Scenario { name: "NON_STAKER", label: "Non-Top-Staker",
            category: "baseline", build: non_staker },
        Scenario { name: "WHALE", label: "Whale Deposit (1e9)",
            category: "edge", build: whale },
        Scenario { name: "DUST", label: "Dust Deposit (1e-4)",
            category: "edge", build: dust },
        Scenario { name: "NEGATIVE_DEPOSIT", label: "Negative Deposit",
            category: "hostile", build: negative_deposit },
        Scenario { name: "ZERO_HORIZON", label: "Zero Horizon",
            category: "edge", build: zero_horizon },
        Scenario { name: "HALF_STEP", label: "Half-Unit Resolution",
            category: "baseline", build: half_step },
        Scenario { name: "RICH_VARIANTS", label: "Alternate Model Variants",
            category: "baseline", build: rich_variants },
        Scenario { name: "DEGENERATE_COMPOUND", label: "Zero Compound Period",
            category: "hostile", build: degenerate_compounding },
        Scenario { name: "NAN_BAIT", label: "Negative Compound Period",
            category: "hostile", build: nan_bait_compounding },
        Scenario { name: "SKEWED_SPLIT", label: "Out-of-Range Fee Split",
            category: "hostile", build: skewed_fee_split },
        Scenario { name: "LONG_HORIZON", label: "500-Period Horizon",
            category: "stress", build: long_horizon },
    ]
}
