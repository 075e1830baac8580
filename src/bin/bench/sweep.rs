// Randomized Parameter Sweep — seedable ChaCha8 fuzzing of engine invariants
// The models stay closed-form; randomness only picks which snapshot to check

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gauntlet_engine::{
    simulate, CurveVariant, FeeSplit, GobblerVariant, ScenarioParams,
    StakingAccrual, TimeStep,
};

use crate::checks::{run_checks, CheckOutcome};

/// Draw one parameter snapshot, mixing plausible slider positions with
/// hostile values the store is contractually required to accept.
pub fn random_params(rng: &mut ChaCha8Rng) -> ScenarioParams {
    let mut p = ScenarioParams::default();

    p.initial_deposit = match rng.gen_range(0..8u32) {
        0 => 0.0,
        1 => -rng.gen_range(1.0..10_000.0),
        2 => rng.gen_range(1e-6..1e-3),
        3 => rng.gen_range(1e6..1e12),
        _ => rng.gen_range(10.0..100_000.0),
    };

    p.time_horizon = rng.gen_range(0..200);
    // one draw in four puts entry past the horizon on purpose
    p.entry_time = if rng.gen_bool(0.25) {
        p.time_horizon as f64 + rng.gen_range(0.0..50.0)
    } else {
        rng.gen_range(0.0..(p.time_horizon as f64 + 1.0))
    };

    p.time_step = if rng.gen_bool(0.3) { TimeStep::Half } else { TimeStep::Unit };
    p.is_top_staker = rng.gen_bool(0.5);

    p.fee_split = FeeSplit {
        holders: rng.gen_range(-0.5..1.5),
        liquidity: rng.gen_range(-0.5..1.5),
        treasury: rng.gen_range(-0.5..1.5),
    };

    p.gobbler.variant = if rng.gen_bool(0.5) {
        GobblerVariant::Linear
    } else {
        GobblerVariant::VirtualLiquidity
    };

    p.m3m3.accrual = if rng.gen_bool(0.5) {
        StakingAccrual::Linear
    } else {
        StakingAccrual::Compounding
    };
    p.m3m3.base_apy = rng.gen_range(0.0..2.0);
    p.m3m3.sol_ratio = rng.gen_range(-0.5..1.5);
    p.m3m3.compound_period = rng.gen_range(-2.0..365.0);
    p.m3m3.lock_multiplier = rng.gen_range(0.0..5.0);

    p.pumpfun.curve = if rng.gen_bool(0.5) {
        CurveVariant::Standard
    } else {
        CurveVariant::Exponential
    };
    p.pumpfun.lp_token_ratio = rng.gen_range(-1.0..2.0);

    p
}

pub struct SweepOutcome {
    pub runs: usize,
    pub failures: usize,
    pub discrepancies: Vec<f64>,
    /// First few violation messages, enough to diagnose without drowning.
    pub sample_violations: Vec<String>,
}

const VIOLATION_SAMPLE_CAP: usize = 10;

/// Run `runs` randomized snapshots from `base_seed` and check every invariant
/// on each. Fully reproducible for a given seed.
pub fn run_sweep(runs: usize, base_seed: u64) -> SweepOutcome {
    use rand::SeedableRng;

    let mut failures = 0;
    let mut discrepancies = Vec::with_capacity(runs);
    let mut sample_violations = Vec::new();

    for i in 0..runs {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(i as u64));
        let params = random_params(&mut rng);
        let series = simulate(&params);
        let CheckOutcome { violations, max_discrepancy, .. } =
            run_checks(&params, &series);

        discrepancies.push(max_discrepancy);
        if !violations.is_empty() {
            failures += 1;
            for v in violations {
                if sample_violations.len() < VIOLATION_SAMPLE_CAP {
                    sample_violations.push(format!("seed {}+{}: {}", base_seed, i, v));
                }
            }
        }
    }

    SweepOutcome { runs, failures, discrepancies, sample_violations }
}
