// Invariant Checks — every property the engine promises, verified per series
// Shared by the named scenarios and the randomized sweep

use gauntlet_engine::reconcile;
use gauntlet_engine::{simulate, ScenarioParams, TimeSeriesPoint};

pub struct CheckOutcome {
    pub violations: Vec<String>,
    /// Largest decimal-audit discrepancy seen across all points (absolute).
    pub max_discrepancy: f64,
    pub points: usize,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run every engine invariant against a generated series.
pub fn run_checks(
    params: &ScenarioParams,
    series: &[TimeSeriesPoint],
) -> CheckOutcome {
    let mut violations = Vec::new();

    // Monotonic horizon: length is fixed by horizon and step, nothing else.
    let expected = params.time_step.point_count(params.time_horizon);
    if series.len() != expected {
        violations.push(format!(
            "length: got {} points, expected {}",
            series.len(),
            expected
        ));
    }

    // Determinism: regenerating from the same snapshot is bit-for-bit equal.
    if simulate(params) != series {
        violations.push("determinism: regenerated series differs".to_string());
    }

    let mut max_discrepancy = 0.0_f64;
    for point in series {
        if !point.is_finite() {
            violations.push(format!("finiteness: non-finite value at t={}", point.time));
        }

        for (name, total, components) in point.breakdowns() {
            if !reconcile::reconciles(total, &components) {
                violations.push(format!(
                    "reconciliation: {} at t={}: total {} vs components {:?}",
                    name, point.time, total, components
                ));
            }
            let discrepancy = reconcile::from_decimal(
                reconcile::audit_discrepancy(total, &components),
            );
            max_discrepancy = max_discrepancy.max(discrepancy);
            if !reconcile::audit_passes(total, &components) {
                violations.push(format!(
                    "decimal audit: {} at t={}: discrepancy {:e}",
                    name, point.time, discrepancy
                ));
            }
        }

        // Non-staker zeroing: reward components exactly zero, principal only.
        if !params.is_top_staker {
            if point.m3m3.sol_rewards != 0.0
                || point.m3m3.token_rewards != 0.0
                || point.ripper.staking_rewards != 0.0
            {
                violations.push(format!(
                    "staking gate: reward leaked at t={} for non-top-staker",
                    point.time
                ));
            }
        }

        // Clamping: before entry, no time-held accrual may leak in.
        if params.entry_time > point.time {
            if point.gobbler.fees != 0.0
                || point.snapper.fees != 0.0
                || point.ripper.amm_fees != 0.0
                || point.ripper.staking_rewards != 0.0
            {
                violations.push(format!(
                    "clamping: pre-entry accrual at t={} (entry {})",
                    point.time, params.entry_time
                ));
            }
        }
    }

    CheckOutcome {
        violations,
        max_discrepancy,
        points: series.len(),
    }
}
