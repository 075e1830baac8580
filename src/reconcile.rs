// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Reconciliation & Finite Guard

//! Numeric policy for engine output: no point ever carries a non-finite
//! number, and every reported total equals the sum of its disclosed
//! components.
//!
//! The engine computes in f64. The Decimal audit below is parallel validation
//! only (bench and tests); it never gates engine output.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Relative tolerance for f64 reconciliation checks.
pub const RECONCILE_TOLERANCE: f64 = 1e-9;

// ─── Finite Guard ───────────────────────────────────────────────────────────

/// Substitute 0.0 for any non-finite value.
pub fn guard(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Guard every component in place, then return their sum as the point's
/// total. If the guarded components still overflow the sum, the whole point
/// is degenerate: all components are zeroed and the total is 0.0, keeping
/// `total == sum(components)` exact.
pub fn finalize(components: &mut [f64]) -> f64 {
    for c in components.iter_mut() {
        *c = guard(*c);
    }
    let total: f64 = components.iter().sum();
    if total.is_finite() {
        total
    } else {
        for c in components.iter_mut() {
            *c = 0.0;
        }
        0.0
    }
}

// ─── f64 Reconciliation ─────────────────────────────────────────────────────

/// Whether `total` equals the component sum within relative tolerance.
pub fn reconciles(total: f64, components: &[f64]) -> bool {
    let sum: f64 = components.iter().sum();
    let scale = total.abs().max(sum.abs()).max(1.0);
    (total - sum).abs() <= RECONCILE_TOLERANCE * scale
}

// ─── Decimal Audit ──────────────────────────────────────────────────────────

const AUDIT_TOLERANCE: Decimal = dec!(0.000000001);

/// Magnitudes beyond this risk overflowing `Decimal` (including the component
/// sum); the audit abstains and the f64 check alone governs.
const AUDIT_RANGE_LIMIT: f64 = 1.0e27;

/// Convert f64 to Decimal (lossy but sufficient for the audit).
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

fn auditable(total: f64, components: &[f64]) -> bool {
    total.abs() <= AUDIT_RANGE_LIMIT
        && components.iter().all(|c| c.abs() <= AUDIT_RANGE_LIMIT)
}

/// Convert Decimal back to f64 (reporting only).
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Cross-check `total == sum(components)` in exact decimal arithmetic.
///
/// Returns the absolute discrepancy. A discrepancy at f64-rounding scale is
/// expected; anything above `AUDIT_TOLERANCE * scale` is a reconciliation
/// failure.
pub fn audit_discrepancy(total: f64, components: &[f64]) -> Decimal {
    if !auditable(total, components) {
        return Decimal::ZERO;
    }
    let sum: Decimal = components.iter().map(|&c| to_decimal(c)).sum();
    (to_decimal(total) - sum).abs()
}

/// Whether the decimal audit passes for this total/component set.
pub fn audit_passes(total: f64, components: &[f64]) -> bool {
    if !auditable(total, components) {
        return true;
    }
    let scale = to_decimal(total.abs().max(1.0));
    audit_discrepancy(total, components) <= AUDIT_TOLERANCE * scale
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_passes_finite_and_zeroes_the_rest() {
        assert!((guard(42.5) - 42.5).abs() < 1e-12);
        assert!((guard(-3.0) + 3.0).abs() < 1e-12);
        assert!(guard(f64::NAN).abs() < 1e-12);
        assert!(guard(f64::INFINITY).abs() < 1e-12);
        assert!(guard(f64::NEG_INFINITY).abs() < 1e-12);
    }

    #[test]
    fn finalize_substitutes_and_totals() {
        let mut parts = [100.0, f64::NAN, 25.0];
        let total = finalize(&mut parts);
        assert!((parts[1]).abs() < 1e-12);
        assert!((total - 125.0).abs() < 1e-12);
        assert!(reconciles(total, &parts));
    }

    #[test]
    fn finalize_zeroes_a_point_whose_sum_overflows() {
        let mut parts = [f64::MAX, f64::MAX];
        let total = finalize(&mut parts);
        assert!(total.abs() < 1e-12);
        assert!(parts.iter().all(|c| c.abs() < 1e-12));
    }

    #[test]
    fn reconciles_within_tolerance() {
        assert!(reconciles(1437.5, &[1000.0, 131.25, 306.25]));
        assert!(!reconciles(1437.5, &[1000.0, 131.25, 306.26]));
    }

    #[test]
    fn decimal_audit_agrees_with_f64_sum() {
        let parts = [2000.0, 150.0];
        assert!(audit_passes(2150.0, &parts));
        assert!(!audit_passes(2151.0, &parts));
    }

    #[test]
    fn decimal_audit_tolerates_f64_rounding() {
        // 0.1 + 0.2 != 0.3 in f64; total computed the engine's way must pass.
        let parts = [0.1, 0.2];
        let total: f64 = parts.iter().sum();
        assert!(audit_passes(total, &parts));
    }
}
