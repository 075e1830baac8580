// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Piecewise Regime Tables

//! Time-regime branching as data: an ordered `(upper_bound, formula)` table
//! evaluated top-to-bottom. Adding a regime is a table edit, not a rewrite.
//! Used by the bonding-curve price model and the hybrid model's market-cap
//! multiplier.

/// One regime: applies while `t < upper`. The final entry of a table uses
/// `f64::INFINITY` so every `t` is covered.
pub struct Regime<C> {
    pub upper: f64,
    pub eval: fn(f64, &C) -> f64,
}

/// Evaluate the first regime whose upper bound exceeds `t`.
///
/// An exhausted table (possible only if the caller omitted the infinite tail)
/// evaluates to 0.0 rather than panicking.
pub fn eval_table<C>(table: &[Regime<C>], t: f64, ctx: &C) -> f64 {
    for regime in table {
        if t < regime.upper {
            return (regime.eval)(t, ctx);
        }
    }
    0.0
}

// ─── Tests ──────────────────────────────────────────────────────────────────
