// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Launchpad Comparison Suite ("The Gauntlet") - Protocol Models

//! The five launch-mechanism models, each a stateless pure function of
//! `(params, t)`. No model keeps state across steps; the only shared input is
//! the parameter snapshot.

pub mod gobbler;
pub mod m3m3;
pub mod pumpfun;
pub mod ripper;
pub mod snapper;

/// Elapsed periods since entry, floored at zero.
///
/// Every time-held-dependent component in every model goes through this clamp;
/// an entry time in the future contributes exactly nothing, never a negative
/// accrual.
pub fn time_held(entry_time: f64, t: f64) -> f64 {
    (t - entry_time).max(0.0)
}
