// Benchmark Report Types — structured JSON output for independent analysis

use serde::Serialize;

// ─── Statistics ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        Self {
            mean,
            std_dev: variance.sqrt(),
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Per-Scenario Result ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub label: String,
    pub category: String,
    pub passed: bool,
    pub points: usize,
    pub max_discrepancy: f64,
    pub elapsed_ms: f64,
    pub violations: Vec<String>,
}

// ─── Sweep Result ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub runs: usize,
    pub failures: usize,
    pub discrepancy: Stats,
    pub sample_violations: Vec<String>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub summary: Summary,
    pub scenarios: Vec<ScenarioReport>,
    pub sweep: Option<SweepReport>,
}
