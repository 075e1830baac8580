// Gauntlet Benchmark Runner — engine invariant validation
// Named scenarios + seedable ChaCha8 parameter sweep, JSON/JSONL artifacts
//
// Usage:
//   cargo run --release --bin bench                     # Scenarios + 500-run sweep
//   cargo run --release --bin bench -- --runs 50        # Quick sweep
//   cargo run --release --bin bench -- HOSTILE          # Filter scenarios by name
//   cargo run --release --bin bench -- --time-series    # Enable JSONL output
//   cargo run --release --bin bench -- --seed 42        # Custom base seed

mod checks;
mod report;
mod scenarios;
mod sweep;
mod time_series;

use report::*;
use scenarios::*;

use gauntlet_engine::simulate;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    time_series: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 500,
        seed: 0,
        time_series: false,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(500);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--time-series" => {
                cli.time_series = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        eprintln!("No scenarios match filter: {:?}", cli.filter);
        std::process::exit(1);
    }

    let ts_dir = if cli.time_series {
        Some(std::path::Path::new("bench-results/time-series").to_path_buf())
    } else {
        None
    };

    println!("\n  Gauntlet Benchmark Runner");
    println!("  PRNG: ChaCha8Rng | Sweep runs: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<28} {:<10} {:>7} {:>14} {:>8}",
        "Scenario", "Category", "Points", "MaxDiscrep", "Time");
    println!("  {}", "-".repeat(72));

    let suite_start = Instant::now();
    let mut scenario_reports = Vec::new();

    for scenario in &to_run {
        let start = Instant::now();
        let params = (scenario.build)();
        let series = simulate(&params);
        let outcome = checks::run_checks(&params, &series);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        if let Some(dir) = &ts_dir {
            let path = dir.join(format!("{}.jsonl", scenario.name.to_lowercase()));
            if let Err(e) = time_series::write_jsonl(&series, &path) {
                eprintln!("  warning: failed to write {}: {}", path.display(), e);
            }
        }

        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        println!("  {:<28} {:<10} {:>7} {:>14.2e} {:>6.1}ms  {}",
            scenario.label,
            scenario.category,
            outcome.points,
            outcome.max_discrepancy,
            elapsed_ms,
            status,
        );
        for v in &outcome.violations {
            println!("      ! {}", v);
        }

        scenario_reports.push(ScenarioReport {
            name: scenario.name.to_string(),
            label: scenario.label.to_string(),
            category: scenario.category.to_string(),
            passed: outcome.passed(),
            points: outcome.points,
            max_discrepancy: outcome.max_discrepancy,
            elapsed_ms,
            violations: outcome.violations,
        });
    }

    // ─── Randomized Sweep ───────────────────────────────────────────────

    let sweep_report = if cli.runs > 0 {
        let outcome = sweep::run_sweep(cli.runs, cli.seed);
        println!("  {}", "-".repeat(72));
        println!("  Sweep: {} runs, {} failed, max discrepancy {:.2e}",
            outcome.runs,
            outcome.failures,
            outcome.discrepancies.iter().cloned().fold(0.0_f64, f64::max),
        );
        for v in &outcome.sample_violations {
            println!("      ! {}", v);
        }
        Some(SweepReport {
            runs: outcome.runs,
            failures: outcome.failures,
            discrepancy: Stats::from_samples(&outcome.discrepancies),
            sample_violations: outcome.sample_violations,
        })
    } else {
        None
    };

    let suite_elapsed = suite_start.elapsed();

    // ─── Summary ────────────────────────────────────────────────────────

    let total = scenario_reports.len();
    let passed = scenario_reports.iter().filter(|r| r.passed).count();
    let failed = total - passed;
    let sweep_failed = sweep_report.as_ref().map(|s| s.failures).unwrap_or(0);

    println!("  {}", "-".repeat(72));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_elapsed.as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis();
    let timestamp = format!("{}", ts);

    let bench_report = BenchReport {
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: if total > 0 { passed as f64 / total as f64 } else { 0.0 },
        },
        scenarios: scenario_reports,
        sweep: sweep_report,
    };

    let dir = std::path::Path::new("bench-results");
    if !dir.exists() {
        std::fs::create_dir_all(dir).expect("Failed to create bench-results/");
    }
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&bench_report).expect("Failed to serialize");
    std::fs::write(&path, &json).expect("Failed to write benchmark file");
    println!("  Results saved to: {}\n", path.display());

    if failed > 0 || sweep_failed > 0 {
        std::process::exit(1);
    }
}
