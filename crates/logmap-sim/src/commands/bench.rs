use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use logmap_core::parameter_space;
use logmap_sweep::{BenchmarkHarness, OptimizedComputer, ReferenceComputer, DEFAULT_TOLERANCE};

use super::load_config;

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// YAML configuration overriding the default operating point.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Optional output directory for `benchmark_report.json`.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Relative tolerance for the equivalence check.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

pub fn run(args: &BenchArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let r_values = parameter_space(config.r_min, config.r_max, config.samples)?;

    let harness = BenchmarkHarness::with_tolerance(args.tolerance);
    let report = harness.run(&ReferenceComputer, &OptimizedComputer, &r_values, &config)?;

    for timing in [&report.reference, &report.optimized] {
        println!(
            "{}: {:.3} ms (bifurcation {:.3} ms, lyapunov {:.3} ms)",
            timing.label,
            timing.total_ms(),
            timing.bifurcation_ms,
            timing.lyapunov_ms
        );
    }
    println!("speedup: {:.2}x", report.speedup);

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(out.join("benchmark_report.json"), json)?;
    }

    // Timing above is informational; a failed equivalence check is a
    // correctness defect and aborts with a Bench-family error.
    report.ensure_equivalent()?;
    println!(
        "equivalence: max relative error {:e} (bifurcation) / {:e} (lyapunov) within {:e}",
        report.equivalence.bifurcation.max_relative_error,
        report.equivalence.lyapunov.max_relative_error,
        report.equivalence.tolerance
    );
    Ok(())
}
