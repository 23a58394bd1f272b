use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use logmap_core::{parameter_space, OrbitComputer};
use logmap_sweep::{OptimizedComputer, ReferenceComputer, SweepManifest, SweepRecorder};

use super::load_config;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// YAML configuration overriding the default operating point.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for the tables and the manifest.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let config = load_config(args.config.as_deref())?;
    let r_values = parameter_space(config.r_min, config.r_max, config.samples)?;

    let mut manifest = SweepManifest::new(config.clone())?;
    let computers: [&dyn OrbitComputer; 2] = [&ReferenceComputer, &OptimizedComputer];
    for computer in computers {
        let start = Instant::now();
        let recorder = SweepRecorder::collect(computer, &r_values, &config)?;
        let elapsed = start.elapsed().as_secs_f64();
        let summary = recorder.summary();
        println!(
            "{} sweep: {:.3}s, {} bifurcation rows, {} exponents, chaotic fraction {:.3}",
            recorder.label(),
            elapsed,
            summary.bifurcation_rows,
            summary.lyapunov_rows,
            summary.chaotic_fraction
        );
        let paths = recorder.write_tables(&args.out)?;
        manifest.insert_tables(recorder.label(), paths);
    }
    manifest.write(&args.out.join("manifest.json"))?;
    Ok(())
}
