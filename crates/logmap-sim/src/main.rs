use std::error::Error;

use clap::{Parser, Subcommand};
use commands::bench::{self, BenchArgs};
use commands::sweep::{self, SweepArgs};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "logmap-sim", about = "Logistic map sweep CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run both sweep paths and persist their tables and a manifest.
    Sweep(SweepArgs),
    /// Time both paths over identical inputs and check output equivalence.
    Bench(BenchArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sweep(args) => sweep::run(&args),
        Command::Bench(args) => bench::run(&args),
    }
}
