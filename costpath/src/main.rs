//! Least-cost path finder for text cost maps.
//!
//! Run: cargo run --bin costpath -- --map map.txt

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use costpath_lib::{Args, Outcome, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let color = !args.plain && !args.json && io::stdout().is_terminal();
    let mut input = io::stdin().lock();
    let mut prompt_output = io::stderr().lock();
    let mut output = io::stdout().lock();

    match run(&args, color, &mut input, &mut prompt_output, &mut output) {
        Ok(Outcome::Found(_)) => ExitCode::SUCCESS,
        Ok(Outcome::NoPath) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
