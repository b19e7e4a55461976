//! solve - run one puzzle against an input file
//!
//! Usage: `solve <YEAR> <DAY> <INPUT_FILE>`. Prints exactly one
//! `Part N: <answer>` line per implemented part, or a diagnostic on
//! stderr and a non-zero exit.

mod cli;
mod error;

// Import the solutions crate so its solver plugins are linked in.
use puzzle_solutions as _;

use std::fs;

use clap::Parser;
use puzzle_solver::RegistryBuilder;

use cli::Args;
use error::CliError;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    let input = fs::read_to_string(&args.input).map_err(|source| CliError::Input {
        path: args.input.clone(),
        source,
    })?;

    let mut solver = registry.create_solver(args.year, args.day, &input)?;

    // Solve every part before printing anything: a failure half-way
    // through must not leave partial output behind.
    let mut answers = Vec::new();
    for part in 1..=solver.parts() {
        answers.push(solver.solve(part)?.answer);
    }

    for (idx, answer) in answers.iter().enumerate() {
        println!("Part {}: {}", idx + 1, answer);
    }

    Ok(())
}
