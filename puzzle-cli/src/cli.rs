//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Run one puzzle solver against an input file.
///
/// Positional arguments only: the year/day pair selects the solver, the
/// path supplies its input.
#[derive(Parser, Debug)]
#[command(name = "solve", about = "Solve a daily puzzle", version)]
pub struct Args {
    /// Puzzle year
    #[arg(value_parser = clap::value_parser!(u16).range(2015..=2034))]
    pub year: u16,

    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Path to the puzzle input file
    pub input: PathBuf,
}
