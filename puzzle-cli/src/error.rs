//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Anything that can abort a `solve` run.
///
/// Every variant reaches the user as a single stderr diagnostic followed
/// by a non-zero exit; no partial answers are printed first.
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be read
    #[error("cannot read input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the registry from plugins failed
    #[error("registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// No solver for the requested puzzle, or parsing failed
    #[error(transparent)]
    Solver(#[from] puzzle_solver::SolverError),

    /// A part failed to solve (infeasible search, out-of-range part)
    #[error(transparent)]
    Solve(#[from] puzzle_solver::SolveError),
}
