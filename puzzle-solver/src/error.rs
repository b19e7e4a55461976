//! Error types for the solver framework

use thiserror::Error;

/// Error type for parsing puzzle input.
///
/// Malformed input must fail loudly: a parser that cannot honor one of
/// its assumptions aborts the run instead of letting a search produce a
/// silently wrong answer.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or record did not match the expected shape
    #[error("invalid input: {0}")]
    InvalidFormat(String),
    /// The input ended before a required record appeared
    #[error("missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is outside `1..=PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search space holds no solution (unreachable goal, exhausted
    /// budget); reportable, never a panic
    #[error("no solution: {0}")]
    NoSolution(String),
    /// Any other failure while solving
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for this year/day
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    /// Year/day outside the supported range
    #[error("{0}/{1:02} is outside the supported puzzle range")]
    UnsupportedDate(u16, u8),
    /// Parsing the input failed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claimed the same year/day
    #[error("duplicate solver registration for {0}/{1:02}")]
    Duplicate(u16, u8),
    /// Year/day outside the supported range
    #[error("{0}/{1:02} is outside the supported puzzle range")]
    UnsupportedDate(u16, u8),
}
