//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data.
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing and solving concerns separate. The shared data may own its
/// contents (`Vec<T>`, a custom struct) or borrow from the input
/// (`&'a str`) for zero-copy parsing.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct Calibration;
///
/// impl PuzzleParser for Calibration {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("bad integer: {line}")))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// Parsed input plus any intermediate results shared between parts.
    type SharedData<'a>;

    /// Parse the raw input text into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait every puzzle solver implements.
///
/// A solver handles one specific year/day puzzle and answers its parts in
/// order. Parts share mutable access to the parsed data, so work computed
/// for part 1 can be reused by part 2.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Calibration;
///
/// impl PuzzleParser for Calibration {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("bad integer: {line}")))
///             })
///             .collect()
///     }
/// }
///
/// impl Solver for Calibration {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part, returning its printable answer
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by the framework.
pub trait SolverExt: Solver {
    /// Solve `part` after validating it against [`Solver::PARTS`].
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
