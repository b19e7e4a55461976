//! Solver instance with type erasure and timing

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};

/// Answer for one part, with solve timing.
#[derive(Debug, Clone)]
pub struct PartReport {
    /// The printable answer
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl PartReport {
    /// Solve duration for this part
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// One parsed puzzle, ready to answer its parts.
///
/// Owns the shared data produced by the solver's parser together with the
/// parse timestamps.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and build an instance, recording parse timing.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface over any solver instance.
///
/// Lets the registry and the CLI drive solvers of different concrete
/// types uniformly.
pub trait DynSolver {
    /// Solve one part (range-checked) with timing
    fn solve(&mut self, part: u8) -> Result<PartReport, SolveError>;

    /// Year of the puzzle this instance solves
    fn year(&self) -> u16;

    /// Day of the puzzle this instance solves
    fn day(&self) -> u8;

    /// Number of parts the underlying solver implements
    fn parts(&self) -> u8;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing completed (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Convenience: parse duration
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<PartReport, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(PartReport {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
