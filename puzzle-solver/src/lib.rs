//! Puzzle Solver Framework
//!
//! A type-safe framework for daily-puzzle solvers across multiple years
//! and days. Each puzzle implements a parser and a solver over shared
//! data, registers itself as a plugin, and is driven through a
//! (year, day)-keyed registry.
//!
//! # Overview
//!
//! - [`PuzzleParser`] / [`Solver`]: parsing and per-part solving over a
//!   shared data structure (parts may reuse each other's intermediate
//!   results)
//! - [`SolverInstance`] / [`DynSolver`]: one parsed puzzle with type
//!   erasure and parse/solve timing
//! - [`RegistryBuilder`] / [`SolverRegistry`]: immutable lookup from
//!   year/day to solver factories, fed manually or from
//!   [`SolverPlugin`] records collected through `inventory`
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
//!
//! struct Sums;
//!
//! impl PuzzleParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Sums {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Sums>(2022, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! Solution crates register themselves with an `inventory::submit!`
//! block (see [`SolverPlugin`]); the binary then builds the registry with
//! [`RegistryBuilder::register_all_plugins`] or filters plugins by tag
//! with [`RegistryBuilder::register_plugins_where`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, PartReport, SolverInstance};
pub use registry::{
    PuzzleInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    DAYS_PER_YEAR, FIRST_YEAR, YEAR_SPAN,
};
pub use solver::{PuzzleParser, Solver, SolverExt};

// Re-export inventory so solution crates can submit plugin records
// without naming the crate themselves.
pub use inventory;
