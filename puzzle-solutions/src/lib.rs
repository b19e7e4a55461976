//! Daily puzzle solutions with automatic registration
//!
//! One module per puzzle, organized by year. Each solution implements
//! [`puzzle_solver::PuzzleParser`] and [`puzzle_solver::Solver`] and
//! submits a [`puzzle_solver::SolverPlugin`] record, so linking this
//! crate is enough to make every solver available to the registry.
//!
//! The harder puzzles delegate their search to the `puzzle-search`
//! engines; parsing and answer formatting stay here.

pub mod puzzles;
