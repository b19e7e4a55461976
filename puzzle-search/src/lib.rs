//! Puzzle Search Toolkit
//!
//! Bounded-state-space graph search with pruning and memoization — the
//! one engineering pattern the harder daily puzzles keep reinventing,
//! consolidated into three independent engines:
//!
//! - [`shortest_path`]: uninformed search (BFS for uniform costs,
//!   Dijkstra otherwise) producing a distance table or a single minimum
//!   cost to a goal.
//! - [`best_first`]: informed A* search over `g + h` with an admissible
//!   heuristic, deterministic tie-breaking and pruning against the best
//!   complete solution found so far.
//! - [`optimizer`]: memoized recursive optimization of a decision tree,
//!   with an injectable transposition cache and optimistic branch
//!   bounding, plus lazy DAG recurrences for counting objectives.
//!
//! The engines are peers: none calls another, and a puzzle picks one per
//! question. Each run owns its frontier, distance table and cache
//! exclusively; everything is created at search start and dropped at
//! search end. All engines are single-threaded and perform no I/O — a
//! puzzle-specific parser builds the state space, the engine returns a
//! scalar, a driver prints it.
//!
//! # Quick Example
//!
//! ```
//! use puzzle_search::shortest_path::bfs_steps_to;
//! use puzzle_search::StateGraph;
//!
//! /// Corridor of cells 0..n; each move steps one cell either way.
//! struct Corridor(u32);
//!
//! impl StateGraph for Corridor {
//!     type State = u32;
//!
//!     fn neighbors(&self, pos: &u32) -> Vec<u32> {
//!         let mut out = Vec::new();
//!         if *pos > 0 {
//!             out.push(pos - 1);
//!         }
//!         if *pos + 1 < self.0 {
//!             out.push(pos + 1);
//!         }
//!         out
//!     }
//! }
//!
//! let steps = bfs_steps_to(&Corridor(10), [0], |&pos| pos == 9).unwrap();
//! assert_eq!(steps, 9);
//! ```
//!
//! # Key Concepts
//!
//! A **state** is an opaque, hashable, immutable value encoding one
//! complete configuration; see [`StateGraph`], [`WeightedGraph`] and
//! [`InformedGraph`] for the capability each engine needs. Transitions
//! must be Markov: anything history-dependent (elapsed time against a
//! periodic hazard, a forbidden immediate backtrack) is encoded by
//! deliberately widening the state. Heuristics and best-case bounds must
//! be admissible — never overestimating remaining cost, never
//! underestimating achievable remaining reward — or pruning silently
//! returns suboptimal answers; the engines assert their internal
//! invariants so a broken heuristic fails tests instead.

pub mod arith;
pub mod best_first;
mod error;
pub mod optimizer;
mod problem;
pub mod shortest_path;

pub use error::SearchError;
pub use problem::{Cost, InformedGraph, StateGraph, WeightedGraph};
