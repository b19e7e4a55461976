//! Memoized Recursive Optimizer
//!
//! Explores a decision tree — buy a robot or wait, open a valve or move
//! on, split a stone or multiply it — and returns the optimal objective
//! value, with a transposition cache keyed by the complete state.
//!
//! # Engines
//!
//! - [`maximize`] / [`minimize`]: depth-first branch-and-bound over a
//!   [`DecisionProblem`], pruned by an optimistic `best_case` bound
//!   against the best complete solution found so far.
//! - [`RecurrenceCache`]: lazy evaluation of a [`Recurrence`] over a DAG,
//!   for counting/combining objectives with no pruning.
//!
//! # Cache injection
//!
//! Every invocation takes its [`MemoTable`] explicitly: [`HashMapMemo`]
//! for real runs, [`NoMemo`] to degrade to pure recursion. The two must
//! agree on every result — memoization is a performance lever, never a
//! semantic one — and the property suite checks exactly that.
//!
//! # Warning: cycle behavior
//!
//! Neither engine detects cycles. States must make progress towards a
//! terminal configuration (a shrinking time or resource budget); a cyclic
//! transition recurses without bound.
//!
//! # Example
//!
//! ```
//! use puzzle_search::optimizer::{maximize, DecisionProblem, HashMapMemo};
//!
//! /// Each round, pick reward 2 or reward 5, until the budget runs out.
//! struct TwoChoices;
//!
//! impl DecisionProblem for TwoChoices {
//!     type State = u8;
//!
//!     fn is_terminal(&self, rounds_left: &u8) -> bool {
//!         *rounds_left == 0
//!     }
//!
//!     fn moves(&self, rounds_left: &u8) -> Vec<(u8, u64)> {
//!         vec![(rounds_left - 1, 2), (rounds_left - 1, 5)]
//!     }
//!
//!     fn best_case(&self, rounds_left: &u8) -> u64 {
//!         5 * u64::from(*rounds_left)
//!     }
//! }
//!
//! let mut memo = HashMapMemo::new();
//! assert_eq!(maximize(&TwoChoices, 3, &mut memo), 15);
//! ```

mod decision;
mod memo;
mod recurrence;

pub use decision::{maximize, minimize, DecisionProblem};
pub use memo::{HashMapMemo, MemoTable, NoMemo};
pub use recurrence::{Recurrence, RecurrenceCache};

#[cfg(test)]
mod tests;
