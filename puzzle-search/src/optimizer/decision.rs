//! Branch-and-bound evaluation of a decision tree.

use std::hash::Hash;

use super::memo::MemoTable;

/// A decision tree to be optimized.
///
/// States must form a DAG: every move must make progress towards a
/// terminal state (a shrinking time or resource budget is the usual
/// guarantee). The engines do not detect cycles.
pub trait DecisionProblem {
    /// One complete, hashable configuration; the transposition key.
    ///
    /// Keep it canonical so that revisits actually collide — an
    /// order-independent set of opened valves, not the sequence they
    /// were opened in.
    type State: Clone + Eq + Hash;

    /// True exactly at terminal configurations (budget exhausted).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Legal moves as `(successor, immediate value delta)` pairs,
    /// including any applicable "wait"/"do nothing" move. A state with no
    /// moves is treated as terminal.
    fn moves(&self, state: &Self::State) -> Vec<(Self::State, u64)>;

    /// Optimistic estimate of the value still obtainable from `state`.
    ///
    /// For [`maximize`] this must never be below what is truly
    /// achievable; for [`minimize`] never above. A bound that is tighter
    /// than the truth makes pruning unsound. `u64::MAX` (for maximize) or
    /// `0` (for minimize) disables pruning entirely.
    fn best_case(&self, state: &Self::State) -> u64;
}

/// Maximum total value accumulated along any root-to-terminal path.
///
/// Depth-first evaluation with a transposition cache keyed by the full
/// state. Before recursing into a move, the engine checks whether the
/// accumulated value plus the move's reward plus the successor's
/// best-case bound can still beat the best complete solution found so
/// far; if not, the branch is abandoned. Only subtrees evaluated without
/// any such cut are memoized, so the cache holds exact values only.
pub fn maximize<P, M>(problem: &P, start: P::State, memo: &mut M) -> u64
where
    P: DecisionProblem,
    M: MemoTable<P::State, u64>,
{
    let mut incumbent = 0u64;
    evaluate_max(problem, &start, 0, &mut incumbent, memo);
    incumbent
}

/// Returns `(subtree value, whether the value is exact)`.
fn evaluate_max<P, M>(
    problem: &P,
    state: &P::State,
    accumulated: u64,
    incumbent: &mut u64,
    memo: &mut M,
) -> (u64, bool)
where
    P: DecisionProblem,
    M: MemoTable<P::State, u64>,
{
    if problem.is_terminal(state) {
        *incumbent = (*incumbent).max(accumulated);
        return (0, true);
    }
    if let Some(value) = memo.lookup(state) {
        *incumbent = (*incumbent).max(accumulated.saturating_add(value));
        return (value, true);
    }
    let moves = problem.moves(state);
    if moves.is_empty() {
        *incumbent = (*incumbent).max(accumulated);
        return (0, true);
    }

    let mut value = 0u64;
    let mut exact = true;
    for (next, reward) in moves {
        let next_accumulated = accumulated.saturating_add(reward);
        if next_accumulated.saturating_add(problem.best_case(&next)) <= *incumbent {
            // Even the rosiest outcome of this branch cannot beat the
            // incumbent.
            exact = false;
            continue;
        }
        let (sub, sub_exact) = evaluate_max(problem, &next, next_accumulated, incumbent, memo);
        value = value.max(reward.saturating_add(sub));
        exact &= sub_exact;
    }
    if exact {
        memo.store(state.clone(), value);
    }
    (value, exact)
}

/// Minimum total value accumulated along any root-to-terminal path.
///
/// Mirror image of [`maximize`]; `best_case` must be an optimistic
/// (never overestimating) lower bound on the remaining cost.
pub fn minimize<P, M>(problem: &P, start: P::State, memo: &mut M) -> u64
where
    P: DecisionProblem,
    M: MemoTable<P::State, u64>,
{
    let mut incumbent = u64::MAX;
    evaluate_min(problem, &start, 0, &mut incumbent, memo);
    incumbent
}

fn evaluate_min<P, M>(
    problem: &P,
    state: &P::State,
    accumulated: u64,
    incumbent: &mut u64,
    memo: &mut M,
) -> (u64, bool)
where
    P: DecisionProblem,
    M: MemoTable<P::State, u64>,
{
    if problem.is_terminal(state) {
        *incumbent = (*incumbent).min(accumulated);
        return (0, true);
    }
    if let Some(value) = memo.lookup(state) {
        *incumbent = (*incumbent).min(accumulated.saturating_add(value));
        return (value, true);
    }
    let moves = problem.moves(state);
    if moves.is_empty() {
        *incumbent = (*incumbent).min(accumulated);
        return (0, true);
    }

    let mut value = u64::MAX;
    let mut exact = true;
    for (next, cost) in moves {
        let next_accumulated = accumulated.saturating_add(cost);
        if *incumbent != u64::MAX
            && next_accumulated.saturating_add(problem.best_case(&next)) >= *incumbent
        {
            exact = false;
            continue;
        }
        let (sub, sub_exact) = evaluate_min(problem, &next, next_accumulated, incumbent, memo);
        value = value.min(cost.saturating_add(sub));
        exact &= sub_exact;
    }
    if exact {
        memo.store(state.clone(), value);
    }
    (value, exact)
}
