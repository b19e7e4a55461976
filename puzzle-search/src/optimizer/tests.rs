//! Tests for the optimizer engines.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Each round pick reward 2 or reward 5; the state is rounds remaining.
struct TwoChoices;

impl DecisionProblem for TwoChoices {
    type State = u8;

    fn is_terminal(&self, rounds_left: &u8) -> bool {
        *rounds_left == 0
    }

    fn moves(&self, rounds_left: &u8) -> Vec<(u8, u64)> {
        vec![(rounds_left - 1, 2), (rounds_left - 1, 5)]
    }

    fn best_case(&self, rounds_left: &u8) -> u64 {
        5 * u64::from(*rounds_left)
    }
}

#[test]
fn two_choices_budget_three_always_picks_five() {
    let mut memo = HashMapMemo::new();
    assert_eq!(maximize(&TwoChoices, 3, &mut memo), 15);
}

#[test]
fn two_choices_same_answer_without_memo() {
    let mut memo = NoMemo::new();
    assert_eq!(maximize(&TwoChoices, 3, &mut memo), 15);
}

#[test]
fn terminal_start_is_worth_nothing() {
    let mut memo = HashMapMemo::new();
    assert_eq!(maximize(&TwoChoices, 0, &mut memo), 0);
}

/// Collect coins on a path graph: from node n you may stop (terminal via
/// no moves is not used here; a real "stop" move leads to node 0) or hop
/// to n-1 / n-2 collecting that node's coins. Exercises diamond-shaped
/// revisits so the transposition cache actually collides.
struct CoinHops {
    coins: Vec<u64>,
}

impl DecisionProblem for CoinHops {
    type State = usize;

    fn is_terminal(&self, node: &usize) -> bool {
        *node == 0
    }

    fn moves(&self, node: &usize) -> Vec<(usize, u64)> {
        let mut out = vec![(node - 1, self.coins[node - 1])];
        if *node >= 2 {
            out.push((node - 2, self.coins[node - 2]));
        }
        out
    }

    fn best_case(&self, node: &usize) -> u64 {
        // Sum of all coins below this node: trivially optimistic.
        self.coins[..*node].iter().sum()
    }
}

#[test]
fn coin_hops_takes_the_richer_route() {
    // Coins at nodes 0..5. From 5, hopping 5->4->3->2->1->0 collects
    // everything; any 2-hop skips a node, so the optimum walks every
    // step.
    let problem = CoinHops {
        coins: vec![7, 1, 9, 2, 8],
    };
    let mut memo = HashMapMemo::new();
    assert_eq!(maximize(&problem, 5, &mut memo), 27);
}

#[test]
fn memoized_and_pure_recursion_agree() {
    let problem = CoinHops {
        coins: vec![3, 0, 0, 11, 2, 5, 0, 4],
    };
    let mut with = HashMapMemo::new();
    let mut without = NoMemo::new();
    assert_eq!(
        maximize(&problem, 8, &mut with),
        maximize(&problem, 8, &mut without),
    );
    assert!(!MemoTable::<usize, u64>::is_empty(&with));
}

/// Wrapper that replaces the inner bound with "prune nothing".
struct Unbounded<P>(P);

impl<P: DecisionProblem> DecisionProblem for Unbounded<P> {
    type State = P::State;

    fn is_terminal(&self, state: &Self::State) -> bool {
        self.0.is_terminal(state)
    }

    fn moves(&self, state: &Self::State) -> Vec<(Self::State, u64)> {
        self.0.moves(state)
    }

    fn best_case(&self, _state: &Self::State) -> u64 {
        u64::MAX
    }
}

#[test]
fn disabling_the_bound_never_finds_a_better_answer() {
    let problem = CoinHops {
        coins: vec![1, 6, 2, 2, 9, 3],
    };
    let mut pruned_memo = HashMapMemo::new();
    let mut full_memo = HashMapMemo::new();
    let pruned = maximize(&problem, 6, &mut pruned_memo);
    let full = maximize(&Unbounded(CoinHops { coins: problem.coins.clone() }), 6, &mut full_memo);
    assert_eq!(pruned, full);
}

/// Pay a toll of 4 or 1 per round; minimization mirror of TwoChoices.
struct TwoTolls;

impl DecisionProblem for TwoTolls {
    type State = u8;

    fn is_terminal(&self, rounds_left: &u8) -> bool {
        *rounds_left == 0
    }

    fn moves(&self, rounds_left: &u8) -> Vec<(u8, u64)> {
        vec![(rounds_left - 1, 4), (rounds_left - 1, 1)]
    }

    fn best_case(&self, rounds_left: &u8) -> u64 {
        u64::from(*rounds_left)
    }
}

#[test]
fn minimize_always_pays_the_small_toll() {
    let mut memo = HashMapMemo::new();
    assert_eq!(minimize(&TwoTolls, 4, &mut memo), 4);
}

#[test]
fn minimize_agrees_without_memo() {
    let mut memo = NoMemo::new();
    assert_eq!(minimize(&TwoTolls, 4, &mut memo), 4);
}

// =============================================================================
// Recurrence engine
// =============================================================================

/// Ways to tile a 2 x n strip with dominoes: t(n) = t(n-1) + t(n-2).
struct DominoTilings;

impl Recurrence for DominoTilings {
    type Index = usize;
    type Value = u64;

    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn combine(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { 1 } else { deps[0] + deps[1] }
    }
}

#[test]
fn domino_tilings_known_values() {
    let cache = RecurrenceCache::new(DominoTilings, HashMapMemo::new());
    assert_eq!(cache.get(&0), 1);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 2);
    assert_eq!(cache.get(&10), 89);
}

#[test]
fn recurrence_values_computed_once() {
    struct Counted {
        calls: Rc<Cell<u32>>,
    }

    impl Recurrence for Counted {
        type Index = usize;
        type Value = u64;

        fn deps(&self, n: &usize) -> Vec<usize> {
            if *n == 0 { vec![] } else { vec![n - 1] }
        }

        fn combine(&self, _n: &usize, deps: Vec<u64>) -> u64 {
            self.calls.set(self.calls.get() + 1);
            deps.first().map_or(1, |d| d + 1)
        }
    }

    let calls = Rc::new(Cell::new(0));
    let cache = RecurrenceCache::new(Counted { calls: calls.clone() }, HashMapMemo::new());
    assert_eq!(cache.get(&5), 6);
    assert_eq!(calls.get(), 6);
    // A second query resolves entirely from the table.
    assert_eq!(cache.get(&5), 6);
    assert_eq!(calls.get(), 6);
    assert_eq!(cache.recorded(), 6);
}

#[test]
fn recurrence_matches_pure_recursion() {
    let cached = RecurrenceCache::new(DominoTilings, HashMapMemo::new());
    let uncached = RecurrenceCache::new(DominoTilings, NoMemo::new());
    for n in 0..=15usize {
        assert_eq!(cached.get(&n), uncached.get(&n), "mismatch at n={}", n);
    }
    assert_eq!(uncached.recorded(), 0);
}

// =============================================================================
// Memo tables
// =============================================================================

#[test]
fn hashmap_memo_store_and_lookup() {
    let mut memo: HashMapMemo<(u8, u8), u64> = HashMapMemo::new();
    assert_eq!(memo.lookup(&(1, 2)), None);
    memo.store((1, 2), 42);
    assert_eq!(memo.lookup(&(1, 2)), Some(42));
    assert_eq!(memo.lookup(&(2, 1)), None);
    assert_eq!(memo.len(), 1);
}

#[test]
fn no_memo_retains_nothing() {
    let mut memo = NoMemo::new();
    MemoTable::<u8, u64>::store(&mut memo, 1, 99);
    assert_eq!(MemoTable::<u8, u64>::lookup(&memo, &1), None);
    assert_eq!(MemoTable::<u8, u64>::len(&memo), 0);
}
