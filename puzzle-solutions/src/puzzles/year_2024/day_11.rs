//! 2024 day 11: counting stones after repeated blinks.
//!
//! Simulating the stone line directly explodes combinatorially, but the
//! count after N blinks splits per stone: count(line, N) is the sum of
//! count(stone, N) over the line. That makes (stone, blinks-left) a DAG
//! recurrence evaluated lazily with a transposition table.

use anyhow::Context;
use puzzle_search::optimizer::{HashMapMemo, Recurrence, RecurrenceCache};
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};

#[derive(Debug)]
pub struct StoneLine;

inventory::submit! {
    SolverPlugin {
        year: 2024,
        day: 11,
        solver: &StoneLine,
        tags: &["2024", "memo", "counting"],
    }
}

/// One blink applied to a single stone.
fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let split = 10u64.pow(digits / 2);
        vec![stone / split, stone % split]
    } else {
        vec![stone * 2024]
    }
}

/// Recurrence over (stone, blinks left) counting the stones each one
/// becomes.
struct StoneCount;

impl Recurrence for StoneCount {
    type Index = (u64, u8);
    type Value = u64;

    fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
        if blinks == 0 {
            vec![]
        } else {
            blink(stone).into_iter().map(|s| (s, blinks - 1)).collect()
        }
    }

    fn combine(&self, _index: &(u64, u8), deps: Vec<u64>) -> u64 {
        if deps.is_empty() {
            1
        } else {
            deps.into_iter().sum()
        }
    }
}

fn stones_after(initial: &[u64], blinks: u8) -> u64 {
    let cache = RecurrenceCache::new(StoneCount, HashMapMemo::new());
    initial.iter().map(|&stone| cache.get(&(stone, blinks))).sum()
}

#[derive(Debug)]
pub struct SharedData {
    stones: Vec<u64>,
}

impl PuzzleParser for StoneLine {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .with_context(|| format!("bad stone {token:?}"))
                    .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones in input".to_string()));
        }
        Ok(SharedData { stones })
    }
}

impl Solver for StoneLine {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(stones_after(&shared.stones, 25).to_string()),
            2 => Ok(stones_after(&shared.stones, 75).to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
