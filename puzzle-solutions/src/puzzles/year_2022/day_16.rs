//! 2022 day 16: releasing pressure from a valve network.
//!
//! Both parts run the branch-and-bound maximizer over a decision tree of
//! "open the valve here, or walk on". The transposition key is the full
//! (position, opened-set, minutes-left) state with the opened valves as
//! an order-independent bitmask, so routes that interleave the same
//! openings differently collide in the cache.
//!
//! Part 2 searches the joint state of both agents at once — each round
//! enumerates you-open/elephant-walks, elephant-opens/you-walk,
//! both-open and both-walk — rather than two independent single-agent
//! searches, because the agents share the opened set.

use std::collections::HashMap;

use anyhow::{anyhow, Context};
use itertools::Itertools;
use puzzle_search::optimizer::{maximize, DecisionProblem, HashMapMemo};
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};
use regex::Regex;

#[derive(Debug)]
pub struct PressureRelease;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 16,
        solver: &PressureRelease,
        tags: &["2022", "memo", "dual-agent"],
    }
}

#[derive(Debug)]
pub struct Volcano {
    rates: Vec<u64>,
    tunnels: Vec<Vec<u8>>,
    start: u8,
    /// Bitmask of the valves worth opening (positive flow rate).
    openable: u64,
}

impl Volcano {
    /// Upper bound on the pressure still obtainable: every closed valve
    /// of interest opens one minute from now.
    fn remaining_potential(&self, opened: u64, time_left: u8) -> u64 {
        if time_left < 2 {
            return 0;
        }
        let closed = self.openable & !opened;
        let rate_sum: u64 = (0..self.rates.len())
            .filter(|&i| closed & (1 << i) != 0)
            .map(|i| self.rates[i])
            .sum();
        rate_sum * u64::from(time_left - 1)
    }
}

/// Single-agent decision tree: state is (valve, opened, minutes left).
struct SoloRelease<'a> {
    volcano: &'a Volcano,
}

impl DecisionProblem for SoloRelease<'_> {
    type State = (u8, u64, u8);

    fn is_terminal(&self, &(_, opened, time_left): &Self::State) -> bool {
        time_left == 0 || opened == self.volcano.openable
    }

    fn moves(&self, &(at, opened, time_left): &Self::State) -> Vec<(Self::State, u64)> {
        let v = self.volcano;
        let bit = 1u64 << at;
        let mut out = Vec::new();
        // Open this valve (one minute), then walk on (another): the valve
        // releases for the remaining time_left - 1 minutes. Zero-rate
        // valves are never worth the minute.
        if time_left >= 2 && v.rates[at as usize] > 0 && opened & bit == 0 {
            let reward = v.rates[at as usize] * u64::from(time_left - 1);
            for &next in &v.tunnels[at as usize] {
                out.push(((next, opened | bit, time_left - 2), reward));
            }
        }
        // Walk on without opening.
        for &next in &v.tunnels[at as usize] {
            out.push(((next, opened, time_left - 1), 0));
        }
        out
    }

    fn best_case(&self, &(_, opened, time_left): &Self::State) -> u64 {
        self.volcano.remaining_potential(opened, time_left)
    }
}

/// Dual-agent decision tree: state is (agent, agent, opened, minutes
/// left) with the agent positions kept sorted — the agents are
/// interchangeable, so the sorted pair is the canonical key.
struct PairedRelease<'a> {
    volcano: &'a Volcano,
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}

impl DecisionProblem for PairedRelease<'_> {
    type State = (u8, u8, u64, u8);

    fn is_terminal(&self, &(_, _, opened, time_left): &Self::State) -> bool {
        time_left == 0 || opened == self.volcano.openable
    }

    fn moves(&self, &(a, b, opened, time_left): &Self::State) -> Vec<(Self::State, u64)> {
        let v = self.volcano;
        let (bit_a, bit_b) = (1u64 << a, 1u64 << b);
        let a_opens = time_left >= 2 && v.rates[a as usize] > 0 && opened & bit_a == 0;
        let b_opens = time_left >= 2 && v.rates[b as usize] > 0 && opened & bit_b == 0 && b != a;
        let mut out = Vec::new();

        // One agent spends the minute opening while the other walks.
        if a_opens {
            let reward = v.rates[a as usize] * u64::from(time_left - 1);
            for &next_b in &v.tunnels[b as usize] {
                let (na, nb) = ordered(a, next_b);
                out.push(((na, nb, opened | bit_a, time_left - 1), reward));
            }
        }
        if b_opens {
            let reward = v.rates[b as usize] * u64::from(time_left - 1);
            for &next_a in &v.tunnels[a as usize] {
                let (na, nb) = ordered(next_a, b);
                out.push(((na, nb, opened | bit_b, time_left - 1), reward));
            }
        }
        // Both open (necessarily different valves), then both walk.
        if a_opens && b_opens {
            let reward = (v.rates[a as usize] + v.rates[b as usize]) * u64::from(time_left - 1);
            for (&next_a, &next_b) in v.tunnels[a as usize]
                .iter()
                .cartesian_product(&v.tunnels[b as usize])
            {
                let (na, nb) = ordered(next_a, next_b);
                out.push(((na, nb, opened | bit_a | bit_b, time_left - 2), reward));
            }
        }
        // Neither opens; both walk.
        for (&next_a, &next_b) in v.tunnels[a as usize]
            .iter()
            .cartesian_product(&v.tunnels[b as usize])
        {
            let (na, nb) = ordered(next_a, next_b);
            out.push(((na, nb, opened, time_left - 1), 0));
        }
        out
    }

    fn best_case(&self, &(_, _, opened, time_left): &Self::State) -> u64 {
        self.volcano.remaining_potential(opened, time_left)
    }
}

#[derive(Debug)]
pub struct SharedData {
    volcano: Volcano,
}

impl PuzzleParser for PressureRelease {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let number = Regex::new(r"[0-9]+").map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let valve_name =
            Regex::new(r"[A-Z]{2}").map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let records: Vec<(&str, u64, Vec<&str>)> = input
            .trim()
            .lines()
            .map(|line| -> Result<(&str, u64, Vec<&str>), anyhow::Error> {
                let rate = number
                    .find(line)
                    .ok_or_else(|| anyhow!("no flow rate"))?
                    .as_str()
                    .parse::<u64>()
                    .context("flow rate out of range")?;
                let mut names = valve_name.find_iter(line).map(|m| m.as_str());
                let name = names.next().ok_or_else(|| anyhow!("no valve name"))?;
                let tunnels: Vec<&str> = names.collect();
                if tunnels.is_empty() {
                    return Err(anyhow!("valve {name} leads nowhere"));
                }
                Ok((name, rate, tunnels))
            })
            .enumerate()
            .map(|(line_idx, record)| {
                record.map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect::<Result<_, _>>()?;

        if records.len() > 64 {
            return Err(ParseError::InvalidFormat(format!(
                "{} valves exceed the supported 64",
                records.len()
            )));
        }

        let index: HashMap<&str, u8> = records
            .iter()
            .enumerate()
            .map(|(i, (name, _, _))| (*name, i as u8))
            .collect();
        let start = *index
            .get("AA")
            .ok_or_else(|| ParseError::MissingData("no valve AA to start from".to_string()))?;

        let mut rates = Vec::with_capacity(records.len());
        let mut tunnels = Vec::with_capacity(records.len());
        let mut openable = 0u64;
        for (i, (name, rate, outgoing)) in records.iter().enumerate() {
            rates.push(*rate);
            if *rate > 0 {
                openable |= 1 << i;
            }
            let resolved = outgoing
                .iter()
                .map(|t| {
                    index.get(t).copied().ok_or_else(|| {
                        ParseError::InvalidFormat(format!("valve {name} leads to unknown {t}"))
                    })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            tunnels.push(resolved);
        }

        Ok(SharedData {
            volcano: Volcano {
                rates,
                tunnels,
                start,
                openable,
            },
        })
    }
}

impl Solver for PressureRelease {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let volcano = &shared.volcano;
        match part {
            1 => {
                let problem = SoloRelease { volcano };
                let best = maximize(&problem, (volcano.start, 0, 30), &mut HashMapMemo::new());
                Ok(best.to_string())
            }
            2 => {
                let problem = PairedRelease { volcano };
                let start = (volcano.start, volcano.start, 0, 26);
                let best = maximize(&problem, start, &mut HashMapMemo::new());
                Ok(best.to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
