//! 2022 day 19: maximizing geodes from robot blueprints.
//!
//! One branch-and-bound run per blueprint. A geode robot built with `t`
//! minutes on the clock cracks `t - 1` geodes over its lifetime, so the
//! payout is booked as an immediate reward at the moment of building and
//! the state never needs to carry geode counts — only the clock, the
//! three resource stocks and the three resource-robot counts.

use anyhow::{anyhow, Context};
use puzzle_search::optimizer::{maximize, DecisionProblem, HashMapMemo};
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};
use regex::Regex;

#[derive(Debug)]
pub struct RobotFactory;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 19,
        solver: &RobotFactory,
        tags: &["2022", "branch-and-bound"],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    ore_robot_ore: u16,
    clay_robot_ore: u16,
    obsidian_robot_ore: u16,
    obsidian_robot_clay: u16,
    geode_robot_ore: u16,
    geode_robot_obsidian: u16,
}

impl Blueprint {
    fn max_ore_cost(&self) -> u16 {
        self.ore_robot_ore
            .max(self.clay_robot_ore)
            .max(self.obsidian_robot_ore)
            .max(self.geode_robot_ore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FactoryState {
    time_left: u8,
    ore: u16,
    clay: u16,
    obsidian: u16,
    ore_robots: u8,
    clay_robots: u8,
    obsidian_robots: u8,
}

impl FactoryState {
    fn fresh(time_left: u8) -> Self {
        Self {
            time_left,
            ore: 0,
            clay: 0,
            obsidian: 0,
            ore_robots: 1,
            clay_robots: 0,
            obsidian_robots: 0,
        }
    }
}

struct GeodeHunt {
    blueprint: Blueprint,
}

impl DecisionProblem for GeodeHunt {
    type State = FactoryState;

    fn is_terminal(&self, state: &FactoryState) -> bool {
        state.time_left == 0
    }

    fn moves(&self, state: &FactoryState) -> Vec<(FactoryState, u64)> {
        let bp = &self.blueprint;

        // Income lands at the end of the minute; builds are paid from the
        // stock available at its start.
        let mut tick = *state;
        tick.time_left -= 1;
        tick.ore += u16::from(state.ore_robots);
        tick.clay += u16::from(state.clay_robots);
        tick.obsidian += u16::from(state.obsidian_robots);

        if state.time_left <= 1 {
            // Nothing built now can produce before the clock runs out.
            return vec![(tick, 0)];
        }

        if state.ore >= bp.geode_robot_ore && state.obsidian >= bp.geode_robot_obsidian {
            // Assumes a geode robot is never worth postponing. That is an
            // input-shape observation, not a theorem, but it holds on the
            // published inputs and collapses the branching.
            let mut built = tick;
            built.ore -= bp.geode_robot_ore;
            built.obsidian -= bp.geode_robot_obsidian;
            return vec![(built, u64::from(state.time_left - 1))];
        }

        let mut out = vec![(tick, 0)];
        // Resource robots beyond the most any single build consumes per
        // minute can never pay off.
        if state.ore >= bp.obsidian_robot_ore
            && state.clay >= bp.obsidian_robot_clay
            && u16::from(state.obsidian_robots) < bp.geode_robot_obsidian
        {
            let mut built = tick;
            built.ore -= bp.obsidian_robot_ore;
            built.clay -= bp.obsidian_robot_clay;
            built.obsidian_robots += 1;
            out.push((built, 0));
        }
        if state.ore >= bp.clay_robot_ore
            && u16::from(state.clay_robots) < bp.obsidian_robot_clay
        {
            let mut built = tick;
            built.ore -= bp.clay_robot_ore;
            built.clay_robots += 1;
            out.push((built, 0));
        }
        if state.ore >= bp.ore_robot_ore && u16::from(state.ore_robots) < bp.max_ore_cost() {
            let mut built = tick;
            built.ore -= bp.ore_robot_ore;
            built.ore_robots += 1;
            out.push((built, 0));
        }
        out
    }

    fn best_case(&self, state: &FactoryState) -> u64 {
        // As if a geode robot were built every remaining minute.
        let t = u64::from(state.time_left);
        t * t.saturating_sub(1) / 2
    }
}

/// Most geodes this blueprint can crack in `minutes`.
fn max_geodes(blueprint: Blueprint, minutes: u8) -> u64 {
    let problem = GeodeHunt { blueprint };
    maximize(&problem, FactoryState::fresh(minutes), &mut HashMapMemo::new())
}

#[derive(Debug)]
pub struct SharedData {
    blueprints: Vec<Blueprint>,
}

impl PuzzleParser for RobotFactory {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let number = Regex::new(r"[0-9]+").map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let blueprints = input
            .trim()
            .lines()
            .map(|line| -> Result<Blueprint, anyhow::Error> {
                let nums: Vec<u16> = number
                    .find_iter(line)
                    .map(|m| m.as_str().parse::<u16>().context("cost out of range"))
                    .collect::<Result<_, _>>()?;
                // Leading id, then the six costs in reading order.
                if nums.len() != 7 {
                    return Err(anyhow!("expected 7 numbers, found {}", nums.len()));
                }
                Ok(Blueprint {
                    ore_robot_ore: nums[1],
                    clay_robot_ore: nums[2],
                    obsidian_robot_ore: nums[3],
                    obsidian_robot_clay: nums[4],
                    geode_robot_ore: nums[5],
                    geode_robot_obsidian: nums[6],
                })
            })
            .enumerate()
            .map(|(line_idx, bp)| {
                bp.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if blueprints.is_empty() {
            return Err(ParseError::MissingData("no blueprints in input".to_string()));
        }
        Ok(SharedData { blueprints })
    }
}

impl Solver for RobotFactory {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let quality: u64 = shared
                    .blueprints
                    .iter()
                    .enumerate()
                    .map(|(i, &bp)| (i as u64 + 1) * max_geodes(bp, 24))
                    .sum();
                Ok(quality.to_string())
            }
            2 => {
                let product: u64 = shared
                    .blueprints
                    .iter()
                    .take(3)
                    .map(|&bp| max_geodes(bp, 32))
                    .product();
                Ok(product.to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
