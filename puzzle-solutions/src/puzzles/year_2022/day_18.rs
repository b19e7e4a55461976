//! 2022 day 18: surface area of a lava droplet.
//!
//! Part 1 counts cube faces with no cube behind them. Part 2 flood-fills
//! the air around the droplet (breadth-first, inside a one-cell margin
//! around the bounding box) and counts only faces touching that exterior
//! air, excluding trapped pockets.

use std::collections::HashSet;

use anyhow::{anyhow, Context};
use puzzle_search::shortest_path::bfs_distances;
use puzzle_search::StateGraph;
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};

#[derive(Debug)]
pub struct LavaDroplet;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 18,
        solver: &LavaDroplet,
        tags: &["2022", "bfs", "flood-fill"],
    }
}

type Cube = (i32, i32, i32);

const FACES: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

fn adjacent((x, y, z): Cube) -> impl Iterator<Item = Cube> {
    FACES.iter().map(move |(dx, dy, dz)| (x + dx, y + dy, z + dz))
}

#[derive(Debug)]
pub struct SharedData {
    cubes: HashSet<Cube>,
}

/// Air cells inside the margin around the droplet's bounding box.
struct ExteriorAir<'a> {
    cubes: &'a HashSet<Cube>,
    lo: Cube,
    hi: Cube,
}

impl ExteriorAir<'_> {
    fn in_bounds(&self, (x, y, z): Cube) -> bool {
        (self.lo.0..=self.hi.0).contains(&x)
            && (self.lo.1..=self.hi.1).contains(&y)
            && (self.lo.2..=self.hi.2).contains(&z)
    }
}

impl StateGraph for ExteriorAir<'_> {
    type State = Cube;

    fn neighbors(&self, cell: &Cube) -> Vec<Cube> {
        adjacent(*cell)
            .filter(|&next| self.in_bounds(next) && !self.cubes.contains(&next))
            .collect()
    }
}

impl PuzzleParser for LavaDroplet {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cubes = input
            .trim()
            .lines()
            .map(|line| -> Result<Cube, anyhow::Error> {
                let mut parts = line.split(',').map(|p| {
                    p.trim()
                        .parse::<i32>()
                        .with_context(|| format!("bad coordinate {p:?}"))
                });
                let cube = (
                    parts.next().ok_or_else(|| anyhow!("missing x"))??,
                    parts.next().ok_or_else(|| anyhow!("missing y"))??,
                    parts.next().ok_or_else(|| anyhow!("missing z"))??,
                );
                if parts.next().is_some() {
                    return Err(anyhow!("more than three coordinates"));
                }
                Ok(cube)
            })
            .enumerate()
            .map(|(line_idx, cube)| {
                cube.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect::<Result<HashSet<Cube>, ParseError>>()?;

        if cubes.is_empty() {
            return Err(ParseError::MissingData("no cubes in input".to_string()));
        }
        Ok(SharedData { cubes })
    }
}

impl Solver for LavaDroplet {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let cubes = &shared.cubes;
        match part {
            1 => {
                let area: usize = cubes
                    .iter()
                    .flat_map(|&cube| adjacent(cube))
                    .filter(|n| !cubes.contains(n))
                    .count();
                Ok(area.to_string())
            }
            2 => {
                // Margin of one cell so the flood can wrap around every face.
                let lo = (
                    cubes.iter().map(|c| c.0).min().unwrap_or(0) - 1,
                    cubes.iter().map(|c| c.1).min().unwrap_or(0) - 1,
                    cubes.iter().map(|c| c.2).min().unwrap_or(0) - 1,
                );
                let hi = (
                    cubes.iter().map(|c| c.0).max().unwrap_or(0) + 1,
                    cubes.iter().map(|c| c.1).max().unwrap_or(0) + 1,
                    cubes.iter().map(|c| c.2).max().unwrap_or(0) + 1,
                );
                let air = ExteriorAir { cubes, lo, hi };
                let reachable = bfs_distances(&air, [hi]);
                let area: usize = cubes
                    .iter()
                    .flat_map(|&cube| adjacent(cube))
                    .filter(|n| reachable.reached(n))
                    .count();
                Ok(area.to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
