//! 2022 day 24: crossing a valley of moving blizzards.
//!
//! The blizzard pattern repeats every lcm(interior width, interior
//! height) minutes, so occupancy is precomputed per phase and the search
//! state is (position, time mod period) — finite even though the clock
//! is not. Each crossing is an A* run with the Manhattan distance to the
//! target as the heuristic; part 2 chains three crossings (over, back
//! for the snack, over again), threading the arrival time of one leg
//! into the departure phase of the next.

use anyhow::anyhow;
use puzzle_search::arith::lcm;
use puzzle_search::best_first::minimum_cost;
use puzzle_search::{InformedGraph, SearchError, WeightedGraph};
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};

#[derive(Debug)]
pub struct BlizzardBasin;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 24,
        solver: &BlizzardBasin,
        tags: &["2022", "astar", "time-varying"],
    }
}

type Pos = (i32, i32);

#[derive(Debug)]
pub struct Valley {
    width: i32,
    height: i32,
    start: Pos,
    exit: Pos,
    period: u32,
    /// occupied[time % period][y * width + x]
    occupied: Vec<Vec<bool>>,
}

impl Valley {
    fn walkable(&self, pos: Pos) -> bool {
        pos == self.start
            || pos == self.exit
            || ((1..self.width - 1).contains(&pos.0) && (1..self.height - 1).contains(&pos.1))
    }

    fn blocked(&self, (x, y): Pos, phase: u32) -> bool {
        self.occupied[phase as usize][(y * self.width + x) as usize]
    }
}

/// One crossing attempt towards `goal`; state is (position, phase).
struct Crossing<'a> {
    valley: &'a Valley,
    goal: Pos,
}

impl WeightedGraph for Crossing<'_> {
    type State = (Pos, u32);
    type Cost = u32;

    fn successors(&self, &((x, y), phase): &(Pos, u32)) -> Vec<((Pos, u32), u32)> {
        let next_phase = (phase + 1) % self.valley.period;
        [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&next| self.valley.walkable(next) && !self.valley.blocked(next, next_phase))
            .map(|next| ((next, next_phase), 1))
            .collect()
    }
}

impl InformedGraph for Crossing<'_> {
    fn heuristic(&self, &((x, y), _): &(Pos, u32)) -> u32 {
        x.abs_diff(self.goal.0) + y.abs_diff(self.goal.1)
    }

    fn is_goal(&self, &(pos, _): &(Pos, u32)) -> bool {
        pos == self.goal
    }
}

/// Minutes on the clock when `to` is reached, departing `from` at minute
/// `depart`.
fn crossing_time(valley: &Valley, from: Pos, to: Pos, depart: u32) -> Result<u32, SolveError> {
    let graph = Crossing { valley, goal: to };
    let start = (from, depart % valley.period);
    match minimum_cost(&graph, start) {
        Ok(steps) => Ok(depart + steps),
        Err(SearchError::NoPath) => Err(SolveError::NoSolution(format!(
            "no blizzard-free route from {from:?} to {to:?}"
        ))),
    }
}

#[derive(Debug)]
pub struct SharedData {
    valley: Valley,
    first_crossing: Option<u32>,
}

impl PuzzleParser for BlizzardBasin {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.trim().lines().collect();
        let height = lines.len() as i32;
        if height < 3 {
            return Err(ParseError::MissingData("valley needs at least 3 rows".to_string()));
        }
        let width = lines[0].len() as i32;
        if width < 3 {
            return Err(ParseError::MissingData("valley needs at least 3 columns".to_string()));
        }

        let mut blizzards: Vec<(Pos, (i32, i32))> = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            if line.len() as i32 != width {
                return Err(ParseError::InvalidFormat(format!(
                    "ragged valley: row {} has {} cells, expected {}",
                    y,
                    line.len(),
                    width
                )));
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = (x as i32, y as i32);
                let dir = match ch {
                    '#' | '.' => continue,
                    '>' => (1, 0),
                    '<' => (-1, 0),
                    '^' => (0, -1),
                    'v' => (0, 1),
                    other => {
                        return Err(ParseError::InvalidFormat(
                            anyhow!("unexpected valley char {other:?} at {pos:?}").to_string(),
                        ));
                    }
                };
                blizzards.push((pos, dir));
            }
        }

        let start_x = lines[0]
            .find('.')
            .ok_or_else(|| ParseError::MissingData("no entrance in the top wall".to_string()))?;
        let exit_x = lines[height as usize - 1]
            .find('.')
            .ok_or_else(|| ParseError::MissingData("no exit in the bottom wall".to_string()))?;
        let start = (start_x as i32, 0);
        let exit = (exit_x as i32, height - 1);

        let interior_w = width - 2;
        let interior_h = height - 2;
        let period = lcm(interior_w as u64, interior_h as u64) as u32;

        // Advance every blizzard through one full cycle up front; after
        // that, occupancy at any time is a table lookup.
        let mut occupied = Vec::with_capacity(period as usize);
        for t in 0..period as i32 {
            let mut mask = vec![false; (width * height) as usize];
            for &((x, y), (dx, dy)) in &blizzards {
                let bx = 1 + (x - 1 + dx * t).rem_euclid(interior_w);
                let by = 1 + (y - 1 + dy * t).rem_euclid(interior_h);
                mask[(by * width + bx) as usize] = true;
            }
            occupied.push(mask);
        }

        Ok(SharedData {
            valley: Valley {
                width,
                height,
                start,
                exit,
                period,
                occupied,
            },
            first_crossing: None,
        })
    }
}

impl Solver for BlizzardBasin {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let valley = &shared.valley;
        let first = match shared.first_crossing {
            Some(t) => t,
            None => {
                let t = crossing_time(valley, valley.start, valley.exit, 0)?;
                shared.first_crossing = Some(t);
                t
            }
        };
        match part {
            1 => Ok(first.to_string()),
            2 => {
                let back = crossing_time(valley, valley.exit, valley.start, first)?;
                let again = crossing_time(valley, valley.start, valley.exit, back)?;
                Ok(again.to_string())
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "\
#.#####
#.....#
#>....#
#.....#
#...v.#
#####.#";

    const EXAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = BlizzardBasin::parse(input).unwrap();
        BlizzardBasin::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn simple_valley_part_1() {
        assert_eq!(solve(SIMPLE, 1), "10");
    }

    #[test]
    fn example_part_1() {
        assert_eq!(solve(EXAMPLE, 1), "18");
    }

    #[test]
    fn example_part_2() {
        assert_eq!(solve(EXAMPLE, 2), "54");
    }

    #[test]
    fn calm_valley_walks_the_manhattan_distance() {
        let calm = "\
#.###
#...#
#...#
###.#";
        assert_eq!(solve(calm, 1), "5");
    }

    #[test]
    fn blizzard_phase_wraps_around_the_walls() {
        let shared = BlizzardBasin::parse(SIMPLE).unwrap();
        let valley = &shared.valley;
        // The '>' blizzard starts at (1, 2) in a 5-wide interior and is
        // back there after one full period.
        assert!(valley.blocked((1, 2), 0));
        assert!(valley.blocked((2, 2), 1));
        assert!(!valley.blocked((1, 2), 1));
    }

    #[test]
    fn rejects_tiny_input() {
        assert!(matches!(
            BlizzardBasin::parse("#.#\n#.#"),
            Err(ParseError::MissingData(_))
        ));
    }
}
