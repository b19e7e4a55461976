//! 2022 day 12: fewest steps up a height map.
//!
//! Searched backwards: one breadth-first pass from the summit, over edges
//! reversed against the climb rule, yields the distance from *every* cell
//! at once. Part 1 is a lookup at the marked start; part 2 is the minimum
//! over all lowest-elevation cells.

use anyhow::anyhow;
use puzzle_search::shortest_path::{bfs_distances, DistanceMap};
use puzzle_search::StateGraph;
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};

#[derive(Debug)]
pub struct HillClimb;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 12,
        solver: &HillClimb,
        tags: &["2022", "bfs", "grid"],
    }
}

#[derive(Debug)]
pub struct SharedData {
    heights: Vec<Vec<u8>>,
    start: (usize, usize),
    summit: (usize, usize),
    from_summit: Option<DistanceMap<(usize, usize), usize>>,
}

/// The height map viewed against the direction of travel: a neighbor is
/// listed when a climber standing there could step *onto* the current
/// cell (climbs of at most one unit; descents unrestricted).
struct Descent<'a> {
    heights: &'a [Vec<u8>],
}

impl StateGraph for Descent<'_> {
    type State = (usize, usize);

    fn neighbors(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
        let rows = self.heights.len();
        let cols = self.heights[0].len();
        let candidates = [
            (r.wrapping_sub(1), c),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r, c + 1),
        ];
        candidates
            .into_iter()
            .filter(|&(nr, nc)| {
                nr < rows
                    && nc < cols
                    && i16::from(self.heights[r][c]) - i16::from(self.heights[nr][nc]) <= 1
            })
            .collect()
    }
}

impl PuzzleParser for HillClimb {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut heights: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut summit = None;

        for (r, line) in input.trim().lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, byte) in line.bytes().enumerate() {
                let height = match byte {
                    b'S' => {
                        start = Some((r, c));
                        0
                    }
                    b'E' => {
                        summit = Some((r, c));
                        25
                    }
                    b'a'..=b'z' => byte - b'a',
                    other => {
                        return Err(ParseError::InvalidFormat(
                            anyhow!("unexpected map byte {:?} at row {} col {}", other as char, r, c)
                                .to_string(),
                        ));
                    }
                };
                row.push(height);
            }
            if let Some(first) = heights.first() {
                if first.len() != row.len() {
                    return Err(ParseError::InvalidFormat(format!(
                        "ragged map: row {} has {} cells, expected {}",
                        r,
                        row.len(),
                        first.len()
                    )));
                }
            }
            heights.push(row);
        }

        if heights.is_empty() {
            return Err(ParseError::MissingData("empty height map".to_string()));
        }
        let start = start.ok_or_else(|| ParseError::MissingData("no start marker S".to_string()))?;
        let summit =
            summit.ok_or_else(|| ParseError::MissingData("no summit marker E".to_string()))?;

        Ok(SharedData {
            heights,
            start,
            summit,
            from_summit: None,
        })
    }
}

impl Solver for HillClimb {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let start = shared.start;
                let distances = distances_from_summit(shared);
                distances
                    .cost(&start)
                    .map(|steps| steps.to_string())
                    .ok_or_else(|| {
                        SolveError::NoSolution(
                            "the summit is unreachable from the start".to_string(),
                        )
                    })
            }
            2 => {
                let lowest: Vec<(usize, usize)> = shared
                    .heights
                    .iter()
                    .enumerate()
                    .flat_map(|(r, row)| {
                        row.iter()
                            .enumerate()
                            .filter(|&(_, &h)| h == 0)
                            .map(move |(c, _)| (r, c))
                    })
                    .collect();
                let distances = distances_from_summit(shared);
                let nearest = lowest
                    .into_iter()
                    .filter_map(|cell| distances.cost(&cell))
                    .min();
                nearest.map(|steps| steps.to_string()).ok_or_else(|| {
                    SolveError::NoSolution(
                        "the summit is unreachable from every lowest cell".to_string(),
                    )
                })
            }
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn distances_from_summit(shared: &mut SharedData) -> &DistanceMap<(usize, usize), usize> {
    let heights = &shared.heights;
    let summit = shared.summit;
    shared
        .from_summit
        .get_or_insert_with(|| bfs_distances(&Descent { heights }, [summit]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    fn parsed(input: &str) -> SharedData {
        HillClimb::parse(input).unwrap()
    }

    #[test]
    fn example_part_1() {
        let mut shared = parsed(EXAMPLE);
        assert_eq!(HillClimb::solve_part(&mut shared, 1).unwrap(), "31");
    }

    #[test]
    fn example_part_2() {
        let mut shared = parsed(EXAMPLE);
        assert_eq!(HillClimb::solve_part(&mut shared, 2).unwrap(), "29");
    }

    #[test]
    fn part_2_reuses_part_1_search() {
        let mut shared = parsed(EXAMPLE);
        HillClimb::solve_part(&mut shared, 1).unwrap();
        assert!(shared.from_summit.is_some());
        HillClimb::solve_part(&mut shared, 2).unwrap();
    }

    #[test]
    fn unreachable_summit_is_reported() {
        // The z-height wall before the summit cannot be climbed from
        // height-0 ground in single-unit steps.
        let mut shared = parsed("SazE");
        let result = HillClimb::solve_part(&mut shared, 1);
        assert!(matches!(result, Err(SolveError::NoSolution(_))));
    }

    #[test]
    fn rejects_unknown_bytes() {
        assert!(matches!(
            HillClimb::parse("Sa#E"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_missing_markers() {
        assert!(matches!(
            HillClimb::parse("abc"),
            Err(ParseError::MissingData(_))
        ));
    }
}
