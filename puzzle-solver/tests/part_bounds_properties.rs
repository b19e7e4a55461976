//! Property-based tests for part range checking

use proptest::prelude::*;
use puzzle_solver::{ParseError, PuzzleParser, SolveError, Solver, SolverExt};

/// Solver stub with a configurable part count.
struct Stub<const N: u8>;

impl<const N: u8> PuzzleParser for Stub<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Stub<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("answer-{part}"))
    }
}

fn checked<const N: u8>(part: u8) -> Result<String, SolveError> {
    Stub::<N>::solve_part_checked(&mut (), part)
}

proptest! {
    /// *For any* part number, the checked entry point accepts exactly
    /// `1..=PARTS` and rejects everything else with `PartOutOfRange`.
    #[test]
    fn prop_part_range_is_enforced(parts in 1u8..=3, part in 0u8..=255) {
        let result = match parts {
            1 => checked::<1>(part),
            2 => checked::<2>(part),
            _ => checked::<3>(part),
        };
        if part >= 1 && part <= parts {
            prop_assert_eq!(result.unwrap(), format!("answer-{}", part));
        } else {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        }
    }

    /// *For any* valid part, the checked entry point delegates to
    /// `solve_part` unchanged.
    #[test]
    fn prop_valid_parts_delegate(part in 1u8..=2) {
        let direct = Stub::<2>::solve_part(&mut (), part).unwrap();
        let via_checked = checked::<2>(part).unwrap();
        prop_assert_eq!(direct, via_checked);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn part_zero_is_rejected() {
        assert!(matches!(
            checked::<2>(0),
            Err(SolveError::PartOutOfRange(0))
        ));
    }

    #[test]
    fn part_above_max_is_rejected() {
        assert!(matches!(
            checked::<2>(3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }
}
