//! 2022 day 11: monkeys juggling worry levels.
//!
//! Part 2 runs 10 000 rounds with no relief division, so raw worry
//! levels would grow without bound. Every decision a monkey ever makes
//! is a divisibility test, so each level is folded to its residue modulo
//! the lcm of all the monkeys' divisors — `(a % (k * m)) % m == a % m`
//! keeps every throw identical while the numbers stay small. Part 1
//! keeps raw values: its divide-by-three relief does not commute with
//! the folding.

use anyhow::{anyhow, Context};
use itertools::Itertools;
use puzzle_search::arith::lcm_of;
use puzzle_solver::{
    inventory, ParseError, PuzzleParser, SolveError, Solver, SolverPlugin,
};

#[derive(Debug)]
pub struct MonkeyBusiness;

inventory::submit! {
    SolverPlugin {
        year: 2022,
        day: 11,
        solver: &MonkeyBusiness,
        tags: &["2022", "simulation", "residue"],
    }
}

#[derive(Debug, Clone, Copy)]
enum Operand {
    Old,
    Literal(u64),
}

impl Operand {
    fn value(self, old: u64) -> u64 {
        match self {
            Operand::Old => old,
            Operand::Literal(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum WorryOp {
    Add,
    Mul,
}

#[derive(Debug, Clone)]
struct MonkeySpec {
    items: Vec<u64>,
    op: WorryOp,
    lhs: Operand,
    rhs: Operand,
    divisor: u64,
    on_true: usize,
    on_false: usize,
}

impl MonkeySpec {
    fn inspect(&self, old: u64) -> u64 {
        let (a, b) = (self.lhs.value(old), self.rhs.value(old));
        match self.op {
            WorryOp::Add => a + b,
            WorryOp::Mul => a * b,
        }
    }
}

/// How worry levels are kept in check between inspections.
enum WorryControl {
    /// Part 1: divide by three out of relief.
    Relief,
    /// Part 2: fold to the residue modulo the lcm of all divisors.
    Fold,
}

fn monkey_business(specs: &[MonkeySpec], rounds: u32, control: WorryControl) -> u64 {
    let fold = lcm_of(specs.iter().map(|m| m.divisor));
    let mut items: Vec<Vec<u64>> = specs.iter().map(|m| m.items.clone()).collect();
    let mut inspections = vec![0u64; specs.len()];

    for _ in 0..rounds {
        for i in 0..specs.len() {
            let in_hand = std::mem::take(&mut items[i]);
            inspections[i] += in_hand.len() as u64;
            for item in in_hand {
                let spec = &specs[i];
                let worried = spec.inspect(item);
                let managed = match control {
                    WorryControl::Relief => worried / 3,
                    WorryControl::Fold => worried % fold,
                };
                let target = if managed % spec.divisor == 0 {
                    spec.on_true
                } else {
                    spec.on_false
                };
                items[target].push(managed);
            }
        }
    }

    inspections.into_iter().sorted_unstable().rev().take(2).product()
}

#[derive(Debug)]
pub struct SharedData {
    specs: Vec<MonkeySpec>,
}

fn parse_operand(token: &str) -> Result<Operand, anyhow::Error> {
    if token == "old" {
        Ok(Operand::Old)
    } else {
        token
            .parse()
            .map(Operand::Literal)
            .with_context(|| format!("bad operand {token:?}"))
    }
}

fn parse_monkey(block: &str) -> Result<MonkeySpec, anyhow::Error> {
    let mut lines = block.lines();
    let header = lines.next().ok_or_else(|| anyhow!("empty monkey block"))?;
    if !header.starts_with("Monkey") {
        return Err(anyhow!("expected a Monkey header, found {header:?}"));
    }

    let items_line = lines.next().ok_or_else(|| anyhow!("missing starting items"))?;
    let items = items_line
        .split(':')
        .nth(1)
        .ok_or_else(|| anyhow!("malformed starting items"))?
        .split(',')
        .map(|n| n.trim().parse::<u64>().context("bad starting item"))
        .collect::<Result<Vec<_>, _>>()?;

    let op_line = lines.next().ok_or_else(|| anyhow!("missing operation"))?;
    let expr = op_line
        .split("new =")
        .nth(1)
        .ok_or_else(|| anyhow!("malformed operation"))?;
    let (lhs, op, rhs) = expr
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("operation is not a binary expression"))?;
    let op = match op {
        "+" => WorryOp::Add,
        "*" => WorryOp::Mul,
        other => return Err(anyhow!("unknown operator {other:?}")),
    };

    let last_number = |line: &str, what: &str| -> Result<u64, anyhow::Error> {
        line.split_whitespace()
            .next_back()
            .ok_or_else(|| anyhow!("missing {what}"))?
            .parse()
            .with_context(|| format!("bad {what}"))
    };

    let divisor = last_number(
        lines.next().ok_or_else(|| anyhow!("missing test"))?,
        "test divisor",
    )?;
    if divisor == 0 {
        return Err(anyhow!("test divisor must be positive"));
    }
    let on_true = last_number(
        lines.next().ok_or_else(|| anyhow!("missing true target"))?,
        "true target",
    )? as usize;
    let on_false = last_number(
        lines.next().ok_or_else(|| anyhow!("missing false target"))?,
        "false target",
    )? as usize;

    Ok(MonkeySpec {
        items,
        op,
        lhs: parse_operand(lhs)?,
        rhs: parse_operand(rhs)?,
        divisor,
        on_true,
        on_false,
    })
}

impl PuzzleParser for MonkeyBusiness {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let specs = input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(idx, block)| {
                parse_monkey(block)
                    .map_err(|e| ParseError::InvalidFormat(format!("(monkey {idx}) {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if specs.is_empty() {
            return Err(ParseError::MissingData("no monkeys in input".to_string()));
        }
        for (idx, spec) in specs.iter().enumerate() {
            if spec.on_true >= specs.len() || spec.on_false >= specs.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "monkey {idx} throws to a monkey that does not exist"
                )));
            }
        }
        Ok(SharedData { specs })
    }
}

impl Solver for MonkeyBusiness {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(monkey_business(&shared.specs, 20, WorryControl::Relief).to_string()),
            2 => Ok(monkey_business(&shared.specs, 10_000, WorryControl::Fold).to_string()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = MonkeyBusiness::parse(input).unwrap();
        MonkeyBusiness::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn example_part_1() {
        assert_eq!(solve(EXAMPLE, 1), "10605");
    }

    #[test]
    fn example_part_2() {
        assert_eq!(solve(EXAMPLE, 2), "2713310158");
    }

    #[test]
    fn squaring_operation_parses() {
        let shared = MonkeyBusiness::parse(EXAMPLE).unwrap();
        assert_eq!(shared.specs[2].inspect(6), 36);
    }

    #[test]
    fn rejects_throws_to_missing_monkeys() {
        let block = "\
Monkey 0:
  Starting items: 1
  Operation: new = old + 1
  Test: divisible by 2
    If true: throw to monkey 5
    If false: throw to monkey 0";
        assert!(matches!(
            MonkeyBusiness::parse(block),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn rejects_non_binary_operations() {
        let block = "\
Monkey 0:
  Starting items: 1
  Operation: new = old
  Test: divisible by 2
    If true: throw to monkey 0
    If false: throw to monkey 0";
        assert!(matches!(
            MonkeyBusiness::parse(block),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
