//! Property tests for derived part dispatch and range checking

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverExt,
    SolverInstance,
};
use proptest::prelude::*;

/// Rows of a `#`/`.` bitmap, with the lit count cached by part 1
#[derive(Debug)]
struct Bitmap {
    rows: Vec<Vec<bool>>,
    lit: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct LitPixels;

impl AocParser for LitPixels {
    type SharedData<'a> = Bitmap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = input
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected {:?}",
                            line_idx + 1,
                            other
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Bitmap { rows, lit: None })
    }
}

impl PartSolver<1> for LitPixels {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = shared.rows.iter().flatten().filter(|&&on| on).count();
        shared.lit = Some(lit);
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for LitPixels {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = shared.rows.iter().map(Vec::len).sum();
        let lit = shared.lit.unwrap_or(0);
        Ok((total - lit).to_string())
    }
}

fn bitmap_text() -> impl Strategy<Value = (String, usize, usize)> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), 1..8), 1..6).prop_map(|rows| {
        let lit = rows.iter().flatten().filter(|&&on| on).count();
        let total = rows.iter().map(Vec::len).sum();
        let text = rows
            .iter()
            .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (text, lit, total)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn solve_part_dispatches_to_part_solver((text, lit, _) in bitmap_text()) {
        let mut via_solver = LitPixels::parse(&text).unwrap();
        let mut direct = LitPixels::parse(&text).unwrap();

        let dispatched = <LitPixels as Solver>::solve_part(&mut via_solver, 1).unwrap();
        let called = <LitPixels as PartSolver<1>>::solve(&mut direct).unwrap();
        prop_assert_eq!(&dispatched, &called);
        prop_assert_eq!(dispatched, lit.to_string());
    }

    #[test]
    fn later_parts_see_earlier_cache((text, lit, total) in bitmap_text()) {
        let mut shared = LitPixels::parse(&text).unwrap();
        <LitPixels as Solver>::solve_part(&mut shared, 1).unwrap();
        prop_assert_eq!(shared.lit, Some(lit));

        let dark = <LitPixels as Solver>::solve_part(&mut shared, 2).unwrap();
        prop_assert_eq!(dark, (total - lit).to_string());
    }

    #[test]
    fn unknown_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = LitPixels::parse("#.").unwrap();
        match <LitPixels as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented for part {}, got {:?}", part, other),
        }
    }

    #[test]
    fn checked_range_rejects_out_of_range(part in any::<u8>()) {
        let mut shared = LitPixels::parse("##").unwrap();
        let result = LitPixels::solve_part_checked_range(&mut shared, part);
        if (1..=LitPixels::PARTS).contains(&part) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        }
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(<LitPixels as Solver>::PARTS, 2);
}

#[test]
fn test_parse_error_names_line() {
    let error = LitPixels::parse("#.\n.x").unwrap_err();
    assert_eq!(
        error,
        ParseError::InvalidFormat("(line 2) unexpected 'x'".to_string())
    );
}

#[test]
fn test_instance_records_timing() {
    let mut instance = SolverInstance::<LitPixels>::new(2020, 20, "#.#\n...").unwrap();
    assert!(instance.parse_end() >= instance.parse_start());
    assert_eq!(instance.parts(), 2);

    let first = instance.solve(1).unwrap();
    assert_eq!(first.answer, "2");
    assert!(first.duration() >= chrono::TimeDelta::zero());
    assert_eq!(instance.solve(2).unwrap().answer, "4");
    assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
}
