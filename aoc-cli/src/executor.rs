//! Sequential executor for running the selected solver

use crate::config::Config;
use crate::error::CliError;
use aoc_solver::{FactoryInfo, SolveError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use std::ops::RangeInclusive;

/// Result from solving a single part
#[derive(Debug)]
pub struct PartResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolveError>,
    /// Set on the first part only, since parsing happens once per run
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Picks one solver from the registry and runs its parts in order
pub struct Executor {
    registry: SolverRegistry,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Registered solvers passing the year and day filters
    pub fn candidates(&self) -> Vec<FactoryInfo> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .collect()
    }

    /// The single solver matching the filters
    pub fn select(&self) -> Result<FactoryInfo, CliError> {
        let candidates = self.candidates();
        match candidates.as_slice() {
            [info] => Ok(*info),
            [] => Err(CliError::Config(
                "No solver matches the specified filters".to_string(),
            )),
            many => Err(CliError::Config(format!(
                "{} solvers match, narrow the selection with --year/--day/--tags: {}",
                many.len(),
                many.iter()
                    .map(|info| format!("{}/{:02}", info.year, info.day))
                    .join(", ")
            ))),
        }
    }

    /// Parts to run for a solver with `max_parts` parts
    #[allow(clippy::reversed_empty_ranges)]
    pub fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Parse `input` once and solve the selected parts of `info`'s solver
    ///
    /// A parse failure aborts the run. A failing part is recorded in its
    /// result and the remaining parts still run.
    pub fn execute(&self, info: &FactoryInfo, input: &str) -> Result<Vec<PartResult>, CliError> {
        let mut solver = self.registry.create_solver(info.year, info.day, input)?;
        let mut parse_duration = Some(solver.parse_duration());

        Ok(self
            .filter_parts(info.parts)
            .map(|part| {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(result) => {
                        let duration = result.duration();
                        (Ok(result.answer), duration)
                    }
                    Err(e) => (Err(e), TimeDelta::zero()),
                };
                PartResult {
                    year: info.year,
                    day: info.day,
                    part,
                    answer,
                    parse_duration: parse_duration.take(),
                    solve_duration,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder};
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct CountLit;

    impl AocParser for CountLit {
        type SharedData<'a> = Vec<bool>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    other => Err(ParseError::InvalidFormat(format!("unexpected {other:?}"))),
                })
                .collect()
        }
    }

    impl PartSolver<1> for CountLit {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().filter(|&&on| on).count().to_string())
        }
    }

    impl PartSolver<2> for CountLit {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if shared.is_empty() {
                return Err(SolveError::SolveFailed("empty bitmap".into()));
            }
            Ok(shared.len().to_string())
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_solver::<CountLit>(2020, 20, &["grid"])
            .unwrap()
            .register_solver::<CountLit>(2020, 3, &[])
            .unwrap()
            .register_solver::<CountLit>(2021, 20, &[])
            .unwrap()
            .build()
    }

    fn config(year: Option<u16>, day: Option<u8>, part: Option<u8>) -> Config {
        Config {
            input: PathBuf::from("unused.txt"),
            year_filter: year,
            day_filter: day,
            part_filter: part,
            tags: Vec::new(),
            quiet: false,
        }
    }

    #[test]
    fn test_select_unique_solver() {
        let executor = Executor::new(registry(), &config(Some(2020), Some(20), None));
        let info = executor.select().unwrap();
        assert_eq!((info.year, info.day, info.parts), (2020, 20, 2));
    }

    #[test]
    fn test_select_lists_ambiguous_candidates() {
        let executor = Executor::new(registry(), &config(None, Some(20), None));
        let error = executor.select().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Configuration error: 2 solvers match, narrow the selection with --year/--day/--tags: 2020/20, 2021/20"
        );
    }

    #[test]
    fn test_select_without_match() {
        let executor = Executor::new(registry(), &config(Some(2019), None, None));
        assert!(matches!(executor.select(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_execute_all_parts() {
        let executor = Executor::new(registry(), &config(Some(2020), Some(20), None));
        let info = executor.select().unwrap();
        let results = executor.execute(&info, "#.#\n.#.").unwrap();

        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().as_str()))
            .collect();
        assert_eq!(answers, [(1, "3"), (2, "6")]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_failing_part_does_not_stop_the_run() {
        let executor = Executor::new(registry(), &config(Some(2020), Some(3), None));
        let info = executor.select().unwrap();
        let results = executor.execute(&info, "").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().ok(), Some("0"));
        assert!(matches!(results[1].answer, Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_parse_failure_aborts() {
        let executor = Executor::new(registry(), &config(Some(2020), Some(20), None));
        let info = executor.select().unwrap();
        assert!(matches!(
            executor.execute(&info, "#x"),
            Err(CliError::Solver(aoc_solver::SolverError::ParseError(_)))
        ));
    }

    proptest! {
        #[test]
        fn filter_parts_stays_within_solver(part in proptest::option::of(1u8..=2), max_parts in 1u8..=2) {
            let executor = Executor::new(registry(), &config(None, None, part));
            let parts = executor.filter_parts(max_parts);
            for p in parts.clone() {
                prop_assert!((1..=max_parts).contains(&p));
            }
            match part {
                Some(p) if p <= max_parts => prop_assert_eq!(parts, p..=p),
                Some(_) => prop_assert!(parts.is_empty()),
                None => prop_assert_eq!(parts, 1..=max_parts),
            }
        }
    }
}
