//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parsing half of a solver
///
/// `SharedData` holds the parsed input together with anything the parts want
/// to compute once and reuse.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct CountLit;
///
/// impl AocParser for CountLit {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let rows: Vec<&str> = input.lines().collect();
///         if rows.iter().any(|row| row.chars().any(|c| c != '#' && c != '.')) {
///             return Err(ParseError::InvalidFormat("expected '#' or '.'".into()));
///         }
///         Ok(rows)
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input plus cached intermediate results.
    ///
    /// Owned data supports mutation between parts; borrowing from the input
    /// (`&'a str`) avoids copies when no transformation is needed.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, selected by the const generic `N`
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct CountLit;
///
/// impl AocParser for CountLit {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for CountLit {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let lit = shared.iter().map(|row| row.matches('#').count()).sum::<usize>();
///         Ok(lit.to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part, reading or caching into `shared`
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A solver dispatching part numbers at runtime
///
/// Usually derived with `#[derive(AocSolver)]`, which forwards part `N` to
/// `PartSolver<N>` for every `N` in `1..=max_parts`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct RowStats;
///
/// impl AocParser for RowStats {
///     type SharedData<'a> = Vec<usize>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().map(|row| row.matches('#').count()).collect())
///     }
/// }
///
/// impl Solver for RowStats {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<usize>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = RowStats::parse("#.#\n###").unwrap();
/// assert_eq!(RowStats::solve_part(&mut shared, 1).unwrap(), "5");
/// assert_eq!(RowStats::solve_part(&mut shared, 2).unwrap(), "3");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part
    ///
    /// Returns `SolveError::PartNotImplemented` for part numbers without an
    /// implementation.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// with `SolveError::PartOutOfRange` before dispatching
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
