//! Advent of Code Solver Library
//!
//! A small framework for hosting puzzle solvers: a solver declares how to
//! parse its input and how to solve each part, registers itself for a
//! (year, day) pair, and a runner creates it by looking the pair up.
//!
//! # Overview
//!
//! - [`AocParser`] parses input into the solver's shared data
//! - [`PartSolver<N>`](PartSolver) solves part `N` against that data
//! - [`Solver`] dispatches part numbers at runtime, usually derived with
//!   `#[derive(AocSolver)]`
//! - [`RegistryBuilder`] / [`SolverRegistry`] map (year, day) to solver factories
//! - [`SolverPlugin`] entries submitted with `#[derive(AutoRegisterSolver)]`
//!   are collected at link time and registered in bulk
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Pixels;
//!
//! impl AocParser for Pixels {
//!     type SharedData<'a> = Vec<Vec<bool>>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|row| {
//!                 row.chars()
//!                     .map(|c| match c {
//!                         '#' => Ok(true),
//!                         '.' => Ok(false),
//!                         other => Err(ParseError::InvalidFormat(format!("unexpected {other:?}"))),
//!                     })
//!                     .collect::<Result<Vec<bool>, ParseError>>()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Pixels {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().flatten().filter(|&&on| on).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Pixels {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Pixels>(2020, 20, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2020, 20, "#.#\n..#").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "2");
//! ```
//!
//! # Shared Data Between Parts
//!
//! Both parts receive `&mut SharedData`. A part can store an expensive
//! intermediate result there (an `Option` field filled on first use) and a
//! later part picks it up instead of recomputing it.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, RegistryBuilder,
    SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
