//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year under [`my_solutions`]. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough for a runner to
//! find them. The algorithms behind them live in [`utils`].

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;
