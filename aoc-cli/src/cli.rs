//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code solver on a local input", version)]
pub struct Args {
    /// Path to the puzzle input
    pub input: PathBuf,

    /// Year of the solver to run
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day of the solver to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
