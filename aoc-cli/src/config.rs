//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Puzzle input file, known to exist
    pub input: PathBuf,
    /// Year filter (None = any year)
    pub year_filter: Option<u16>,
    /// Day filter (None = any day)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, checking that the input file exists
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if !args.input.is_file() {
            return Err(CliError::Config(format!(
                "Input file {} does not exist",
                args.input.display()
            )));
        }

        let tags = args
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Config {
            input: args.input,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            quiet: args.quiet,
        })
    }
}
