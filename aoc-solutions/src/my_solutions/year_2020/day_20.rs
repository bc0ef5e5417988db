use crate::utils::jigsaw::sea_monster::water_roughness;
use crate::utils::jigsaw::{Jigsaw, JigsawError, Tile, parse_tiles};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 20, tags = ["jigsaw", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    tiles: Vec<Tile>,
    jigsaw: Option<Jigsaw>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_tiles(input)
            .map(|tiles| SharedData {
                tiles,
                jigsaw: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product = match_once_for_both(shared)?
            .corner_product()
            .map_err(solve_failed)?;
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let image = match_once_for_both(shared)?
            .assemble()
            .map_err(solve_failed)?;
        Ok(water_roughness(&image).to_string())
    }
}

/// Pairwise matching and classification, computed by whichever part runs first
fn match_once_for_both(shared: &mut SharedData) -> Result<&Jigsaw, SolveError> {
    let jigsaw = match shared.jigsaw.take() {
        Some(jigsaw) => jigsaw,
        None => Jigsaw::new(shared.tiles.clone()).map_err(solve_failed)?,
    };
    Ok(shared.jigsaw.insert(jigsaw))
}

fn solve_failed(e: JigsawError) -> SolveError {
    SolveError::SolveFailed(Box::new(e))
}
