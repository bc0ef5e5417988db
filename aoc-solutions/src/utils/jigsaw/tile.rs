//! Tile identity, orientation state and input parsing

use super::JigsawError;
use crate::utils::grid::{Grid, Orientation, Side};
use anyhow::{anyhow, bail};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub type TileId = u32;

static TILE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Tile (\d+):$").expect("tile header pattern is valid"));

/// A square bitmap tile with its id and current orientation
///
/// The parsed buffer is kept untouched; changing the orientation recomputes
/// the oriented buffer from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    base: Grid<bool>,
    orientation: Orientation,
    cells: Grid<bool>,
}

impl Tile {
    pub fn new(id: TileId, grid: Grid<bool>) -> Self {
        Self {
            id,
            cells: grid.clone(),
            base: grid,
            orientation: Orientation::Identity,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// Side length in cells
    pub fn side_len(&self) -> usize {
        self.base.rows()
    }

    /// The buffer as parsed, independent of orientation
    pub fn base(&self) -> &Grid<bool> {
        &self.base
    }

    /// The buffer in the current orientation
    pub fn grid(&self) -> &Grid<bool> {
        &self.cells
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.cells = orientation.apply(&self.base);
    }

    /// Advance to the next orientation of the 8-step cycle
    pub fn next_permutation(&mut self) {
        self.set_orientation(self.orientation.next());
    }

    /// Edge of the oriented buffer
    pub fn edge(&self, side: Side) -> Vec<bool> {
        self.cells.edge(side)
    }
}

impl FromStr for Tile {
    type Err = anyhow::Error;

    fn from_str(block: &str) -> Result<Self, Self::Err> {
        let mut lines = block.lines().map(str::trim_end);
        let header = lines.next().ok_or_else(|| anyhow!("empty tile block"))?;
        let id = TILE_HEADER
            .captures(header)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| anyhow!("expected `Tile <id>:` header, found {:?}", header))?
            .as_str()
            .parse::<TileId>()?;

        let body = lines.collect::<Vec<_>>().join("\n");
        let grid = Grid::parse_bitmap(&body).ok_or_else(|| {
            anyhow!("tile {id}: rows must be non-empty, of equal length and use only '#' or '.'")
        })?;
        if !grid.is_square() {
            bail!("tile {id} is {}x{}, expected a square", grid.rows(), grid.cols());
        }
        if grid.rows() < 3 {
            bail!("tile {id} is {0}x{0}, expected at least 3x3", grid.rows());
        }

        Ok(Tile::new(id, grid))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}:\n{}", self.id, self.cells)
    }
}

/// Parse blank-line separated tile blocks
///
/// All tiles must share one size and carry distinct ids.
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>, JigsawError> {
    let normalized = input.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(block_idx, block)| {
            block
                .parse::<Tile>()
                .map_err(|e| anyhow!("(tile block {}) {}", block_idx + 1, e))
        })
        .collect::<Result<Vec<_>, _>>()
        .and_then(|tiles| {
            let Some(first) = tiles.first() else {
                bail!("no tiles found");
            };
            let side = first.side_len();
            if let Some(odd) = tiles.iter().find(|tile| tile.side_len() != side) {
                bail!(
                    "tile {} has side {}, expected {} like tile {}",
                    odd.id(),
                    odd.side_len(),
                    side,
                    first.id()
                );
            }
            let mut seen = HashSet::new();
            if let Some(dup) = tiles.iter().find(|tile| !seen.insert(tile.id())) {
                bail!("tile id {} appears more than once", dup.id());
            }
            Ok(tiles)
        })
        .map_err(|e| JigsawError::Parse(e.to_string()))
}
