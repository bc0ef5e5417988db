//! Reconstruction of an image from shuffled, re-oriented square tiles
//!
//! Adjacent tiles of the original image share one border row or column. The
//! reconstruction runs in stages, each in its own module:
//!
//! 1. [`edge_matcher`] finds every pair of tiles sharing a border, reading
//!    edges forward and reversed so no tile has to be re-oriented yet
//! 2. [`classifier`] turns match counts into corner, border and interior tiles
//! 3. [`perimeter`] walks the outer ring from one corner into a [`PositionGrid`]
//! 4. [`interior`] fills the inner positions by intersecting neighbour matches
//! 5. [`assembler`] orients each placed tile against its neighbours and
//!    stitches the tile interiors into one bitmap
//! 6. [`sea_monster`] scans that bitmap for the marker pattern
//!
//! [`Jigsaw`] runs the stages in order and keeps the intermediate results.

pub mod assembler;
pub mod classifier;
pub mod edge_matcher;
pub mod interior;
pub mod perimeter;
pub mod sea_monster;
pub mod tile;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classifier::{Classification, TileType};
pub use edge_matcher::{Adjacency, Match};
pub use perimeter::PositionGrid;
pub use sea_monster::Marker;
pub use tile::{Tile, TileId, parse_tiles};

use crate::utils::grid::Grid;
use thiserror::Error;

/// Failure while parsing or reconstructing a tiled image
///
/// Every variant is fatal: the reconstruction either completes or stops at
/// the first inconsistency.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JigsawError {
    /// Malformed tile header, cells or tile sizes
    #[error("Malformed tile input: {0}")]
    Parse(String),
    /// The tiles cannot form a square arrangement
    #[error("{tiles} tiles cannot form a square image")]
    NotSquare { tiles: usize },
    /// A tile matches a number of other tiles no grid position allows
    #[error("Tile {id} matches {count} other tiles, expected 2, 3 or 4")]
    InconsistentTopology { id: TileId, count: usize },
    /// A square arrangement needs exactly four corners
    #[error("Found {found} corner tiles, expected 4")]
    CornerCount { found: usize },
    /// The walk around the outer ring got stuck or closed too early
    #[error("Perimeter walk stopped at tile {id} after placing {placed} tiles")]
    PerimeterClosure { id: TileId, placed: usize },
    /// No unique tile fits an interior position
    #[error("Interior position ({row}, {col}) has {} candidate tiles: {candidates:?}", .candidates.len())]
    InteriorAmbiguity {
        row: usize,
        col: usize,
        candidates: Vec<TileId>,
    },
    /// A layout was requested before every position received a tile
    #[error("Position ({row}, {col}) holds no tile")]
    EmptyPosition { row: usize, col: usize },
    /// Tiles of one arrangement must share a side length
    #[error("Tile {id} has side {side}, expected {expected}")]
    TileSizeMismatch {
        id: TileId,
        side: usize,
        expected: usize,
    },
    /// A tile needs at least one cell left once its border is stripped
    #[error("Tile {id} with side {side} has no interior to stitch")]
    TileTooSmall { id: TileId, side: usize },
    /// None of the 8 orientations lines a tile up with its placed neighbours
    #[error("No orientation of tile {id} fits position ({row}, {col})")]
    OrientationSearchExhausted { id: TileId, row: usize, col: usize },
}

/// Tiles together with their discovered matches and classification
#[derive(Debug, Clone)]
pub struct Jigsaw {
    tiles: Vec<Tile>,
    matches: Vec<Match>,
    adjacency: Adjacency,
    classification: Classification,
}

impl Jigsaw {
    /// Match every pair of tiles and classify the tiles by match count
    pub fn new(tiles: Vec<Tile>) -> Result<Self, JigsawError> {
        let matches = edge_matcher::find_all_matches(&tiles);
        let adjacency = Adjacency::from_matches(&matches);
        let classification = Classification::new(tiles.iter().map(Tile::id), &matches)?;
        Ok(Self {
            tiles,
            matches,
            adjacency,
            classification,
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Product of the four corner tile ids
    pub fn corner_product(&self) -> Result<u128, JigsawError> {
        self.classification.corner_product()
    }

    /// Place every tile id on the square layout
    pub fn arrange(&self) -> Result<Grid<TileId>, JigsawError> {
        let mut positions = perimeter::trace_perimeter(
            self.tiles.len(),
            &self.classification,
            &self.adjacency,
        )?;
        interior::fill_interior(&mut positions, &self.classification, &self.adjacency)?;
        positions.into_layout()
    }

    /// Arrange, orient and stitch the tiles into the borderless image
    pub fn assemble(&self) -> Result<Grid<bool>, JigsawError> {
        let layout = self.arrange()?;
        assembler::assemble(&self.tiles, &layout)
    }
}
