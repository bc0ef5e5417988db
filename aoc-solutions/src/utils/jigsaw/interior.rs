//! Placement of interior tiles once the outer ring is known

use super::JigsawError;
use super::classifier::{Classification, TileType};
use super::edge_matcher::Adjacency;
use super::perimeter::PositionGrid;
use super::tile::TileId;
use std::collections::BTreeSet;

/// Fill the inner positions in raster order
///
/// The tile at (row, col) must match both the tile to its left and the tile
/// above it, both of which are already placed when positions are visited
/// row by row. Only unplaced interior tiles are considered, and exactly one
/// of them must qualify.
pub fn fill_interior(
    positions: &mut PositionGrid,
    classification: &Classification,
    adjacency: &Adjacency,
) -> Result<(), JigsawError> {
    let side = positions.side();
    let mut pool: BTreeSet<TileId> = classification.ids_of(TileType::Interior).collect();

    for row in 1..side.saturating_sub(1) {
        for col in 1..side - 1 {
            let (Some(left), Some(top)) = (positions.get(row, col - 1), positions.get(row - 1, col))
            else {
                return Err(JigsawError::InteriorAmbiguity {
                    row,
                    col,
                    candidates: Vec::new(),
                });
            };

            let fits_left = adjacency.neighborhood(left);
            let fits_top = adjacency.neighborhood(top);
            let candidates: Vec<TileId> = pool
                .iter()
                .copied()
                .filter(|id| fits_left.contains(id) && fits_top.contains(id))
                .collect();

            match candidates.as_slice() {
                [id] => {
                    pool.remove(id);
                    positions.place(row, col, *id);
                }
                _ => return Err(JigsawError::InteriorAmbiguity { row, col, candidates }),
            }
        }
    }
    Ok(())
}
