//! Tile orientation against placed neighbours and border stripping

use super::JigsawError;
use super::edge_matcher::edges_fit;
use super::tile::{Tile, TileId};
use crate::utils::grid::{Grid, Orientation, Side};
use std::collections::HashMap;

/// Orient every tile of `layout` and stitch their interiors together
pub fn assemble(tiles: &[Tile], layout: &Grid<TileId>) -> Result<Grid<bool>, JigsawError> {
    let oriented = orient_tiles(tiles, layout)?;
    stitch(&oriented)
}

/// Turn each placed tile until its edges agree with its neighbours
///
/// Positions are visited in raster order. The tile at (0, 0) has no oriented
/// neighbour yet, so its right and bottom edges only have to appear somewhere
/// on the tiles placed at (0, 1) and (1, 0). Every later tile must repeat the
/// right edge of its left neighbour and the bottom edge of its top neighbour
/// exactly. A tile gets at most one try per orientation.
pub fn orient_tiles(tiles: &[Tile], layout: &Grid<TileId>) -> Result<Grid<Tile>, JigsawError> {
    let by_id: HashMap<TileId, &Tile> = tiles.iter().map(|tile| (tile.id(), tile)).collect();
    if let Some(((row, col), &id)) = layout.iter_cells().find(|(_, id)| !by_id.contains_key(*id)) {
        return Err(JigsawError::OrientationSearchExhausted { id, row, col });
    }
    let mut oriented = layout.map(|id| Tile::clone(by_id[id]));

    for ((row, col), &id) in layout.iter_cells() {
        let left = col.checked_sub(1).map(|left| oriented[(row, left)].edge(Side::Right));
        let top = row.checked_sub(1).map(|top| oriented[(top, col)].edge(Side::Bottom));
        let fits = |tile: &Tile| {
            if (row, col) == (0, 0) {
                return fits_anchor(tile, layout, &by_id);
            }
            left.as_ref().is_none_or(|edge| &tile.edge(Side::Left) == edge)
                && top.as_ref().is_none_or(|edge| &tile.edge(Side::Top) == edge)
        };

        let tile = &mut oriented[(row, col)];
        let mut attempts = 1;
        while !fits(&*tile) {
            if attempts == Orientation::ALL.len() {
                return Err(JigsawError::OrientationSearchExhausted { id, row, col });
            }
            tile.next_permutation();
            attempts += 1;
        }
    }
    Ok(oriented)
}

fn fits_anchor(tile: &Tile, layout: &Grid<TileId>, by_id: &HashMap<TileId, &Tile>) -> bool {
    let faces = |side: Side, row: usize, col: usize| match layout.get(row, col) {
        None => true,
        Some(id) => by_id.get(id).is_some_and(|neighbour| {
            let edge = tile.edge(side);
            neighbour.base().edges().iter().any(|other| edges_fit(&edge, other))
        }),
    };
    faces(Side::Right, 0, 1) && faces(Side::Bottom, 1, 0)
}

/// Concatenate the tile interiors row by row into one bitmap
///
/// Tile (row, col) with side `t` lands at `(row * (t - 2), col * (t - 2))`.
pub fn stitch(oriented: &Grid<Tile>) -> Result<Grid<bool>, JigsawError> {
    let first = &oriented[(0, 0)];
    let expected = first.side_len();
    if let Some(odd) = oriented.iter().find(|tile| tile.side_len() != expected) {
        return Err(JigsawError::TileSizeMismatch {
            id: odd.id(),
            side: odd.side_len(),
            expected,
        });
    }

    let too_small = || JigsawError::TileTooSmall {
        id: first.id(),
        side: expected,
    };
    let interiors = oriented
        .iter()
        .map(|tile| tile.grid().interior().ok_or_else(too_small))
        .collect::<Result<Vec<_>, _>>()?;
    // Every interior exists, so `inner` is at least 1 and the image is never empty
    let inner = expected - 2;
    let cols = oriented.cols();

    Grid::from_fn(oriented.rows() * inner, cols * inner, |row, col| {
        interiors[(row / inner) * cols + col / inner][(row % inner, col % inner)]
    })
    .ok_or_else(too_small)
}
