//! Placement of corner and border tiles around the outer ring

use super::JigsawError;
use super::classifier::{Classification, TileType};
use super::edge_matcher::Adjacency;
use super::tile::TileId;
use crate::utils::grid::{Grid, Side};
use std::collections::BTreeSet;

/// Square map from (row, col) to the tile placed there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGrid {
    cells: Grid<Option<TileId>>,
}

impl PositionGrid {
    /// Empty grid with `side` positions per axis; `None` for a zero side
    pub fn new(side: usize) -> Option<Self> {
        Grid::filled(side, side, None).map(|cells| Self { cells })
    }

    /// Empty grid able to hold `tiles` tiles in a square
    pub fn for_tile_count(tiles: usize) -> Result<Self, JigsawError> {
        let side = tiles.isqrt();
        if side * side != tiles {
            return Err(JigsawError::NotSquare { tiles });
        }
        Self::new(side).ok_or(JigsawError::NotSquare { tiles })
    }

    pub fn side(&self) -> usize {
        self.cells.rows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get(row, col).copied().flatten()
    }

    /// Put `id` at an empty position; `false` if out of bounds or occupied
    pub fn place(&mut self, row: usize, col: usize, id: TileId) -> bool {
        match self.cells.get_mut(row, col) {
            Some(cell @ None) => {
                *cell = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn is_on_perimeter(&self, row: usize, col: usize) -> bool {
        let last = self.side() - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    /// Number of positions on the outer ring
    pub fn perimeter_len(&self) -> usize {
        match self.side() {
            1 => 1,
            side => 4 * side - 4,
        }
    }

    /// Number of occupied positions
    pub fn placed(&self) -> usize {
        self.side() * self.side() - self.cells.count(&None)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.count(&None) == 0
    }

    /// The finished layout; fails at the first empty position
    pub fn into_layout(self) -> Result<Grid<TileId>, JigsawError> {
        if let Some(((row, col), _)) = self.cells.iter_cells().find(|(_, cell)| cell.is_none()) {
            return Err(JigsawError::EmptyPosition { row, col });
        }
        Ok(self.cells.map(|cell| cell.unwrap_or_default()))
    }
}

/// Walk the outer ring from the smallest corner id, placing each ring tile
///
/// The walk starts at (0, 0) heading along the top side. From each tile it
/// moves to an unplaced border partner, or to an unplaced corner partner if
/// there is none, and turns clockwise after placing a corner. It ends when
/// the current tile has no unplaced ring partner left.
pub fn trace_perimeter(
    tile_count: usize,
    classification: &Classification,
    adjacency: &Adjacency,
) -> Result<PositionGrid, JigsawError> {
    let mut positions = PositionGrid::for_tile_count(tile_count)?;
    let corners = classification.corners();
    let start = *corners
        .first()
        .ok_or(JigsawError::CornerCount { found: 0 })?;

    positions.place(0, 0, start);
    let mut placed = BTreeSet::from([start]);
    let (mut row, mut col) = (0usize, 0usize);
    let mut heading = Side::Top;
    let mut current = start;

    loop {
        let ring_partners: Vec<(TileId, TileType)> = adjacency
            .partners(current)
            .iter()
            .filter_map(|&id| {
                classification
                    .tile_type(id)
                    .filter(|tile_type| tile_type.is_on_perimeter())
                    .map(|tile_type| (id, tile_type))
            })
            .collect();
        if ring_partners.is_empty() {
            return Err(JigsawError::PerimeterClosure {
                id: current,
                placed: placed.len(),
            });
        }

        let unplaced = |wanted: TileType| {
            ring_partners
                .iter()
                .find(|(id, tile_type)| *tile_type == wanted && !placed.contains(id))
                .map(|&(id, _)| id)
        };
        let Some(next) = unplaced(TileType::Border).or_else(|| unplaced(TileType::Corner)) else {
            break;
        };

        let (d_row, d_col) = heading.step();
        let target = row
            .checked_add_signed(d_row)
            .zip(col.checked_add_signed(d_col));
        let Some((next_row, next_col)) = target.filter(|&(r, c)| positions.place(r, c, next)) else {
            return Err(JigsawError::PerimeterClosure {
                id: current,
                placed: placed.len(),
            });
        };

        placed.insert(next);
        (row, col, current) = (next_row, next_col, next);
        if classification.tile_type(next) == Some(TileType::Corner) {
            heading = heading.next_clockwise();
        }
    }

    if placed.len() != positions.perimeter_len() {
        return Err(JigsawError::PerimeterClosure {
            id: current,
            placed: placed.len(),
        });
    }
    Ok(positions)
}
