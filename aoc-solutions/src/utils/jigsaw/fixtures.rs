//! Synthetic puzzles with a known solution
//!
//! Tiles are cut from a lattice of border lines. Every segment of a line
//! between two lattice corners is coded with a unique bit pattern, so each
//! tile edge matches exactly one other edge, and never in both directions.
//! The cells between the lines form the image the puzzle should reassemble
//! to.

use super::edge_matcher::Match;
use super::sea_monster::SEA_MONSTER;
use super::tile::{Tile, TileId};
use crate::utils::grid::{Grid, Orientation, Side};

pub(crate) struct Puzzle {
    /// Scrambled tiles in input order
    pub tiles: Vec<Tile>,
    /// Tile ids at their true positions
    pub layout: Grid<TileId>,
    /// The expected borderless image
    pub image: Grid<bool>,
}

impl Puzzle {
    /// Puzzle over a noise image, scrambled deterministically from `seed`
    pub fn generate(side: usize, tile_side: usize, seed: usize) -> Self {
        let pixels = side * (tile_side - 2);
        let image = Grid::from_fn(pixels, pixels, |row, col| (row * 7 + col * 13 + seed) % 5 < 2)
            .expect("non-empty image");
        Self::from_image(image, tile_side, seed)
    }

    /// Puzzle that reassembles to `image`, scrambled deterministically from `seed`
    pub fn from_image(image: Grid<bool>, tile_side: usize, seed: usize) -> Self {
        let side = image.rows() / (tile_side - 2);
        let count = side * side;
        let orientations: Vec<Orientation> = (0..count)
            .map(|index| Orientation::ALL[(index * 5 + seed) % Orientation::ALL.len()])
            .collect();
        let mut order: Vec<usize> = (0..count).rev().collect();
        order.rotate_left(seed % count);
        Self::scrambled(image, tile_side, &orientations, &order)
    }

    /// Cut `image` into tiles, orient tile `i` (raster order) by
    /// `orientations[i]` and list the tiles in `order`
    pub fn scrambled(
        image: Grid<bool>,
        tile_side: usize,
        orientations: &[Orientation],
        order: &[usize],
    ) -> Self {
        let inner = tile_side - 2;
        assert!(image.is_square() && image.rows() % inner == 0);
        let side = image.rows() / inner;
        assert!(
            2 * side * (side + 1) <= 1 << (tile_side - 4),
            "{tile_side}-cell tiles cannot code every segment of a {side}x{side} puzzle"
        );

        let id_of = |index: usize| 1009 + 13 * index as TileId;
        let lattice = |row: usize, col: usize| -> bool {
            let step = tile_side - 1;
            let (line_row, line_col) = (row % step == 0, col % step == 0);
            match (line_row, line_col) {
                (true, true) => false,
                (true, false) => segment_bit(row / step * side + col / step, col % step, tile_side),
                (false, true) => segment_bit(
                    (side + 1) * side + col / step * side + row / step,
                    row % step,
                    tile_side,
                ),
                (false, false) => *image
                    .get(row / step * inner + row % step - 1, col / step * inner + col % step - 1)
                    .expect("pixel inside image"),
            }
        };

        let truth: Vec<Tile> = (0..side * side)
            .map(|index| {
                let (tile_row, tile_col) = (index / side, index % side);
                let grid = Grid::from_fn(tile_side, tile_side, |row, col| {
                    lattice(tile_row * (tile_side - 1) + row, tile_col * (tile_side - 1) + col)
                })
                .expect("non-empty tile");
                Tile::new(id_of(index), orientations[index].apply(&grid))
            })
            .collect();

        Self {
            tiles: order.iter().map(|&index| truth[index].clone()).collect(),
            layout: Grid::from_fn(side, side, |row, col| id_of(row * side + col))
                .expect("non-empty layout"),
            image,
        }
    }

    pub fn side(&self) -> usize {
        self.layout.rows()
    }

    /// Ids at the four corners of the true layout, ascending
    pub fn corner_ids(&self) -> Vec<TileId> {
        let last = self.side() - 1;
        let mut ids: Vec<TileId> = [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&(row, col)| self.layout.get(row, col).copied())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// The tiles as puzzle input text
    pub fn render_input(&self) -> String {
        self.tiles
            .iter()
            .map(Tile::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Cell `offset` (1..=tile_side-2) of segment `segment`
///
/// The first cell is always on and the last always off, so a segment read
/// backwards never equals any segment read forwards.
fn segment_bit(segment: usize, offset: usize, tile_side: usize) -> bool {
    match offset {
        1 => true,
        last if last == tile_side - 2 => false,
        bit => (segment >> (bit - 2)) & 1 == 1,
    }
}

/// A 24x24 image holding two sea monsters and three stray on cells
pub(crate) fn monster_image() -> Grid<bool> {
    let mut image = Grid::filled(24, 24, false).expect("non-empty image");
    for (top, left) in [(2, 1), (12, 3)] {
        for (row, line) in SEA_MONSTER.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    image[(top + row, left + col)] = true;
                }
            }
        }
    }
    for (row, col) in [(0, 0), (23, 23), (20, 10)] {
        image[(row, col)] = true;
    }
    image
}

/// A match between `a` and `b`; only the pairing matters to the callers
pub(crate) fn link(a: TileId, b: TileId) -> Match {
    Match {
        a,
        b,
        a_side: Side::Right,
        b_side: Side::Left,
        reversed: false,
    }
}

/// Matches of a `side` x `side` arrangement with ids `row * side + col + 1`
///
/// Each position links to its right neighbour, then to the one below it.
pub(crate) fn square_links(side: u32) -> Vec<Match> {
    let id = |row: u32, col: u32| row * side + col + 1;
    let mut links = Vec::new();
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                links.push(link(id(row, col), id(row, col + 1)));
            }
            if row + 1 < side {
                links.push(link(id(row, col), id(row + 1, col)));
            }
        }
    }
    links
}
