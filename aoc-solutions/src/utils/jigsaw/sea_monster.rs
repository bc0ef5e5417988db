//! Marker pattern scan over an assembled image

use crate::utils::grid::{Grid, Orientation};
use std::sync::LazyLock;

/// The sea monster; `#` cells must be on, every other cell is ignored
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

static SEA_MONSTER_MARKER: LazyLock<Marker> = LazyLock::new(|| {
    Marker::from_pattern(&SEA_MONSTER).expect("sea monster pattern has on cells")
});

/// A rectangular pattern given by the offsets of its on cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    rows: usize,
    cols: usize,
    offsets: Vec<(usize, usize)>,
}

impl Marker {
    /// Build a marker from text rows; `None` if no cell is `#`
    pub fn from_pattern(lines: &[&str]) -> Option<Self> {
        let offsets: Vec<(usize, usize)> = lines
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        if offsets.is_empty() {
            return None;
        }
        Some(Self {
            rows: lines.len(),
            cols: lines.iter().map(|line| line.chars().count()).max().unwrap_or(0),
            offsets,
        })
    }

    pub fn sea_monster() -> &'static Marker {
        &SEA_MONSTER_MARKER
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells the marker requires to be on
    pub fn on_cells(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the marker's top-left corner fits at (row, col)
    pub fn matches_at(&self, image: &Grid<bool>, row: usize, col: usize) -> bool {
        self.offsets
            .iter()
            .all(|&(d_row, d_col)| image.get(row + d_row, col + d_col) == Some(&true))
    }

    /// Top-left corners of every occurrence, overlapping ones included
    pub fn occurrences(&self, image: &Grid<bool>) -> Vec<(usize, usize)> {
        let (Some(last_row), Some(last_col)) = (
            image.rows().checked_sub(self.rows),
            image.cols().checked_sub(self.cols),
        ) else {
            return Vec::new();
        };
        (0..=last_row)
            .flat_map(|row| (0..=last_col).map(move |col| (row, col)))
            .filter(|&(row, col)| self.matches_at(image, row, col))
            .collect()
    }

    /// First orientation of `image` holding the marker, with its occurrence count
    pub fn find(&self, image: &Grid<bool>) -> Option<(Orientation, usize)> {
        Orientation::ALL.into_iter().find_map(|orientation| {
            let count = self.occurrences(&orientation.apply(image)).len();
            (count > 0).then_some((orientation, count))
        })
    }
}

/// On cells of `image` not accounted for by sea monsters
///
/// Every occurrence removes its 15 cells from the total, so overlapping
/// monsters would be subtracted twice.
pub fn water_roughness(image: &Grid<bool>) -> usize {
    let marker = Marker::sea_monster();
    let found = marker.find(image).map_or(0, |(_, count)| count);
    image.count(&true).saturating_sub(found * marker.on_cells())
}
