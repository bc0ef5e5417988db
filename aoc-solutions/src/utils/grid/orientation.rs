//! The 8 symmetries of a square grid

use super::Grid;

/// One of the 8 discrete orientations of a square grid
///
/// Applying an orientation turns the grid clockwise by the given number of
/// quarter turns, then mirrors every row for the `*Mirrored` variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Mirrored,
    Rotate90Mirrored,
    Rotate180Mirrored,
    Rotate270Mirrored,
}

impl Orientation {
    /// Every orientation, in the order visited by [`Orientation::next`]
    pub const ALL: [Orientation; 8] = [
        Orientation::Identity,
        Orientation::Rotate90,
        Orientation::Rotate180,
        Orientation::Rotate270,
        Orientation::Mirrored,
        Orientation::Rotate90Mirrored,
        Orientation::Rotate180Mirrored,
        Orientation::Rotate270Mirrored,
    ];

    /// Number of clockwise quarter turns
    pub fn quarter_turns(self) -> usize {
        match self {
            Orientation::Identity | Orientation::Mirrored => 0,
            Orientation::Rotate90 | Orientation::Rotate90Mirrored => 1,
            Orientation::Rotate180 | Orientation::Rotate180Mirrored => 2,
            Orientation::Rotate270 | Orientation::Rotate270Mirrored => 3,
        }
    }

    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::Mirrored
                | Orientation::Rotate90Mirrored
                | Orientation::Rotate180Mirrored
                | Orientation::Rotate270Mirrored
        )
    }

    /// Successor in the orientation cycle; 8 steps return to the start
    pub fn next(self) -> Orientation {
        match self {
            Orientation::Identity => Orientation::Rotate90,
            Orientation::Rotate90 => Orientation::Rotate180,
            Orientation::Rotate180 => Orientation::Rotate270,
            Orientation::Rotate270 => Orientation::Mirrored,
            Orientation::Mirrored => Orientation::Rotate90Mirrored,
            Orientation::Rotate90Mirrored => Orientation::Rotate180Mirrored,
            Orientation::Rotate180Mirrored => Orientation::Rotate270Mirrored,
            Orientation::Rotate270Mirrored => Orientation::Identity,
        }
    }

    /// The 8 orientations of one full cycle, starting with `self`
    pub fn cycle(self) -> impl Iterator<Item = Orientation> {
        std::iter::successors(Some(self), |orientation| Some(orientation.next()))
            .take(Self::ALL.len())
    }

    /// Transformed copy of `grid`; the input is left untouched
    pub fn apply<T: Clone>(self, grid: &Grid<T>) -> Grid<T> {
        let mut oriented = grid.clone();
        for _ in 0..self.quarter_turns() {
            oriented.rotate();
        }
        if self.is_mirrored() {
            oriented.reflect();
        }
        oriented
    }
}
