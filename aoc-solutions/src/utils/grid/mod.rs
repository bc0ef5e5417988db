//! Fixed-size 2D buffer with edge extraction and orientation transforms
//!
//! [`Grid`] wraps an [`ndarray::Array2`] and is used both for puzzle bitmaps (`Grid<bool>`)
//! and for bookkeeping layouts such as a tile placement map
//! (`Grid<Option<TileId>>`). The transforms needed to re-orient square
//! tiles live here:
//!
//! - [`Grid::rotate`] turns the buffer 90° clockwise by swapping the axes and
//!   inverting the column axis, without copying cells
//! - [`Grid::reflect`] mirrors every row by inverting the column axis
//! - [`Orientation::apply`] combines both into one of the 8 symmetries of a square
//!
//! # Example
//!
//! ```
//! use aoc_solutions::utils::grid::{Grid, Orientation, Side};
//!
//! let grid = Grid::parse_bitmap("#..\n.#.\n..#").unwrap();
//! assert_eq!(grid.edge(Side::Right), vec![false, false, true]);
//!
//! let turned = Orientation::Rotate90.apply(&grid);
//! assert_eq!(turned.edge(Side::Top), vec![false, false, true]);
//! ```

mod orientation;

pub use orientation::Orientation;

use ndarray::{Array2, ArrayView1, Axis, s};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One side of a grid, in the fixed scan order top, right, bottom, left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in scan order
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side in [`Side::ALL`]
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// The next side walking clockwise (top → right → bottom → left → top)
    pub fn next_clockwise(self) -> Side {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
        }
    }

    /// The side facing this one on a neighbouring grid
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Row/column step taken when walking along this side clockwise
    ///
    /// Walking the top side moves right, the right side moves down, the bottom
    /// side moves left and the left side moves up.
    pub fn step(self) -> (isize, isize) {
        match self {
            Side::Top => (0, 1),
            Side::Right => (1, 0),
            Side::Bottom => (0, -1),
            Side::Left => (-1, 0),
        }
    }
}

/// 2D buffer with non-zero dimensions, indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Build a grid from a flat row-major buffer
    ///
    /// Returns `None` if a dimension is zero or the buffer length does not
    /// equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Array2::from_shape_vec((rows, cols), cells)
            .ok()
            .map(|cells| Self { cells })
    }

    /// Build a grid from nested rows; `None` for empty or ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let row_count = rows.len();
        let cols = rows.first()?.len();
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Self::from_vec(row_count, cols, rows.into_iter().flatten().collect())
    }

    /// Build a grid by evaluating `f(row, col)` for every cell
    ///
    /// `f` is never called when a dimension is zero.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| f(row, col));
        Some(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.cells.is_square()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get((row, col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut((row, col))
    }

    /// View of one row
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`, like slice indexing.
    pub fn row(&self, row: usize) -> ArrayView1<'_, T> {
        self.cells.row(row)
    }

    /// Iterate over rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> + '_ {
        self.cells.rows().into_iter()
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// Iterate over `((row, col), cell)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.cells.indexed_iter()
    }

    /// Grid of the same shape holding `f(cell)` for every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.map(f),
        }
    }

    /// Mirror every row in place (reflection about the vertical axis)
    ///
    /// Applying it twice restores the original buffer.
    pub fn reflect(&mut self) {
        self.cells.invert_axis(Axis(1));
    }

    /// Turn the buffer 90° clockwise; four turns restore the original
    pub fn rotate(&mut self) {
        self.cells.swap_axes(0, 1);
        self.cells.invert_axis(Axis(1));
    }

    /// Mirror the buffer about its main diagonal
    pub fn transpose(&mut self) {
        self.cells.swap_axes(0, 1);
    }
}

impl<T: Clone> Grid<T> {
    /// Grid of the given size with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            cells: Array2::from_elem((rows, cols), value),
        })
    }

    /// Cells along one side
    ///
    /// Top and bottom are read left to right, left and right top to bottom.
    pub fn edge(&self, side: Side) -> Vec<T> {
        match side {
            Side::Top => self.cells.row(0).to_vec(),
            Side::Bottom => self.cells.row(self.rows() - 1).to_vec(),
            Side::Left => self.cells.column(0).to_vec(),
            Side::Right => self.cells.column(self.cols() - 1).to_vec(),
        }
    }

    /// All four edges in [`Side::ALL`] order
    pub fn edges(&self) -> [Vec<T>; 4] {
        Side::ALL.map(|side| self.edge(side))
    }

    /// Copy of the buffer without its outermost ring of cells
    ///
    /// Returns `None` unless the grid is at least 3×3.
    pub fn interior(&self) -> Option<Grid<T>> {
        if self.rows() < 3 || self.cols() < 3 {
            return None;
        }
        Some(Self {
            cells: self.cells.slice(s![1..-1, 1..-1]).to_owned(),
        })
    }
}

impl<T: PartialEq> Grid<T> {
    /// Number of cells equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|cell| *cell == value).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[[row, col]]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[[row, col]]
    }
}

impl Grid<bool> {
    /// Parse `#` (on) and `.` (off) rows into a bitmap
    ///
    /// Returns `None` for empty input, ragged rows or any other character.
    pub fn parse_bitmap(text: &str) -> Option<Self> {
        let rows = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '#' => Some(true),
                        '.' => Some(false),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
