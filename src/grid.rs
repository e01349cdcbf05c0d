//! Fixed-size square grids of cell states.
//!
//! A player owns two of them: an [`OceanGrid`] holding their own fleet and a
//! [`TrackingGrid`] recording what they have learned about the opponent.
//! Grids perform no bounds checking of their own; indices come from the
//! coordinate validator or the placement engine's bounds arithmetic, and an
//! out-of-range index is a caller bug that panics.

use core::fmt;

use crate::config::GRID_SIZE;

/// A value that can live in a grid cell.
pub trait Cell: Copy + Default + PartialEq {
    /// Character used when the grid is rendered.
    fn glyph(self) -> char;
}

/// State of a cell on a player's own grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OceanCell {
    #[default]
    Water,
    /// Undamaged ship segment.
    Ship,
    /// Ship segment that has been struck.
    HitShip,
}

impl Cell for OceanCell {
    fn glyph(self) -> char {
        match self {
            OceanCell::Water => '~',
            OceanCell::Ship => 'S',
            OceanCell::HitShip => 'X',
        }
    }
}

/// State of a cell on a tracking grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    /// Never fired upon.
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl Cell for Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Unknown => '~',
            Mark::Hit => 'X',
            Mark::Miss => '0',
        }
    }
}

/// An `N×N` matrix of cells, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid<C, const N: usize> {
    cells: [[C; N]; N],
}

/// A player's own grid holding their fleet.
pub type OceanGrid = Grid<OceanCell, GRID_SIZE>;
/// A player's record of shots fired at the opponent.
pub type TrackingGrid = Grid<Mark, GRID_SIZE>;

impl<C: Cell, const N: usize> Grid<C, N> {
    /// Create a grid with every cell in its default state.
    pub fn new() -> Self {
        Grid {
            cells: [[C::default(); N]; N],
        }
    }

    /// Cell state at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        self.cells[row][col]
    }

    /// Overwrite the cell at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: C) {
        self.cells[row][col] = cell;
    }

    /// Number of cells currently equal to `cell`.
    pub fn count(&self, cell: C) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Iterator over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &cell)| (r, c, cell))
        })
    }
}

impl<C: Cell, const N: usize> Default for Grid<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Grid<OceanCell, N> {
    /// Undamaged ship segments left on the grid.
    pub fn ships_remaining(&self) -> usize {
        self.count(OceanCell::Ship)
    }

    /// Returns `true` once no undamaged segment is left.
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining() == 0
    }
}

impl<const N: usize> Grid<Mark, N> {
    /// Number of cells that have been fired upon.
    pub fn shots_taken(&self) -> usize {
        N * N - self.count(Mark::Unknown)
    }
}

/// Column headers `A`.. then one line per row labelled from 1.
impl<C: Cell, const N: usize> fmt::Display for Grid<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for c in 0..N {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{:>2} ", r + 1)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
