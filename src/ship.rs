//! Ship definitions and placement geometry.

use core::fmt;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right of its origin.
    Horizontal,
    /// Extends downward from its origin.
    Vertical,
}

impl Orientation {
    /// Map a coin flip onto an orientation; `true` is horizontal.
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A straight run of `length` cells starting at (`row`, `col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        Placement {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Origin of the run (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether every cell of the run lies on an `n×n` grid.
    pub fn fits(&self, n: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row < n && self.col + self.length <= n,
            Orientation::Vertical => self.col < n && self.row + self.length <= n,
        }
    }

    /// Cells covered by the run, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            length,
            orientation,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:?} x{}",
            (b'A' + self.col as u8) as char,
            self.row + 1,
            self.orientation,
            self.length
        )
    }
}
