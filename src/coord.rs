//! Target coordinates and the validation of typed input.
//!
//! A target is written as a column letter followed by a row number, e.g.
//! `A1` for the top-left cell and `J10` for the bottom-right one. Parsing is
//! strict: exactly one uppercase letter in `A..=J` and one or two digits
//! forming a number in `1..=10`, with nothing before or after.

use core::fmt;
use core::str::FromStr;

use crate::common::{CoordError, GameError};
use crate::config::GRID_SIZE;
use crate::grid::{Mark, TrackingGrid};

/// Zero-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }
}

/// Formats back into the typed form, `A1` for (0, 0).
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

/// Parse a raw token into a coordinate on the standard grid.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, CoordError> {
    let bytes = input.as_bytes();
    if !(2..=3).contains(&bytes.len()) {
        return Err(CoordError::WrongLength { len: input.chars().count() });
    }

    let letter = bytes[0];
    let last_col = b'A' + (GRID_SIZE as u8 - 1);
    if !(b'A'..=last_col).contains(&letter) {
        let shown = input.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(CoordError::InvalidColumn(shown));
    }

    let digits = &bytes[1..];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(CoordError::InvalidRow);
    }
    let number = digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
    if number == 0 || number as usize > GRID_SIZE {
        return Err(CoordError::RowOutOfRange(number));
    }

    Ok(Coordinate::new(number as usize - 1, usize::from(letter - b'A')))
}

/// Reject a target the tracking grid already records a shot for.
pub fn check_target(
    tracking: &TrackingGrid,
    target: Coordinate,
) -> Result<Coordinate, GameError> {
    if tracking.get(target.row, target.col) == Mark::Unknown {
        Ok(target)
    } else {
        Err(GameError::AlreadyTargeted(target))
    }
}

/// Parse `input` and run the re-fire check in one step.
pub fn validate_target(input: &str, tracking: &TrackingGrid) -> Result<Coordinate, GameError> {
    let target = parse_coordinate(input)?;
    check_target(tracking, target)
}
