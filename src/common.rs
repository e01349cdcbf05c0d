//! Common types for the game: shot results and errors.

use core::fmt;

use crate::coord::Coordinate;

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The shot struck an undamaged ship segment.
    Hit,
    /// The shot landed in open water.
    Miss,
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Hit => f.write_str("HIT!"),
            ShotResult::Miss => f.write_str("MISS!"),
        }
    }
}

/// Reasons a coordinate token is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Token is not 2 or 3 bytes long.
    WrongLength { len: usize },
    /// First character is not a column letter on the grid.
    InvalidColumn(char),
    /// Remainder after the column letter is not all decimal digits.
    InvalidRow,
    /// Row number parsed but falls outside 1..=GRID_SIZE.
    RowOutOfRange(u32),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::WrongLength { len } => {
                write!(f, "expected a column letter and a row number, got {} characters", len)
            }
            CoordError::InvalidColumn(c) => write!(f, "invalid column {:?}", c),
            CoordError::InvalidRow => write!(f, "row must be a number"),
            CoordError::RowOutOfRange(row) => write!(f, "row {} is off the grid", row),
        }
    }
}

/// Errors returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target token failed validation.
    InvalidCoordinate(CoordError),
    /// Target was already fired upon by this player.
    AlreadyTargeted(Coordinate),
    /// A ship could not be placed within the attempt budget.
    UnableToPlaceShip { ship: &'static str },
    /// Fleets have already been placed.
    AlreadySetUp,
    /// No turn is in progress (setup pending or game finished).
    NotInPlay,
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::InvalidCoordinate(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            GameError::AlreadyTargeted(c) => write!(f, "{} was already targeted", c),
            GameError::UnableToPlaceShip { ship } => write!(f, "Unable to place {}", ship),
            GameError::AlreadySetUp => write!(f, "Fleets are already placed"),
            GameError::NotInPlay => write!(f, "No turn is in progress"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidCoordinate(e) => Some(e),
            _ => None,
        }
    }
}
