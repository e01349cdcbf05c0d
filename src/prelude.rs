//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_coordinate, Coordinate, Game, GameError, Mark, OceanCell, OceanGrid, Phase, PlayerId,
    ShotResult, TrackingGrid, GRID_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console};
