#![cfg_attr(not(feature = "std"), no_std)]
//! Two-player hot-seat battleship played over a text console.
//!
//! The game logic (grids, random fleet placement, coordinate validation,
//! shot resolution and turn management) has no I/O and builds without `std`.
//! The console loop and logger need the default `std` feature.

mod common;
mod config;
mod coord;
mod game;
mod grid;
mod placement;
pub mod prelude;
mod ship;
mod shot;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use ship::*;
pub use shot::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
