//! Randomized fleet placement.
//!
//! Each ship is placed by sampling a start row, a start column and an
//! orientation until the sampled run fits on the grid over open water. The
//! random draws go through [`PlacementRng`] so tests can script them.

use log::{debug, trace};
use rand::Rng;

use crate::common::GameError;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::grid::{Grid, OceanCell};
use crate::ship::{Orientation, Placement, ShipType};

/// Source of the random draws used by placement.
pub trait PlacementRng {
    /// Uniform index in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform coin flip.
    fn next_bool(&mut self) -> bool;
}

impl<R: Rng> PlacementRng for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.random()
    }
}

/// Whether `placement` lies on the grid and covers only water.
pub fn can_place<const N: usize>(grid: &Grid<OceanCell, N>, placement: &Placement) -> bool {
    placement.fits(N)
        && placement
            .cells()
            .all(|(r, c)| grid.get(r, c) == OceanCell::Water)
}

/// Sample placements for `ship` until one is feasible, then commit it.
pub fn place_ship<R, const N: usize>(
    grid: &mut Grid<OceanCell, N>,
    rng: &mut R,
    ship: ShipType,
) -> Result<Placement, GameError>
where
    R: PlacementRng + ?Sized,
{
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let row = rng.next_index(N);
        let col = rng.next_index(N);
        let orientation = Orientation::from_horizontal(rng.next_bool());
        let placement = Placement::new(row, col, ship.length(), orientation);
        if !can_place(grid, &placement) {
            trace!("{}: rejected {}", ship.name(), placement);
            continue;
        }
        for (r, c) in placement.cells() {
            grid.set(r, c, OceanCell::Ship);
        }
        debug!("{} placed at {} after {} attempt(s)", ship.name(), placement, attempt);
        return Ok(placement);
    }
    Err(GameError::UnableToPlaceShip { ship: ship.name() })
}

/// Place the whole fleet, longest ship first, returning where each landed.
pub fn place_fleet<R, const N: usize>(
    grid: &mut Grid<OceanCell, N>,
    rng: &mut R,
) -> Result<[Placement; NUM_SHIPS], GameError>
where
    R: PlacementRng + ?Sized,
{
    let mut placed = [Placement::new(0, 0, 0, Orientation::Horizontal); NUM_SHIPS];
    for (slot, ship) in placed.iter_mut().zip(FLEET) {
        *slot = place_ship(grid, rng, ship)?;
    }
    Ok(placed)
}
