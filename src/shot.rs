use log::trace;

use crate::common::ShotResult;
use crate::coord::Coordinate;
use crate::grid::{Grid, Mark, OceanCell};

/// Apply one shot at `target` against `opponent`, recording it on `tracking`.
///
/// The caller guarantees `target` is on the grid and has not been fired upon
/// (see [`crate::check_target`]). A struck `Ship` cell becomes `HitShip`;
/// the opponent grid is otherwise untouched. The tracking cell is always
/// written exactly once.
pub fn resolve_shot<const N: usize>(
    opponent: &mut Grid<OceanCell, N>,
    tracking: &mut Grid<Mark, N>,
    target: Coordinate,
) -> ShotResult {
    let Coordinate { row, col } = target;
    debug_assert_eq!(tracking.get(row, col), Mark::Unknown);

    let result = if opponent.get(row, col) == OceanCell::Ship {
        opponent.set(row, col, OceanCell::HitShip);
        tracking.set(row, col, Mark::Hit);
        ShotResult::Hit
    } else {
        tracking.set(row, col, Mark::Miss);
        ShotResult::Miss
    };
    trace!("shot at {} -> {:?}", target, result);
    result
}
