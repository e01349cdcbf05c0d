use console_battleship::{
    resolve_shot, validate_target, CoordError, Coordinate, GameError, Mark, OceanCell, OceanGrid,
    ShotResult, TrackingGrid,
};

/// Grid with a two-cell ship covering A1 and A2.
fn two_cell_ship() -> OceanGrid {
    let mut ocean = OceanGrid::new();
    ocean.set(0, 0, OceanCell::Ship);
    ocean.set(1, 0, OceanCell::Ship);
    ocean
}

#[test]
fn hit_marks_both_grids() {
    let mut ocean = two_cell_ship();
    let mut tracking = TrackingGrid::new();

    let result = resolve_shot(&mut ocean, &mut tracking, Coordinate::new(0, 0));
    assert_eq!(result, ShotResult::Hit);
    assert_eq!(ocean.get(0, 0), OceanCell::HitShip);
    assert_eq!(tracking.get(0, 0), Mark::Hit);
    assert_eq!(ocean.ships_remaining(), 1);
}

#[test]
fn miss_only_marks_tracking_grid() {
    let mut ocean = two_cell_ship();
    let before = ocean;
    let mut tracking = TrackingGrid::new();

    let result = resolve_shot(&mut ocean, &mut tracking, Coordinate::new(5, 5));
    assert_eq!(result, ShotResult::Miss);
    assert_eq!(ocean, before);
    assert_eq!(tracking.get(5, 5), Mark::Miss);
    assert_eq!(tracking.shots_taken(), 1);
}

#[test]
fn sinking_a_two_cell_ship() {
    let mut ocean = two_cell_ship();
    let mut tracking = TrackingGrid::new();

    let first = validate_target("A1", &tracking).unwrap();
    assert_eq!(resolve_shot(&mut ocean, &mut tracking, first), ShotResult::Hit);

    let snapshot = (ocean, tracking);
    assert_eq!(
        validate_target("A1", &tracking),
        Err(GameError::AlreadyTargeted(Coordinate::new(0, 0)))
    );
    assert_eq!((ocean, tracking), snapshot);

    let second = validate_target("A2", &tracking).unwrap();
    assert_eq!(resolve_shot(&mut ocean, &mut tracking, second), ShotResult::Hit);
    assert_eq!(ocean.ships_remaining(), 0);
    assert!(ocean.all_sunk());
    assert_eq!(tracking.count(Mark::Hit), 2);
}

#[test]
fn out_of_range_column_never_reaches_the_grids() {
    let ocean = two_cell_ship();
    let tracking = TrackingGrid::new();
    assert_eq!(
        validate_target("K1", &tracking),
        Err(GameError::InvalidCoordinate(CoordError::InvalidColumn('K')))
    );
    assert_eq!(ocean, two_cell_ship());
    assert_eq!(tracking, TrackingGrid::new());
}
