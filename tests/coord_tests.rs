use console_battleship::{
    check_target, parse_coordinate, validate_target, CoordError, Coordinate, GameError, Mark,
    TrackingGrid,
};

#[test]
fn corners_map_to_zero_based_indices() {
    assert_eq!(parse_coordinate("A1"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinate("J10"), Ok(Coordinate::new(9, 9)));
    assert_eq!(parse_coordinate("J1"), Ok(Coordinate::new(0, 9)));
    assert_eq!(parse_coordinate("A10"), Ok(Coordinate::new(9, 0)));
}

#[test]
fn letter_selects_column_and_number_selects_row() {
    assert_eq!(parse_coordinate("E7"), Ok(Coordinate::new(6, 4)));
    assert_eq!(parse_coordinate("A2"), Ok(Coordinate::new(1, 0)));
    assert_eq!(parse_coordinate("B1"), Ok(Coordinate::new(0, 1)));
}

#[test]
fn zero_padded_row_is_accepted() {
    assert_eq!(parse_coordinate("C05"), Ok(Coordinate::new(4, 2)));
}

#[test]
fn malformed_tokens_are_rejected() {
    let cases = [
        ("", CoordError::WrongLength { len: 0 }),
        ("A", CoordError::WrongLength { len: 1 }),
        ("A100", CoordError::WrongLength { len: 4 }),
        ("K1", CoordError::InvalidColumn('K')),
        ("a1", CoordError::InvalidColumn('a')),
        (" A1", CoordError::InvalidColumn(' ')),
        ("1A", CoordError::InvalidColumn('1')),
        ("AA1", CoordError::InvalidRow),
        ("A1 ", CoordError::InvalidRow),
        ("A-1", CoordError::InvalidRow),
        ("A0", CoordError::RowOutOfRange(0)),
        ("A00", CoordError::RowOutOfRange(0)),
        ("A11", CoordError::RowOutOfRange(11)),
        ("J99", CoordError::RowOutOfRange(99)),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_coordinate(input), Err(expected), "input {:?}", input);
    }
}

#[test]
fn non_ascii_input_is_rejected() {
    assert!(parse_coordinate("É1").is_err());
    assert!(parse_coordinate("A١").is_err());
}

#[test]
fn display_and_from_str_agree() {
    let coord: Coordinate = "H4".parse().unwrap();
    assert_eq!(coord, Coordinate::new(3, 7));
    assert_eq!(coord.to_string(), "H4");
    assert_eq!(Coordinate::new(9, 9).to_string(), "J10");
}

#[test]
fn refire_check_uses_tracking_grid() {
    let mut tracking = TrackingGrid::new();
    let target = Coordinate::new(2, 3);
    assert_eq!(check_target(&tracking, target), Ok(target));

    tracking.set(2, 3, Mark::Miss);
    assert_eq!(
        check_target(&tracking, target),
        Err(GameError::AlreadyTargeted(target))
    );
    assert_eq!(
        validate_target("D3", &tracking),
        Err(GameError::AlreadyTargeted(target))
    );
    assert_eq!(validate_target("D4", &tracking), Ok(Coordinate::new(3, 3)));
}

#[test]
fn malformed_input_wins_over_refire_check() {
    let mut tracking = TrackingGrid::new();
    tracking.set(0, 0, Mark::Hit);
    assert_eq!(
        validate_target("K1", &tracking),
        Err(GameError::InvalidCoordinate(CoordError::InvalidColumn('K')))
    );
}
