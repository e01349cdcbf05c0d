use crate::ship::ShipType;

/// Side length of every grid.
pub const GRID_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 4;

/// The fleet, in the order it is placed (longest first).
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments on a freshly placed grid.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Sampling attempts per ship before placement is declared impossible.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

