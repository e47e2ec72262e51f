use crate::ship::ShipClass;

/// Coordinates are signed so out-of-range input from a caller is rejected by
/// validation instead of being unrepresentable.
pub const BOARD_SIZE: i32 = 10;
pub const NUM_SHIPS: usize = 5;
/// Retry budget for one ship during random placement.
pub const PLACEMENT_ATTEMPTS: u32 = 100;

/// The standard fleet, in placement order.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];
