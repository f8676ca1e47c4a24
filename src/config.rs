use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;

/// Standard fleet composition handed to bots: class and how many of it.
pub const FLEET: [(ShipClass, usize); 4] = [
    (ShipClass::Huge, 1),
    (ShipClass::Large, 2),
    (ShipClass::Medium, 3),
    (ShipClass::Small, 4),
];

/// Number of ships in the standard fleet.
pub const TOTAL_SHIPS: usize = 1 + 2 + 3 + 4;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Environment variable consulted by [`crate::init_logging`].
pub const LOG_ENV: &str = "SEABATTLE_LOG";
