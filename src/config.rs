use crate::ship::ShipName;

/// Width and height of every sea grid.
pub const BOARD_SIZE: u8 = 11;
pub const NUM_SHIPS: usize = 5;

/// A playable ship and the number of tiles it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    pub name: ShipName,
    pub size: usize,
}

impl ShipSpec {
    pub const fn new(name: ShipName, size: usize) -> Self {
        Self { name, size }
    }
}

/// The fleet every player deploys, in deployment order. Sizes live here
/// rather than in the `ShipName` discriminants.
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(ShipName::Tug, 1),
    ShipSpec::new(ShipName::Submarine, 2),
    ShipSpec::new(ShipName::Destroyer, 3),
    ShipSpec::new(ShipName::Battleship, 4),
    ShipSpec::new(ShipName::AircraftCarrier, 5),
];

/// Total number of ship tiles in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 2 + 3 + 4 + 5;

/// Points awarded per hit.
pub const HIT_POINTS: i32 = 12;
/// Points deducted per shot fired.
pub const SHOT_COST: i32 = 1;
/// Points deducted per own ship lost.
pub const SHIP_LOST_PENALTY: i32 = 20;

/// Random anchors tried per ship before a deployment gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
/// Random coordinates the search AI samples before scanning for open sea.
pub const MAX_SEARCH_ATTEMPTS: usize = 1_000;

/// Entries kept in a high-score table.
pub const HIGH_SCORE_CAPACITY: usize = 10;
/// Longest high-score name kept; longer names are cut.
pub const NAME_WIDTH: usize = 5;
/// Shorter high-score names are space-padded to this width.
pub const NAME_MIN_WIDTH: usize = 3;
