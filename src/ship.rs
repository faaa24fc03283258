//! Ship names, directions and the per-ship placement and damage state.

use core::fmt;

use crate::bitboard::{BitBoard, SetBits};
use crate::common::GridError;
use crate::config::{BOARD_SIZE, FLEET};

/// Set of tiles a ship covers on an 11×11 grid.
pub type Footprint = BitBoard<u128, { BOARD_SIZE as usize }>;

/// The ships of the game. `None` stands for "no ship" and is never placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipName {
    None,
    Tug,
    Submarine,
    Destroyer,
    Battleship,
    AircraftCarrier,
}

impl ShipName {
    /// Number of tiles the ship occupies, from the fleet table. `None` is 0.
    pub fn size(self) -> usize {
        FLEET
            .iter()
            .find(|spec| spec.name == self)
            .map_or(0, |spec| spec.size)
    }

    /// Position of the ship in the fleet table.
    pub fn index(self) -> Option<usize> {
        FLEET.iter().position(|spec| spec.name == self)
    }

    /// Iterator over every playable ship, in deployment order.
    pub fn fleet() -> impl Iterator<Item = ShipName> {
        FLEET.iter().map(|spec| spec.name)
    }
}

impl fmt::Display for ShipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShipName::None => "None",
            ShipName::Tug => "Tug",
            ShipName::Submarine => "Submarine",
            ShipName::Destroyer => "Destroyer",
            ShipName::Battleship => "Battleship",
            ShipName::AircraftCarrier => "Aircraft Carrier",
        };
        f.write_str(name)
    }
}

/// Direction a ship extends from its anchor tile.
///
/// `UpDown` ships run down the rows (row increases), `LeftRight` ships run
/// along the columns (column increases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    UpDown,
    LeftRight,
}

impl Direction {
    /// The perpendicular direction.
    pub fn rotated(self) -> Self {
        match self {
            Direction::UpDown => Direction::LeftRight,
            Direction::LeftRight => Direction::UpDown,
        }
    }

    /// Tile `offset` steps from `(row, col)` along this direction.
    #[inline]
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::UpDown => (row + offset, col),
            Direction::LeftRight => (row, col + offset),
        }
    }
}

/// A ship, deployed or not, with its damage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    name: ShipName,
    direction: Direction,
    row: usize,
    col: usize,
    hits: usize,
    tiles: Footprint,
}

impl Ship {
    /// An undeployed, undamaged ship.
    pub fn new(name: ShipName) -> Self {
        Ship {
            name,
            direction: Direction::default(),
            row: 0,
            col: 0,
            hits: 0,
            tiles: Footprint::new(),
        }
    }

    /// Tiles a ship of `size` anchored at (`row`, `col`) would cover.
    /// Fails with `OutOfBounds` on the first tile that leaves the grid.
    pub fn footprint(
        size: usize,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Footprint, GridError> {
        let n = BOARD_SIZE as usize;
        if row >= n || col >= n {
            return Err(GridError::OutOfBounds { row, col });
        }
        let mut tiles = Footprint::new();
        for i in 0..size {
            let (r, c) = direction.step(row, col, i);
            tiles.set(r, c)?;
        }
        Ok(tiles)
    }

    pub fn name(&self) -> ShipName {
        self.name
    }

    pub fn size(&self) -> usize {
        self.name.size()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Anchor row; meaningless until deployed.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Anchor column; meaningless until deployed.
    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_deployed(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// A ship is destroyed once every one of its tiles has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.size() > 0 && self.hits == self.size()
    }

    /// Occupied tiles in row-major order.
    pub fn occupied_tiles(&self) -> SetBits<u128, { BOARD_SIZE as usize }> {
        self.tiles.iter_set_bits()
    }

    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.tiles.contains(row, col)
    }

    pub(crate) fn tiles(&self) -> Footprint {
        self.tiles
    }

    /// Record one hit.
    pub(crate) fn hit(&mut self) -> Result<(), GridError> {
        if self.hits >= self.size() {
            return Err(GridError::Overkill { name: self.name });
        }
        self.hits += 1;
        Ok(())
    }

    pub(crate) fn deploy(&mut self, row: usize, col: usize, direction: Direction, tiles: Footprint) {
        self.row = row;
        self.col = col;
        self.direction = direction;
        self.tiles = tiles;
    }

    /// Forget the current placement, returning the tiles it covered.
    pub(crate) fn remove(&mut self) -> Footprint {
        core::mem::take(&mut self.tiles)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), direction: {:?}, hits: {}/{}, tiles: {:?} }}",
            self.name,
            self.row,
            self.col,
            self.direction,
            self.hits,
            self.size(),
            self.tiles,
        )
    }
}
