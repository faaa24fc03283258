//! Common types for the rules engine: grid errors and attack results.

use crate::bitboard::BitBoardError;
use crate::ship::ShipName;

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultOfAttack {
    /// The shot was not resolved (wrong phase or wrong turn).
    Incomplete,
    /// The shot struck an undamaged segment of a ship that is still afloat.
    Hit,
    /// The shot struck open sea.
    Miss,
    /// The shot sank a ship.
    Destroyed,
    /// The tile had already been fired upon; no shot was charged.
    ShotAlready,
}

impl ResultOfAttack {
    /// A miss hands the turn to the other side; every other outcome keeps it.
    pub fn passes_turn(self) -> bool {
        self == ResultOfAttack::Miss
    }
}

/// Value returned from an attack: outcome, target and the ship involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    value: ResultOfAttack,
    row: usize,
    col: usize,
    ship: Option<ShipName>,
}

impl AttackResult {
    pub(crate) fn new(value: ResultOfAttack, row: usize, col: usize) -> Self {
        Self {
            value,
            row,
            col,
            ship: None,
        }
    }

    pub(crate) fn with_ship(value: ResultOfAttack, row: usize, col: usize, ship: ShipName) -> Self {
        Self {
            value,
            row,
            col,
            ship: Some(ship),
        }
    }

    pub fn value(&self) -> ResultOfAttack {
        self.value
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Ship that was struck; only present for `Hit` and `Destroyed`.
    pub fn ship(&self) -> Option<ShipName> {
        self.ship
    }

    /// `true` for `Hit` and `Destroyed`.
    pub fn is_hit(&self) -> bool {
        matches!(self.value, ResultOfAttack::Hit | ResultOfAttack::Destroyed)
    }
}

impl core::fmt::Display for AttackResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.value, self.ship) {
            (ResultOfAttack::Hit, Some(ship)) => {
                write!(f, "hit the {} at ({}, {})", ship, self.row, self.col)
            }
            (ResultOfAttack::Destroyed, Some(ship)) => {
                write!(f, "destroyed the {} at ({}, {})", ship, self.row, self.col)
            }
            (ResultOfAttack::Miss, _) => write!(f, "missed at ({}, {})", self.row, self.col),
            (ResultOfAttack::ShotAlready, _) => {
                write!(f, "already shot at ({}, {})", self.row, self.col)
            }
            _ => write!(f, "shot at ({}, {}) not resolved", self.row, self.col),
        }
    }
}

/// Errors returned by grid, player and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement collides with another ship.
    Overlap { name: ShipName },
    /// Tile was fired upon before.
    AlreadyShot { row: usize, col: usize },
    /// A ship took more hits than it has tiles.
    Overkill { name: ShipName },
    /// A ship that has been hit cannot be moved.
    ShipDamaged { name: ShipName },
    /// Placement covers a tile that was already fired upon.
    TileShot { row: usize, col: usize },
    /// `ShipName::None` cannot be placed.
    InvalidShip,
    /// Random deployment gave up on a ship.
    UnableToPlaceShip { name: ShipName },
    /// Play requested before every ship was deployed.
    NotDeployed,
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GridError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "Row {}, col {} is outside the grid", row, col)
            }
            GridError::Overlap { name } => write!(f, "Ship placement overlaps the {}", name),
            GridError::AlreadyShot { row, col } => {
                write!(f, "Row {}, col {} has already been shot at", row, col)
            }
            GridError::Overkill { name } => write!(f, "The {} has already been destroyed", name),
            GridError::ShipDamaged { name } => {
                write!(f, "The {} has been hit and cannot move", name)
            }
            GridError::TileShot { row, col } => {
                write!(f, "Row {}, col {} has been shot at and cannot hold a ship", row, col)
            }
            GridError::InvalidShip => write!(f, "No ship selected"),
            GridError::UnableToPlaceShip { name } => write!(f, "Unable to place the {}", name),
            GridError::NotDeployed => write!(f, "Not all ships have been deployed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
