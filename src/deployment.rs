//! Manual fleet deployment. The selected ship and direction live in a
//! session value owned by whoever drives the game, not in globals.

use log::debug;
use rand::Rng;

use crate::common::GridError;
use crate::player::Player;
use crate::ship::{Direction, ShipName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentSession {
    selected: ShipName,
    direction: Direction,
}

impl Default for DeploymentSession {
    fn default() -> Self {
        Self {
            selected: ShipName::Tug,
            direction: Direction::UpDown,
        }
    }
}

impl DeploymentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> ShipName {
        self.selected
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Select the ship the next deploy moves. `ShipName::None` is ignored.
    pub fn select_ship(&mut self, name: ShipName) {
        if name != ShipName::None {
            self.selected = name;
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move the selected ship so it starts at (row, col).
    pub fn deploy_at(&self, player: &mut Player, row: usize, col: usize) -> Result<(), GridError> {
        player
            .grid_mut()
            .move_ship(row, col, self.selected, self.direction)
    }

    /// Turn the ship covering (row, col) a quarter turn about that tile.
    ///
    /// Returns `Ok(false)` when no ship is there. The rotated ship becomes
    /// the selected one and its new direction becomes the current one; if it
    /// does not fit, it stays where it was and the direction is unchanged.
    pub fn rotate_ship_at(
        &mut self,
        player: &mut Player,
        row: usize,
        col: usize,
    ) -> Result<bool, GridError> {
        let Some(ship) = player.grid().ship_at_tile(row, col) else {
            return Ok(false);
        };
        let (name, direction) = (ship.name(), ship.direction());
        let (anchor_row, anchor_col) = match direction {
            Direction::LeftRight => (row.checked_sub(col - ship.col()), Some(col)),
            Direction::UpDown => (Some(row), col.checked_sub(row - ship.row())),
        };
        self.selected = name;
        let (Some(anchor_row), Some(anchor_col)) = (anchor_row, anchor_col) else {
            return Err(GridError::OutOfBounds { row, col });
        };
        player
            .grid_mut()
            .move_ship(anchor_row, anchor_col, name, direction.rotated())?;
        self.direction = direction.rotated();
        debug!("rotated {} about ({}, {})", name, row, col);
        Ok(true)
    }

    pub fn randomize<R: Rng + ?Sized>(&self, player: &mut Player, rng: &mut R) -> Result<(), GridError> {
        player.randomize_deployment(rng)
    }

    /// Play can start once the whole fleet is on the grid.
    pub fn ready(&self, player: &Player) -> bool {
        player.ready_to_deploy()
    }
}
