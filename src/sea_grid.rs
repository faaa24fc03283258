//! The sea grid: tile matrix, fleet placement and attack resolution.

use core::fmt;

use log::debug;

use crate::common::{AttackResult, GridError, ResultOfAttack};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Direction, Footprint, Ship, ShipName};
use crate::tile::{Tile, TileView};

const N: usize = BOARD_SIZE as usize;

/// A player's own grid: every tile and every ship of the fleet.
#[derive(Clone, PartialEq, Eq)]
pub struct SeaGrid {
    tiles: [[Tile; N]; N],
    ships: [Ship; NUM_SHIPS],
    ships_killed: usize,
}

impl SeaGrid {
    /// An empty grid with the whole fleet undeployed.
    pub fn new() -> Self {
        SeaGrid {
            tiles: core::array::from_fn(|r| core::array::from_fn(|c| Tile::new(r, c))),
            ships: core::array::from_fn(|i| Ship::new(FLEET[i].name)),
            ships_killed: 0,
        }
    }

    pub fn width(&self) -> usize {
        N
    }

    pub fn height(&self) -> usize {
        N
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|r| r.get(col))
    }

    /// The owner's view of a tile, ships included.
    pub fn tile_view(&self, row: usize, col: usize) -> Option<TileView> {
        self.tile(row, col).map(Tile::view)
    }

    /// Every ship of the fleet, deployed or not.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Ship with the given name; `None` for `ShipName::None`.
    pub fn ship_named(&self, name: ShipName) -> Option<&Ship> {
        name.index().map(|i| &self.ships[i])
    }

    /// Ship covering (row, col), if any.
    pub fn ship_at_tile(&self, row: usize, col: usize) -> Option<&Ship> {
        self.tile(row, col)?
            .ship()
            .and_then(|name| self.ship_named(name))
    }

    /// `true` once every ship of the fleet has been placed.
    pub fn all_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_deployed)
    }

    pub fn ships_killed(&self) -> usize {
        self.ships_killed
    }

    pub fn all_destroyed(&self) -> bool {
        self.ships_killed == NUM_SHIPS
    }

    /// Union of all deployed ship tiles.
    pub fn occupancy(&self) -> Footprint {
        self.ships
            .iter()
            .fold(Footprint::new(), |acc, ship| acc | ship.tiles())
    }

    /// Place `name` with its anchor at (row, col), moving it if it was
    /// already deployed. Nothing changes unless every tile is free, unshot
    /// and on the grid. A ship that has taken a hit stays where it is.
    pub fn move_ship(
        &mut self,
        row: usize,
        col: usize,
        name: ShipName,
        direction: Direction,
    ) -> Result<(), GridError> {
        let idx = name.index().ok_or(GridError::InvalidShip)?;
        if self.ships[idx].hits() > 0 {
            return Err(GridError::ShipDamaged { name });
        }
        let tiles = Ship::footprint(name.size(), row, col, direction)?;

        if let Some(other) = self
            .ships
            .iter()
            .filter(|ship| ship.name() != name)
            .find(|ship| !(ship.tiles() & tiles).is_empty())
        {
            return Err(GridError::Overlap { name: other.name() });
        }
        if let Some((r, c)) = tiles
            .iter_set_bits()
            .find(|&(r, c)| self.tiles[r][c].is_shot())
        {
            return Err(GridError::TileShot { row: r, col: c });
        }

        for (r, c) in self.ships[idx].remove().iter_set_bits() {
            self.tiles[r][c].clear_ship();
        }
        for (r, c) in tiles.iter_set_bits() {
            self.tiles[r][c].set_ship(name);
        }
        self.ships[idx].deploy(row, col, direction, tiles);
        debug!("deployed {} at ({}, {}) {:?}", name, row, col, direction);
        Ok(())
    }

    /// Resolve a shot at (row, col).
    pub fn hit_tile(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        let tile = self
            .tiles
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(GridError::OutOfBounds { row, col })?;
        if tile.is_shot() {
            return Err(GridError::AlreadyShot { row, col });
        }
        let owner = tile.ship().and_then(|name| name.index());
        if let Some(idx) = owner {
            if self.ships[idx].is_destroyed() {
                return Err(GridError::Overkill {
                    name: self.ships[idx].name(),
                });
            }
        }

        self.tiles[row][col].shoot()?;
        let result = match owner {
            None => AttackResult::new(ResultOfAttack::Miss, row, col),
            Some(idx) => {
                let ship = &mut self.ships[idx];
                ship.hit()?;
                if ship.is_destroyed() {
                    self.ships_killed += 1;
                    AttackResult::with_ship(ResultOfAttack::Destroyed, row, col, ship.name())
                } else {
                    AttackResult::with_ship(ResultOfAttack::Hit, row, col, ship.name())
                }
            }
        };
        debug!("shot at ({}, {}): {:?}", row, col, result.value());
        Ok(result)
    }

    /// Read-only view for the opponent.
    pub fn enemy_view(&self) -> EnemyGrid<'_> {
        EnemyGrid { grid: self }
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        cell: impl Fn(&Tile) -> char,
    ) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, " {}", c % 10)?;
        }
        for (r, row) in self.tiles.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>2}", r)?;
            for tile in row {
                write!(f, " {}", cell(tile))?;
            }
        }
        Ok(())
    }
}

impl Default for SeaGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SeaGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |tile| match tile.view() {
            TileView::Sea => '~',
            TileView::Ship => 'S',
            TileView::Hit => 'X',
            TileView::Miss => 'o',
        })
    }
}

impl fmt::Debug for SeaGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeaGrid")
            .field("ships", &self.ships)
            .field("ships_killed", &self.ships_killed)
            .finish()
    }
}

/// What an opponent may see of a grid: shots and sunk ships, never the
/// position of undamaged ships.
#[derive(Clone, Copy)]
pub struct EnemyGrid<'a> {
    grid: &'a SeaGrid,
}

impl<'a> EnemyGrid<'a> {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Tile view with unshot ship tiles reported as `Sea`.
    pub fn view(&self, row: usize, col: usize) -> Option<TileView> {
        self.grid.tile_view(row, col).map(|view| match view {
            TileView::Ship => TileView::Sea,
            other => other,
        })
    }

    /// `true` when (row, col) was hit and its ship has gone down.
    pub fn is_sunk_at(&self, row: usize, col: usize) -> bool {
        self.grid
            .tile(row, col)
            .filter(|tile| tile.view() == TileView::Hit)
            .and_then(|_| self.grid.ship_at_tile(row, col))
            .is_some_and(Ship::is_destroyed)
    }

    pub fn ships_killed(&self) -> usize {
        self.grid.ships_killed()
    }

    /// Number of tiles not yet fired upon.
    pub fn unshot_count(&self) -> usize {
        self.grid
            .tiles
            .iter()
            .flatten()
            .filter(|tile| !tile.is_shot())
            .count()
    }
}

impl fmt::Display for EnemyGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.render(f, |tile| match tile.view() {
            TileView::Sea | TileView::Ship => '~',
            TileView::Miss => 'o',
            TileView::Hit if self.is_sunk_at(tile.row(), tile.col()) => '#',
            TileView::Hit => 'X',
        })
    }
}
