//! A player: their own grid plus shot bookkeeping.

use log::{debug, error};
use rand::Rng;

use crate::common::{AttackResult, GridError, ResultOfAttack};
use crate::config::{BOARD_SIZE, HIT_POINTS, MAX_PLACEMENT_ATTEMPTS, SHIP_LOST_PENALTY, SHOT_COST};
use crate::sea_grid::SeaGrid;
use crate::ship::{Direction, Ship, ShipName};

#[derive(Debug, Clone, Default)]
pub struct Player {
    grid: SeaGrid,
    shots: u32,
    hits: u32,
    misses: u32,
}

impl Player {
    /// A player whose fleet has been deployed at random.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GridError> {
        let mut player = Self::undeployed();
        player.randomize_deployment(rng)?;
        Ok(player)
    }

    /// A player with an empty grid, for manual deployment.
    pub fn undeployed() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &SeaGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut SeaGrid {
        &mut self.grid
    }

    pub fn ship(&self, name: ShipName) -> Option<&Ship> {
        self.grid.ship_named(name)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.grid.ships()
    }

    pub fn ready_to_deploy(&self) -> bool {
        self.grid.all_deployed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.grid.all_destroyed()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn missed(&self) -> u32 {
        self.misses
    }

    /// Hits earn points, shots and lost ships cost them. A destroyed player
    /// scores zero.
    pub fn score(&self) -> i32 {
        if self.is_destroyed() {
            return 0;
        }
        self.hits as i32 * HIT_POINTS
            - self.shots as i32 * SHOT_COST
            - self.grid.ships_killed() as i32 * SHIP_LOST_PENALTY
    }

    /// Fire at (row, col) on `enemy`. Failed shots leave the counters alone.
    pub fn shoot(
        &mut self,
        enemy: &mut SeaGrid,
        row: usize,
        col: usize,
    ) -> Result<AttackResult, GridError> {
        let result = enemy.hit_tile(row, col)?;
        match result.value() {
            ResultOfAttack::Hit | ResultOfAttack::Destroyed => {
                self.shots += 1;
                self.hits += 1;
            }
            ResultOfAttack::Miss => {
                self.shots += 1;
                self.misses += 1;
            }
            ResultOfAttack::ShotAlready | ResultOfAttack::Incomplete => {}
        }
        Ok(result)
    }

    /// Move every ship to a random free position.
    pub fn randomize_deployment<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        for name in ShipName::fleet() {
            self.place_randomly(rng, name)?;
        }
        Ok(())
    }

    fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R, name: ShipName) -> Result<(), GridError> {
        let n = BOARD_SIZE as usize;
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let direction = if rng.random() {
                Direction::UpDown
            } else {
                Direction::LeftRight
            };
            let row = rng.random_range(0..n);
            let col = rng.random_range(0..n);
            if self.grid.move_ship(row, col, name, direction).is_ok() {
                debug!("placed {} after {} attempt(s)", name, attempt);
                return Ok(());
            }
        }
        error!(
            "gave up placing the {} after {} attempts",
            name, MAX_PLACEMENT_ATTEMPTS
        );
        Err(GridError::UnableToPlaceShip { name })
    }
}
