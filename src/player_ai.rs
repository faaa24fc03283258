//! Computer-controlled players.

use log::debug;
use rand::rngs::SmallRng;

use crate::ai::{EasyAi, ShootingStrategy};
use crate::common::{AttackResult, GridError};
use crate::player::Player;
use crate::sea_grid::SeaGrid;

/// Computer-controlled player: a `Player` driven by a shooting strategy.
#[derive(Debug, Clone)]
pub struct AiPlayer<S = EasyAi> {
    player: Player,
    strategy: S,
}

impl AiPlayer<EasyAi> {
    /// Random-search opponent with a randomly deployed fleet.
    pub fn easy(rng: &mut SmallRng) -> Result<Self, GridError> {
        Ok(Self::new(Player::new(rng)?, EasyAi::new()))
    }
}

impl<S: ShootingStrategy> AiPlayer<S> {
    pub fn new(player: Player, strategy: S) -> Self {
        Self { player, strategy }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Pick a target from what the enemy grid reveals and fire at it.
    /// Returns `None` when the enemy grid has no open sea left.
    pub fn attack(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut SeaGrid,
    ) -> Result<Option<AttackResult>, GridError> {
        let Some((row, col)) = self.strategy.generate_coords(rng, &enemy.enemy_view()) else {
            return Ok(None);
        };
        let result = self.player.shoot(enemy, row, col)?;
        debug!("computer {}", result);
        self.strategy.process_shot(row, col, &result);
        Ok(Some(result))
    }
}
