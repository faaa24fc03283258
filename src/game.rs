//! A human-versus-computer game: phases, turn order and the winner.

use log::info;
use rand::rngs::SmallRng;

use crate::ai::{EasyAi, ShootingStrategy};
use crate::common::{AttackResult, GridError, ResultOfAttack};
use crate::deployment::DeploymentSession;
use crate::player::Player;
use crate::player_ai::AiPlayer;
use crate::ship::{Direction, ShipName};

/// Stage of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Deploying,
    Playing,
    Ended,
}

/// Which side fires next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// One game between a human and a computer opponent.
///
/// The session owns both players, the random source and the deployment
/// context, and enforces phase and turn order. A side keeps firing while it
/// hits; a miss hands the turn over.
pub struct GameSession<S = EasyAi> {
    human: Player,
    computer: AiPlayer<S>,
    deployment: DeploymentSession,
    rng: SmallRng,
    phase: GamePhase,
    turn: Side,
    winner: Option<Side>,
}

impl GameSession<EasyAi> {
    /// Session against the random-search AI. Both fleets start randomly
    /// deployed; the human may rearrange theirs before play.
    pub fn new(mut rng: SmallRng) -> Result<Self, GridError> {
        let computer = AiPlayer::easy(&mut rng)?;
        Self::with_opponent(rng, computer)
    }
}

impl<S: ShootingStrategy> GameSession<S> {
    pub fn with_opponent(mut rng: SmallRng, computer: AiPlayer<S>) -> Result<Self, GridError> {
        let human = Player::new(&mut rng)?;
        Ok(Self {
            human,
            computer,
            deployment: DeploymentSession::new(),
            rng,
            phase: GamePhase::Deploying,
            turn: Side::Human,
            winner: None,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &AiPlayer<S> {
        &self.computer
    }

    pub fn deployment(&self) -> &DeploymentSession {
        &self.deployment
    }

    pub fn select_ship(&mut self, name: ShipName) {
        self.deployment.select_ship(name);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.deployment.set_direction(direction);
    }

    /// Move the selected ship. `Ok(false)` outside deployment.
    pub fn deploy_at(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        if self.phase != GamePhase::Deploying {
            return Ok(false);
        }
        self.deployment.deploy_at(&mut self.human, row, col)?;
        Ok(true)
    }

    pub fn rotate_ship_at(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        if self.phase != GamePhase::Deploying {
            return Ok(false);
        }
        self.deployment.rotate_ship_at(&mut self.human, row, col)
    }

    /// `Ok(false)` outside deployment.
    pub fn randomize_deployment(&mut self) -> Result<bool, GridError> {
        if self.phase != GamePhase::Deploying {
            return Ok(false);
        }
        self.deployment.randomize(&mut self.human, &mut self.rng)?;
        Ok(true)
    }

    /// Leave deployment and hand the first shot to the human.
    pub fn end_deployment(&mut self) -> Result<(), GridError> {
        if !self.deployment.ready(&self.human) || !self.computer.player().ready_to_deploy() {
            return Err(GridError::NotDeployed);
        }
        self.phase = GamePhase::Playing;
        self.turn = Side::Human;
        info!("deployment complete, game started");
        Ok(())
    }

    /// The human fires at (row, col) on the computer's grid.
    ///
    /// Out of turn or out of phase the result is `Incomplete`; a tile fired
    /// on before yields `ShotAlready` without using up the turn.
    pub fn human_attack(&mut self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        if self.phase != GamePhase::Playing || self.turn != Side::Human {
            return Ok(AttackResult::new(ResultOfAttack::Incomplete, row, col));
        }
        let result = match self
            .human
            .shoot(self.computer.player_mut().grid_mut(), row, col)
        {
            Err(GridError::AlreadyShot { .. }) => {
                return Ok(AttackResult::new(ResultOfAttack::ShotAlready, row, col))
            }
            other => other?,
        };
        self.after_shot(Side::Human, &result);
        Ok(result)
    }

    /// The computer fires one shot at the human's grid. `None` when it is
    /// not the computer's turn or nothing is left to shoot.
    pub fn computer_attack(&mut self) -> Result<Option<AttackResult>, GridError> {
        if self.phase != GamePhase::Playing || self.turn != Side::Computer {
            return Ok(None);
        }
        let result = self.computer.attack(&mut self.rng, self.human.grid_mut())?;
        if let Some(result) = &result {
            self.after_shot(Side::Computer, result);
        }
        Ok(result)
    }

    /// Let the computer fire until it misses or the game ends. Returns the
    /// number of shots fired.
    pub fn play_computer_turn(&mut self) -> Result<usize, GridError> {
        let mut fired = 0;
        while self.phase == GamePhase::Playing && self.turn == Side::Computer {
            if self.computer_attack()?.is_none() {
                break;
            }
            fired += 1;
        }
        Ok(fired)
    }

    fn after_shot(&mut self, shooter: Side, result: &AttackResult) {
        let target_destroyed = match shooter {
            Side::Human => self.computer.player().is_destroyed(),
            Side::Computer => self.human.is_destroyed(),
        };
        if target_destroyed {
            self.phase = GamePhase::Ended;
            self.winner = Some(shooter);
            info!("{:?} wins", shooter);
        } else if result.value().passes_turn() {
            self.turn = shooter.other();
        }
    }
}
