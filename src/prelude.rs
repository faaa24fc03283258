//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, AttackResult, Direction, EasyAi, GamePhase, GameSession, GridError, Player,
    ResultOfAttack, SeaGrid, ShipName, ShootingStrategy, Side, TileView,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HighScores};
