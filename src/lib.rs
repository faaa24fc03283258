#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod bitboard;
mod common;
mod config;
mod deployment;
mod game;
#[cfg(feature = "std")]
mod highscore;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod sea_grid;
mod ship;
mod tile;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use deployment::*;
pub use game::*;
#[cfg(feature = "std")]
pub use highscore::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use sea_grid::*;
pub use ship::*;
pub use tile::*;
