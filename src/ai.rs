//! Shot selection for computer opponents.
//!
//! Strategies only ever see the masked enemy view.

use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::AttackResult;
use crate::config::MAX_SEARCH_ATTEMPTS;
use crate::sea_grid::EnemyGrid;
use crate::tile::TileView;

/// A way of choosing where to fire next.
///
/// Difficulty tiers are separate implementations; the grid and the player
/// only ever talk to this trait.
pub trait ShootingStrategy {
    /// Next target on `enemy`, or `None` when nothing is left to shoot.
    fn generate_coords(&mut self, rng: &mut SmallRng, enemy: &EnemyGrid<'_>) -> Option<(usize, usize)>;

    /// Feedback on the shot fired at (row, col).
    fn process_shot(&mut self, _row: usize, _col: usize, _result: &AttackResult) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Searching,
}

/// Fires at random open sea and never reacts to hits.
#[derive(Debug, Clone, Default)]
pub struct EasyAi {
    state: AiState,
}

impl EasyAi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    fn search_coords(rng: &mut SmallRng, enemy: &EnemyGrid<'_>) -> Option<(usize, usize)> {
        for _ in 0..MAX_SEARCH_ATTEMPTS {
            let row = rng.random_range(0..enemy.height());
            let col = rng.random_range(0..enemy.width());
            if enemy.view(row, col) == Some(TileView::Sea) {
                return Some((row, col));
            }
        }
        trace!("search sampling exhausted, scanning for open sea");
        random_open_tile(rng, enemy)
    }
}

impl ShootingStrategy for EasyAi {
    fn generate_coords(&mut self, rng: &mut SmallRng, enemy: &EnemyGrid<'_>) -> Option<(usize, usize)> {
        match self.state {
            AiState::Searching => Self::search_coords(rng, enemy),
        }
    }
}

/// Uniform pick among the tiles the enemy view still shows as `Sea`.
pub fn random_open_tile<R: Rng + ?Sized>(rng: &mut R, enemy: &EnemyGrid<'_>) -> Option<(usize, usize)> {
    let open = enemy.unshot_count();
    if open == 0 {
        return None;
    }
    let pick = rng.random_range(0..open);
    (0..enemy.height())
        .flat_map(|r| (0..enemy.width()).map(move |c| (r, c)))
        .filter(|&(r, c)| enemy.view(r, c) == Some(TileView::Sea))
        .nth(pick)
}
