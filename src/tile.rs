//! A single grid cell.

use crate::common::GridError;
use crate::ship::ShipName;

/// What a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileView {
    #[default]
    Sea,
    Ship,
    Hit,
    Miss,
}

/// One cell of a sea grid. The owning ship is referenced by name only;
/// the grid holds the ship itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    row: usize,
    col: usize,
    ship: Option<ShipName>,
    view: TileView,
}

impl Tile {
    pub fn new(row: usize, col: usize) -> Self {
        Tile {
            row,
            col,
            ship: None,
            view: TileView::Sea,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn ship(&self) -> Option<ShipName> {
        self.ship
    }

    pub fn view(&self) -> TileView {
        self.view
    }

    pub fn is_shot(&self) -> bool {
        matches!(self.view, TileView::Hit | TileView::Miss)
    }

    /// Fire on the tile: Sea becomes Miss, Ship becomes Hit.
    pub fn shoot(&mut self) -> Result<TileView, GridError> {
        self.view = match self.view {
            TileView::Sea => TileView::Miss,
            TileView::Ship => TileView::Hit,
            TileView::Hit | TileView::Miss => {
                return Err(GridError::AlreadyShot {
                    row: self.row,
                    col: self.col,
                })
            }
        };
        Ok(self.view)
    }

    pub(crate) fn set_ship(&mut self, name: ShipName) {
        self.ship = Some(name);
        if self.view == TileView::Sea {
            self.view = TileView::Ship;
        }
    }

    /// Drop the owner. Shot history is kept.
    pub fn clear_ship(&mut self) {
        self.ship = None;
        if self.view == TileView::Ship {
            self.view = TileView::Sea;
        }
    }
}
