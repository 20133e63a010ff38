use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable snapshot of one grid cell handed to a [`Renderer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coords: Coord2,
    pub state: CellState,
}

impl Cell {
    /// Top-left corner of the cell on the drawing surface.
    pub fn origin(&self, cell_size: u32) -> Pixel2 {
        self.coords.to_pixels(cell_size)
    }
}

/// Drawing surface the session redraws after every transition.
///
/// Both calls receive snapshots; nothing a renderer does can change game state.
pub trait Renderer {
    fn draw_grid(&mut self, cells: &[Cell], cell_size: u32);

    fn draw_player(&mut self, position: Pixel2, cell_size: u32);
}
