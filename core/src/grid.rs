use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Display state of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Row-major grid of cell display states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn state_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Hides every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Hidden);
    }

    /// Reveals each in-bounds cell of `coords`, leaving the others untouched.
    pub fn reveal_all<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord2>) {
        for &pos in coords {
            if let Some(cell) = self.cells.get_mut(pos.to_nd_index()) {
                *cell = CellState::Revealed;
            }
        }
    }

    /// Hides everything, then reveals exactly `coords`.
    pub fn show_only<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord2>) {
        self.clear();
        self.reveal_all(coords);
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed()).count()
    }

    /// Row-major snapshot for renderers.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.indexed_iter().map(|((row, col), &state)| Cell {
            coords: (row as Coord, col as Coord),
            state,
        })
    }
}

impl Index<Coord2> for Grid {
    type Output = CellState;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
