use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Difficulty must be at least 1")]
    InvalidDifficulty,
    #[error("Goal needs a path of {min} cells but the budget only allows {max}")]
    UnreachableGoal { min: CellCount, max: CellCount },
    #[error("Canvas of {cols}x{rows} cells at {cell_size}px does not fit in u32 pixels")]
    CanvasTooLarge {
        rows: Coord,
        cols: Coord,
        cell_size: u32,
    },
    #[error("Path must contain at least one cell")]
    EmptyPath,
    #[error("Consecutive path cells must be adjacent")]
    DisjointPath,
    #[error("Path visits the same cell twice")]
    RepeatedCell,
}

pub type Result<T> = core::result::Result<T, GameError>;
