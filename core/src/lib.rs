#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use input::*;
pub use notify::*;
pub use path::*;
pub use render::*;
pub use session::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod input;
mod notify;
mod path;
mod render;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid size as `(rows, cols)`.
    pub size: Coord2,
    /// Divisor shrinking the maximum path length.
    pub difficulty: u8,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (7, 7);
    pub const DEFAULT_DIFFICULTY: u8 = 1;
    pub const DEFAULT_CELL_SIZE: u32 = 40;

    pub const fn new_unchecked(size: Coord2, difficulty: u8, cell_size: u32) -> Self {
        Self {
            size,
            difficulty,
            cell_size,
        }
    }

    /// Builds a config whose goal can always be reached within the path budget.
    pub fn new((rows, cols): Coord2, difficulty: u8, cell_size: u32) -> Result<Self> {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let cell_size = cell_size.max(1);
        if difficulty == 0 {
            return Err(GameError::InvalidDifficulty);
        }
        let fits = |cells: Coord| u32::from(cells).checked_mul(cell_size).is_some();
        if !fits(rows) || !fits(cols) {
            return Err(GameError::CanvasTooLarge {
                rows,
                cols,
                cell_size,
            });
        }

        let config = Self::new_unchecked((rows, cols), difficulty, cell_size);
        let min = config.min_path_length();
        let max = config.max_path_length();
        if max < min {
            return Err(GameError::UnreachableGoal { min, max });
        }

        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn goal(&self) -> Coord2 {
        (self.size.0.saturating_sub(1), self.size.1.saturating_sub(1))
    }

    /// Longest path the generator may produce, in cells.
    pub const fn max_path_length(&self) -> CellCount {
        let divisor = 2 * self.difficulty as CellCount;
        if divisor == 0 {
            return self.total_cells();
        }
        self.total_cells() / divisor
    }

    /// Shortest possible path from the origin to the goal, in cells.
    pub const fn min_path_length(&self) -> CellCount {
        manhattan(ORIGIN, self.goal()) + 1
    }

    /// Canvas dimensions `(width, height)` in pixels, saturating for unchecked configs.
    pub fn canvas_size(&self) -> Pixel2 {
        (
            u32::from(self.cols()).saturating_mul(self.cell_size),
            u32::from(self.rows()).saturating_mul(self.cell_size),
        )
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_DIFFICULTY,
            Self::DEFAULT_CELL_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_budget() {
        let config = GameConfig::default();
        assert_eq!(config.goal(), (6, 6));
        assert_eq!(config.max_path_length(), 24);
        assert_eq!(config.min_path_length(), 13);
        assert_eq!(config.canvas_size(), (280, 280));
    }

    #[test]
    fn zero_difficulty_is_rejected() {
        assert_eq!(
            GameConfig::new((7, 7), 0, 40),
            Err(GameError::InvalidDifficulty)
        );
    }

    #[test]
    fn unreachable_goal_is_rejected() {
        assert_eq!(
            GameConfig::new((7, 7), 2, 40),
            Err(GameError::UnreachableGoal { min: 13, max: 12 })
        );
        assert_eq!(
            GameConfig::new((1, 1), 1, 40),
            Err(GameError::UnreachableGoal { min: 1, max: 0 })
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let cell_size = u32::MAX / 4;
        assert_eq!(
            GameConfig::new((7, 7), 1, cell_size),
            Err(GameError::CanvasTooLarge {
                rows: 7,
                cols: 7,
                cell_size,
            })
        );

        let widest = GameConfig::new((3, 255), 1, u32::MAX / 255).unwrap();
        assert_eq!(widest.canvas_size(), (u32::MAX, 3 * (u32::MAX / 255)));
    }

    #[test]
    fn non_square_sizes_use_rows_then_cols() {
        let config = GameConfig::new((3, 8), 1, 10).unwrap();
        assert_eq!(config.goal(), (2, 7));
        assert_eq!(config.canvas_size(), (80, 30));
        assert!(config.contains((2, 7)));
        assert!(!config.contains((7, 2)));
    }
}
