use alloc::vec::Vec;
use core::ops::Deref;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered corridor of adjacent, non-repeating grid cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<Coord2>,
}

impl Path {
    /// Only for cells already known to form a corridor, like a finished random walk.
    pub(crate) fn from_walk(cells: Vec<Coord2>) -> Self {
        Self { cells }
    }

    /// Validates that `cells` lie inside `size`, are pairwise adjacent in order, and never repeat.
    pub fn from_coords(size: Coord2, cells: &[Coord2]) -> Result<Self> {
        if cells.is_empty() {
            return Err(GameError::EmptyPath);
        }

        for (i, &pos) in cells.iter().enumerate() {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            if cells[..i].contains(&pos) {
                return Err(GameError::RepeatedCell);
            }
        }

        if cells.windows(2).any(|pair| !is_adjacent(pair[0], pair[1])) {
            return Err(GameError::DisjointPath);
        }

        Ok(Self {
            cells: cells.to_vec(),
        })
    }

    /// Straight along the top row, then down the last column.
    pub fn l_shaped(config: &GameConfig) -> Self {
        let (rows, cols) = config.size;
        let along_top = (0..cols).map(|col| (0, col));
        let down_side = (1..rows).map(|row| (row, cols - 1));
        Self {
            cells: along_top.chain(down_side).collect(),
        }
    }

    pub fn cells(&self) -> &[Coord2] {
        &self.cells
    }

    pub fn start(&self) -> Option<Coord2> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Coord2> {
        self.cells.last().copied()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }

    /// Whether no cell touches a path cell other than its predecessor and successor.
    pub fn is_self_avoiding(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, &pos)| {
            self.cells
                .iter()
                .enumerate()
                .filter(|&(j, &other)| i.abs_diff(j) > 1 && is_adjacent(pos, other))
                .count()
                == 0
        })
    }

    /// Whether this path can stand as the hidden route for `config`.
    pub fn is_route_for(&self, config: &GameConfig) -> bool {
        self.start() == Some(ORIGIN)
            && self.end() == Some(config.goal())
            && self.cells.len() <= usize::from(config.max_path_length())
    }
}

impl Deref for Path {
    type Target = [Coord2];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord2;
    type IntoIter = core::slice::Iter<'a, Coord2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coords_accepts_corridor() {
        let path = Path::from_coords((7, 7), &[(0, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(path.start(), Some((0, 0)));
        assert_eq!(path.end(), Some((1, 1)));
        assert!(path.contains((0, 1)));
        assert!(!path.contains((1, 0)));
    }

    #[test]
    fn from_coords_rejects_bad_input() {
        assert_eq!(Path::from_coords((7, 7), &[]), Err(GameError::EmptyPath));
        assert_eq!(
            Path::from_coords((7, 7), &[(0, 0), (1, 1)]),
            Err(GameError::DisjointPath)
        );
        assert_eq!(
            Path::from_coords((7, 7), &[(0, 0), (0, 1), (0, 0)]),
            Err(GameError::RepeatedCell)
        );
        assert_eq!(
            Path::from_coords((2, 2), &[(0, 0), (0, 1), (0, 2)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn l_shaped_path_is_a_valid_route() {
        let config = GameConfig::default();
        let path = Path::l_shaped(&config);

        assert_eq!(path.len(), 13);
        assert!(path.is_route_for(&config));
        assert!(path.is_self_avoiding());
        assert!(Path::from_coords(config.size, path.cells()).is_ok());
    }

    #[test]
    fn u_turn_touches_itself() {
        let path = Path::from_coords((3, 3), &[(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
        assert!(!path.is_self_avoiding());
    }
}
