use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use smallvec::SmallVec;

use super::*;

/// Random walk that never lets the corridor touch itself, retried until it lands on the goal.
///
/// Each step picks uniformly among the in-bounds directions whose target cell is off the path
/// and has no path neighbor other than the cell being left. A walk that dead-ends or uses up
/// [`GameConfig::max_path_length`] cells is thrown away. After `attempt_cap` failed walks the
/// generator gives up and returns [`Path::l_shaped`].
#[derive(Clone, Debug)]
pub struct RandomWalkGenerator {
    rng: SmallRng,
    attempt_cap: u32,
}

impl RandomWalkGenerator {
    pub const DEFAULT_ATTEMPT_CAP: u32 = 100_000;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            attempt_cap: Self::DEFAULT_ATTEMPT_CAP,
        }
    }

    pub fn with_attempt_cap(mut self, attempt_cap: u32) -> Self {
        self.attempt_cap = attempt_cap;
        self
    }

    /// Runs one walk, `None` when it stalls before the goal.
    pub fn walk(&mut self, config: &GameConfig) -> Option<Path> {
        let size = config.size;
        let goal = config.goal();
        let max_len = usize::from(config.max_path_length());

        let mut on_path: Array2<bool> = Array2::default(size.to_nd_index());
        let mut cells = Vec::with_capacity(max_len);
        let mut current = ORIGIN;
        on_path[current.to_nd_index()] = true;
        cells.push(current);

        while current != goal {
            let candidates: SmallVec<[Coord2; 4]> = Direction::ALL
                .into_iter()
                .filter_map(|direction| direction.step(current, size))
                .filter(|&next| is_admissible(&on_path, current, next))
                .collect();

            let Some(&next) = candidates.choose(&mut self.rng) else {
                log::trace!("walk dead-ended at {:?}", current);
                return None;
            };
            on_path[next.to_nd_index()] = true;
            cells.push(next);
            current = next;

            if current != goal && cells.len() >= max_len {
                log::trace!("walk ran out of budget at {:?}", current);
                return None;
            }
        }

        Some(Path::from_walk(cells))
    }
}

impl PathGenerator for RandomWalkGenerator {
    fn generate(&mut self, config: &GameConfig) -> Path {
        for attempt in 1..=self.attempt_cap {
            if let Some(path) = self.walk(config) {
                log::debug!(
                    "generated path of {} cells after {} attempt(s)",
                    path.len(),
                    attempt
                );
                return path;
            }
        }

        log::warn!(
            "No path found in {} attempts for {:?}, fallback to L-shaped path",
            self.attempt_cap,
            config
        );
        Path::l_shaped(config)
    }
}

/// `next` may join the path only if it is new and touches no path cell except `from`.
fn is_admissible(on_path: &Array2<bool>, from: Coord2, next: Coord2) -> bool {
    if on_path[next.to_nd_index()] {
        return false;
    }

    on_path
        .iter_neighbors(next)
        .filter(|&pos| pos != from)
        .all(|pos| !on_path[pos.to_nd_index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_route(path: &Path, config: &GameConfig) {
        assert_eq!(path.start(), Some(ORIGIN));
        assert_eq!(path.end(), Some(config.goal()));
        assert!(path.len() <= usize::from(config.max_path_length()));
        assert!(path.windows(2).all(|pair| is_adjacent(pair[0], pair[1])));
        for (i, pos) in path.iter().enumerate() {
            assert!(!path[..i].contains(pos), "{:?} repeats", pos);
        }
        assert!(path.is_self_avoiding(), "{:?} touches itself", path);
    }

    #[test]
    fn generated_paths_are_valid_routes() {
        let config = GameConfig::default();
        let mut generator = RandomWalkGenerator::new(0x5eed);

        for _ in 0..200 {
            let path = generator.generate(&config);
            assert_valid_route(&path, &config);
        }
    }

    #[test]
    fn other_shapes_generate_valid_routes() {
        let configs = [
            GameConfig::new((5, 5), 1, 40).unwrap(),
            GameConfig::new((4, 9), 1, 40).unwrap(),
            GameConfig::new((10, 10), 2, 40).unwrap(),
        ];

        for (seed, config) in configs.iter().enumerate() {
            let mut generator = RandomWalkGenerator::new(seed as u64);
            for _ in 0..20 {
                assert_valid_route(&generator.generate(config), config);
            }
        }
    }

    #[test]
    fn same_seed_same_paths() {
        let config = GameConfig::default();
        let mut a = RandomWalkGenerator::new(42);
        let mut b = RandomWalkGenerator::new(42);

        for _ in 0..10 {
            assert_eq!(a.generate(&config), b.generate(&config));
        }
    }

    #[test]
    fn exhausted_cap_falls_back_to_l_shape() {
        let config = GameConfig::default();
        let mut generator = RandomWalkGenerator::new(7).with_attempt_cap(0);

        let path = generator.generate(&config);

        assert_eq!(path, Path::l_shaped(&config));
        assert_valid_route(&path, &config);
    }

    #[test]
    fn neighbor_of_path_is_not_admissible() {
        let mut on_path: Array2<bool> = Array2::default((3, 3));
        let path: [Coord2; 3] = [(0, 0), (0, 1), (1, 1)];
        for pos in path {
            on_path[pos.to_nd_index()] = true;
        }

        // (1, 0) is beside the origin
        assert!(!is_admissible(&on_path, (1, 1), (1, 0)));
        assert!(is_admissible(&on_path, (1, 1), (2, 1)));
        assert!(is_admissible(&on_path, (1, 1), (1, 2)));
        // stepping back onto the path
        assert!(!is_admissible(&on_path, (1, 1), (0, 1)));
    }

    #[test]
    fn walk_respects_budget() {
        // 3x3 at difficulty 1 allows 4 cells, but the goal is 5 cells away
        let config = GameConfig::new_unchecked((3, 3), 1, 40);
        let mut generator = RandomWalkGenerator::new(1);

        for _ in 0..50 {
            assert_eq!(generator.walk(&config), None);
        }
    }
}
