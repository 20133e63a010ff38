use super::*;

/// Hands out the same path every time, for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPathGenerator {
    path: Path,
}

impl FixedPathGenerator {
    pub fn new(path: Path) -> Self {
        Self { path }
    }
}

impl PathGenerator for FixedPathGenerator {
    fn generate(&mut self, _config: &GameConfig) -> Path {
        self.path.clone()
    }
}
