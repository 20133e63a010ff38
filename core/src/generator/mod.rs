use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait PathGenerator {
    /// Produces a route from the origin to `config.goal()`.
    fn generate(&mut self, config: &GameConfig) -> Path;
}
