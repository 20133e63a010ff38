use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::Direction;

/// One discrete player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Move(Direction),
    /// Teleport to the origin and keep the current path.
    ReturnToStart,
    /// Teleport to the origin, forget the trail, and generate a new path.
    Reset,
}

/// Key names, as reported by `KeyboardEvent.key`, bound to each input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub return_to_start: String,
    pub reset: String,
}

impl KeyBindings {
    pub fn resolve(&self, key: &str) -> Option<Input> {
        use Direction::*;
        use Input::*;

        let bindings = [
            (&self.up, Move(Up)),
            (&self.down, Move(Down)),
            (&self.left, Move(Left)),
            (&self.right, Move(Right)),
            (&self.return_to_start, ReturnToStart),
            (&self.reset, Reset),
        ];

        bindings
            .into_iter()
            .find(|(bound, _)| bound.as_str() == key)
            .map(|(_, input)| input)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            return_to_start: "s".to_string(),
            reset: "r".to_string(),
        }
    }
}
