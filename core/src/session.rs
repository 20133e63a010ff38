use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a session is within one input. `Won` and `LostPendingConfirmation` only last while
/// the [`Notifier`] is being asked; between inputs the session is always `Playing`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Playing,
    Won,
    LostPendingConfirmation,
}

/// What a single input did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved,
    /// The move would leave the grid; the player stays put.
    Blocked,
    ReturnedToStart,
    Reset,
    /// Reached the goal; the session has already started over.
    Won,
    /// Stepped off the route; `reset` tells whether the player chose to start over.
    Lost { reset: bool },
}

impl MoveOutcome {
    pub const fn is_finish(self) -> bool {
        matches!(self, Self::Won | Self::Lost { .. })
    }
}

/// The whole state of one game: grid, hidden route, the player's trail, and position.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomWalkGenerator> {
    config: GameConfig,
    generator: G,
    grid: Grid,
    path: Path,
    visited: Vec<Coord2>,
    player: Coord2,
    state: SessionState,
}

impl<G: PathGenerator> GameSession<G> {
    /// Generates the first route and shows it, with the player on the origin.
    pub fn new(config: GameConfig, mut generator: G) -> Self {
        let path = generator.generate(&config);
        let mut grid = Grid::new(config.size);
        grid.show_only(&path);

        Self {
            config,
            generator,
            grid,
            path,
            visited: vec![ORIGIN],
            player: ORIGIN,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn visited(&self) -> &[Coord2] {
        &self.visited
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn player_pixels(&self) -> Pixel2 {
        self.player.to_pixels(self.config.cell_size)
    }

    /// Always [`SessionState::Playing`] once `handle_input` has returned.
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_at_origin(&self) -> bool {
        self.player == ORIGIN
    }

    /// Applies one input, settles win or loss through `notifier`, and updates highlighting.
    ///
    /// The caller redraws afterwards with [`GameSession::render`].
    pub fn handle_input(&mut self, input: Input, notifier: &mut impl Notifier) -> MoveOutcome {
        let mut outcome = match input {
            Input::Move(direction) => match direction.step(self.player, self.config.size) {
                Some(next) => {
                    self.player = next;
                    MoveOutcome::Moved
                }
                None => MoveOutcome::Blocked,
            },
            Input::ReturnToStart => {
                self.player = ORIGIN;
                MoveOutcome::ReturnedToStart
            }
            Input::Reset => {
                self.reset();
                MoveOutcome::Reset
            }
        };
        self.record_visit();

        if self.player == self.config.goal() {
            self.state = SessionState::Won;
            log::info!("reached the goal at {:?}", self.player);
            let Acknowledgement::Acknowledged = notifier.announce_win();
            self.reset();
            outcome = MoveOutcome::Won;
        } else if self.is_wrong_step() {
            self.state = SessionState::LostPendingConfirmation;
            log::info!("stepped off the route at {:?}", self.player);
            let reset = match notifier.confirm_loss() {
                LossResponse::Confirmed => {
                    self.reset();
                    true
                }
                LossResponse::Declined => false,
            };
            outcome = MoveOutcome::Lost { reset };
        }
        self.state = SessionState::Playing;

        self.update_highlight();
        log::debug!("{:?} -> {:?} at {:?}", input, outcome, self.player);
        outcome
    }

    /// Sends the grid snapshot and then the player to `renderer`.
    pub fn render(&self, renderer: &mut impl Renderer) {
        let cells: Vec<Cell> = self.grid.cells().collect();
        renderer.draw_grid(&cells, self.config.cell_size);
        renderer.draw_player(self.player_pixels(), self.config.cell_size);
    }

    /// Back to the origin with an empty trail and a freshly generated route.
    fn reset(&mut self) {
        self.player = ORIGIN;
        self.visited.clear();
        self.visited.push(ORIGIN);
        self.path = self.generator.generate(&self.config);
        self.grid.show_only(&self.path);
    }

    fn record_visit(&mut self) {
        if self.visited.last() != Some(&self.player) {
            self.visited.push(self.player);
        }
    }

    /// A hidden cell that is not on the route. Cells on the player's shown trail never count.
    fn is_wrong_step(&self) -> bool {
        !self.grid[self.player].is_revealed() && !self.path.contains(self.player)
    }

    fn update_highlight(&mut self) {
        if self.is_at_origin() {
            self.grid.show_only(&self.path);
        } else {
            self.grid.show_only(&self.visited);
        }
    }
}
