use gloo::dialogs::{alert, confirm};
use trailmark_core as game;

const WIN_MESSAGE: &str = "Congratulations! You reached the bottom right corner.";
const LOSS_PROMPT: &str = "Game Over! Do you want to reset the game?";

/// Native browser `alert`/`confirm`, which block until the player answers.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct BrowserDialogs;

impl game::Notifier for BrowserDialogs {
    fn announce_win(&mut self) -> game::Acknowledgement {
        alert(WIN_MESSAGE);
        game::Acknowledgement::Acknowledged
    }

    fn confirm_loss(&mut self) -> game::LossResponse {
        let response = game::LossResponse::from_confirmed(confirm(LOSS_PROMPT));
        log::debug!("loss prompt: {:?}", response);
        response
    }
}
