use serde::{Deserialize, Serialize};

/// Answer to the blocking win announcement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acknowledgement {
    Acknowledged,
}

/// Answer to the blocking "start over?" prompt shown after a wrong step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossResponse {
    Confirmed,
    Declined,
}

impl LossResponse {
    pub const fn from_confirmed(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Blocking dialogs the session talks to; each call returns only once the player answered.
pub trait Notifier {
    fn announce_win(&mut self) -> Acknowledgement;

    fn confirm_loss(&mut self) -> LossResponse;
}
