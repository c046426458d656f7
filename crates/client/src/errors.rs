use rps_primitives::identity::PlayerId;
use serde::Serialize;
use thiserror::Error;

use crate::session::{Action, SessionState};

/// Non-success HTTP reply from the authority.
#[derive(Debug, Serialize, Error)]
#[error("{status_code}: {message}")]
pub struct ClientError {
    pub status_code: u16,
    pub message: String,
}

/// A snapshot the deriver refuses to classify.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("player {player} is neither the first ({first}) nor the second player ({second:?})")]
    IdentityMismatch {
        player: PlayerId,
        first: PlayerId,
        second: Option<PlayerId>,
    },
    #[error(
        "inconsistent move counters: {completed_rounds} completed rounds but {total_moves} moves submitted"
    )]
    InconsistentCounters {
        completed_rounds: u32,
        total_moves: u32,
    },
}

/// Failure of an explicit session action.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    InvalidTransition { action: Action, state: SessionState },

    #[error("cannot {action} while a previous {pending} request is outstanding")]
    Busy { action: Action, pending: Action },

    #[error("cannot submit a move: it is not the local player's turn")]
    NotYourTurn,

    #[error(transparent)]
    Authority(#[from] eyre::Report),

    #[error("the session has been disposed")]
    Disposed,
}

impl SessionError {
    /// Whether the failure came from the authority rather than being rejected
    /// locally before any request was made.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Authority(_))
    }
}
