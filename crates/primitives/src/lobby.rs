use serde::{Deserialize, Serialize};

use crate::game::MatchId;
use crate::identity::PlayerId;
use crate::utils::{empty_as_none, string_id};

string_id!(
    /// Name of the lobby players meet in.
    LobbyId,
    InvalidLobbyId,
    "lobby id"
);

/// Occupancy of a lobby as reported by the authority.
///
/// Doubles as the join reply: depending on the authority, `game_id` is either
/// assigned the moment the first player joins or only once both seats are
/// taken.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyState {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player1_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player2_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub game_id: Option<MatchId>,
}

impl LobbyState {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.player1_id.is_some() && self.player2_id.is_some()
    }

    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.player1_id.as_ref() == Some(player) || self.player2_id.as_ref() == Some(player)
    }

    /// The occupant that is not `player`, if both seats are taken and one of
    /// them is `player`.
    #[must_use]
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        match (&self.player1_id, &self.player2_id) {
            (Some(first), Some(second)) if first == player => Some(second),
            (Some(first), Some(second)) if second == player => Some(first),
            _ => None,
        }
    }
}
