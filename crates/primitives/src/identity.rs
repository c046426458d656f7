use serde::{Deserialize, Serialize};

use crate::utils::string_id;

string_id!(
    /// Opaque player identifier chosen at registration.
    PlayerId,
    InvalidPlayerId,
    "player id"
);

/// The local player's identity, fixed for a session's lifetime.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
