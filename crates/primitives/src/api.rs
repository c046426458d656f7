use serde::{Deserialize, Serialize};

use crate::game::Move;
use crate::identity::PlayerId;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatePlayerRequest {
    pub id: PlayerId,
    pub name: String,
}

impl CreatePlayerRequest {
    pub const fn new(id: PlayerId, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetPlayerResponse {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLobbyRequest {
    pub player_id: PlayerId,
}

impl JoinLobbyRequest {
    pub const fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeMoveRequest {
    pub player_id: PlayerId,
    #[serde(rename = "move")]
    pub move_: Move,
}

impl MakeMoveRequest {
    pub const fn new(player_id: PlayerId, move_: Move) -> Self {
        Self { player_id, move_ }
    }
}
