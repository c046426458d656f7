use serde::{Deserialize, Serialize};

use crate::identity::PlayerId;

/// Read-only standings row for one player.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub score: f64,
}

/// Top players, best score first, exactly as the authority ordered them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub players: Vec<LeaderboardEntry>,
}
