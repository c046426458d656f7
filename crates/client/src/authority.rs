use async_trait::async_trait;
use eyre::Result;
use rps_primitives::game::{MatchId, MatchSnapshot, Move};
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::leaderboard::Leaderboard;
use rps_primitives::lobby::{LobbyId, LobbyState};

/// The system of record for players, lobbies, matches and standings.
///
/// The session only ever talks to the authority through this trait, so it can
/// be driven by the HTTP [`Client`](crate::client::Client) or by an
/// in-memory double.
#[async_trait]
pub trait Authority: Send + Sync + 'static {
    async fn register_player(&self, player: &Player) -> Result<()>;

    /// Seats `player_id` in the lobby and returns the resulting occupancy.
    async fn join_lobby(&self, lobby_id: &LobbyId, player_id: &PlayerId) -> Result<LobbyState>;

    async fn lobby_state(&self, lobby_id: &LobbyId) -> Result<LobbyState>;

    async fn match_state(&self, match_id: &MatchId) -> Result<MatchSnapshot>;

    async fn submit_move(&self, match_id: &MatchId, player_id: &PlayerId, move_: Move) -> Result<()>;

    async fn leaderboard(&self) -> Result<Leaderboard>;
}
