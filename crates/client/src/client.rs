//! API client for the match authority
//!
//! Typed wrappers over the authority's HTTP endpoints. Every method maps to
//! exactly one request; retry and scheduling decisions belong to the session.

use async_trait::async_trait;
use eyre::Result;
use rps_primitives::api::{CreatePlayerRequest, GetPlayerResponse, JoinLobbyRequest, MakeMoveRequest};
use rps_primitives::game::{MatchId, MatchSnapshot, Move};
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::leaderboard::{Leaderboard, LeaderboardEntry};
use rps_primitives::lobby::{LobbyId, LobbyState};
use url::Url;

use crate::authority::Authority;
use crate::connection::ConnectionInfo;

/// HTTP client for the authority's `game/*` API.
#[derive(Clone, Debug)]
pub struct Client {
    connection: ConnectionInfo,
}

impl Client {
    pub const fn new(connection: ConnectionInfo) -> Self {
        Self { connection }
    }

    pub const fn api_url(&self) -> &Url {
        &self.connection.api_url
    }

    pub async fn create_player(&self, request: CreatePlayerRequest) -> Result<()> {
        self.connection.post_unit("game/player", request).await
    }

    pub async fn get_player(&self, player_id: &PlayerId) -> Result<GetPlayerResponse> {
        let response = self
            .connection
            .get(&format!("game/player/{player_id}"))
            .await?;
        Ok(response)
    }

    pub async fn join_lobby(
        &self,
        lobby_id: &LobbyId,
        request: JoinLobbyRequest,
    ) -> Result<LobbyState> {
        let response = self
            .connection
            .post(&format!("game/lobby/{lobby_id}/join"), request)
            .await?;
        Ok(response)
    }

    pub async fn get_lobby(&self, lobby_id: &LobbyId) -> Result<LobbyState> {
        let response = self
            .connection
            .get(&format!("game/lobby/{lobby_id}"))
            .await?;
        Ok(response)
    }

    pub async fn get_match(&self, match_id: &MatchId) -> Result<MatchSnapshot> {
        let response = self.connection.get(&format!("game/{match_id}")).await?;
        Ok(response)
    }

    pub async fn make_move(&self, match_id: &MatchId, request: MakeMoveRequest) -> Result<()> {
        self.connection
            .post_unit(&format!("game/{match_id}/move"), request)
            .await
    }

    pub async fn get_leaderboard(&self) -> Result<Leaderboard> {
        let response = self.connection.get("game/leaderboard").await?;
        Ok(response)
    }

    pub async fn get_player_stats(&self, player_id: &PlayerId) -> Result<LeaderboardEntry> {
        let response = self
            .connection
            .get(&format!("game/leaderboard/player/{player_id}"))
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl Authority for Client {
    async fn register_player(&self, player: &Player) -> Result<()> {
        self.create_player(CreatePlayerRequest::new(
            player.id.clone(),
            player.name.clone(),
        ))
        .await
    }

    async fn join_lobby(&self, lobby_id: &LobbyId, player_id: &PlayerId) -> Result<LobbyState> {
        Self::join_lobby(self, lobby_id, JoinLobbyRequest::new(player_id.clone())).await
    }

    async fn lobby_state(&self, lobby_id: &LobbyId) -> Result<LobbyState> {
        self.get_lobby(lobby_id).await
    }

    async fn match_state(&self, match_id: &MatchId) -> Result<MatchSnapshot> {
        self.get_match(match_id).await
    }

    async fn submit_move(&self, match_id: &MatchId, player_id: &PlayerId, move_: Move) -> Result<()> {
        self.make_move(match_id, MakeMoveRequest::new(player_id.clone(), move_))
            .await
    }

    async fn leaderboard(&self) -> Result<Leaderboard> {
        self.get_leaderboard().await
    }
}
